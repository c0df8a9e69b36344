//! Mauka Patterns - command-line entrypoint.
//!
//! A thin shell over the library: it loads configuration, initializes
//! logging, and runs multi-pattern scans or prefix completions over files.

use clap::{Parser, Subcommand};
use mauka_patterns_lib::config::{
    self, ConfigLoader, LogConfig, MaukaConfig, DEFAULT_CONFIG_PATH, ENV_PREFIX,
};
use mauka_patterns_lib::data_structures::{AhoCorasickAutomaton, Match, NiihauTrie};
use mauka_patterns_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, MaukaResult, TracingErrorReporter,
};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Mauka Patterns.
#[derive(Parser, Debug)]
#[clap(name = "mauka_patterns", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report every occurrence of the patterns in a text
    Scan {
        /// Pattern to search for (repeatable)
        #[clap(short, long = "pattern")]
        patterns: Vec<String>,

        /// File with one pattern per line
        #[clap(long, value_parser)]
        patterns_file: Option<PathBuf>,

        /// Text to scan (stdin when omitted)
        #[clap(short, long, value_parser)]
        input: Option<PathBuf>,

        /// Print one JSON object per match
        #[clap(long)]
        json: bool,
    },

    /// List stored words starting with a prefix
    Complete {
        /// File with one word per line
        #[clap(short, long, value_parser)]
        words_file: PathBuf,

        /// Prefix to complete
        #[clap(short, long, default_value = "")]
        prefix: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Scan { .. } => "scan",
            Self::Complete { .. } => "complete",
            Self::Validate => "validate",
            Self::GenConfig { .. } => "gen-config",
        }
    }
}

/// One line of `scan --json` output.
#[derive(Serialize)]
struct ScanRecord<'a> {
    #[serde(flatten)]
    found: Match,
    matched: &'a str,
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout only carries command output.
fn init_logging(log: &LogConfig) -> MaukaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| MaukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads non-empty lines from a file.
fn read_lines(path: &Path) -> MaukaResult<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn scan(
    config: &MaukaConfig,
    patterns: Vec<String>,
    patterns_file: Option<&Path>,
    input: Option<&Path>,
    json: bool,
) -> MaukaResult<()> {
    let mut all_patterns = config.automaton.patterns.clone();
    all_patterns.extend(patterns);
    if let Some(path) = patterns_file {
        all_patterns.extend(read_lines(path)?);
    }

    let automaton = AhoCorasickAutomaton::build_with_config(
        &all_patterns,
        config.automaton.to_automaton_config(),
    )?;

    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut count = 0usize;
    for found in automaton.find_iter(&text)? {
        count += 1;
        let matched = automaton.pattern(found.pattern).unwrap_or_default();
        if json {
            serde_json::to_writer(&mut out, &ScanRecord { found, matched })?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{}\t{}", found.start, found.end, matched)?;
        }
    }
    out.flush()?;

    info!(
        patterns = automaton.pattern_count(),
        states = automaton.state_count(),
        matches = count,
        "Scan complete"
    );
    Ok(())
}

fn complete(config: &MaukaConfig, words_file: &Path, prefix: &str) -> MaukaResult<()> {
    let mut trie = NiihauTrie::with_config(config.trie.to_trie_config());
    for word in read_lines(words_file)? {
        trie.insert(&word)?;
    }
    info!(words = trie.len(), nodes = trie.node_count(), "Loaded word list");

    let mut out = BufWriter::new(io::stdout().lock());
    for word in trie.words_with_prefix(prefix) {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}

fn gen_config(output: &Path) -> MaukaResult<()> {
    info!("Generating default configuration");
    let default_config = MaukaConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;
    fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: Command, config: MaukaConfig) -> MaukaResult<()> {
    config::init_global_config(config);
    let global = config::get_global_config()
        .ok_or_else(|| MaukaError::Custom("Global configuration unavailable".to_string()))?;
    let config = global.get();

    match command {
        Command::Scan {
            patterns,
            patterns_file,
            input,
            json,
        } => scan(config, patterns, patterns_file.as_deref(), input.as_deref(), json),
        Command::Complete { words_file, prefix } => complete(config, &words_file, &prefix),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let config_path = args.config.or_else(|| {
        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        default_path.exists().then_some(default_path)
    });
    let loaded = ConfigLoader::new(config_path.as_deref(), ENV_PREFIX).load();

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let component = args.command.name();
    let result = loaded
        .map_err(MaukaError::from)
        .and_then(|config| run(args.command, config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(ErrorContext::new(e, component));
            ExitCode::FAILURE
        }
    }
}
