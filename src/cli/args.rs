//! Command line argument parsing for tierspell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusFormat;

/// tierspell - Frequency-weighted English spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "tierspell")]
#[command(about = "Frequency-weighted English spelling correction")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "TIERSPELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Corpus used to build the frequency model (defaults to a built-in sample)
    #[arg(long, value_name = "CORPUS_FILE", env = "TIERSPELL_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Layout of the corpus file
    #[arg(long, default_value = "text")]
    pub corpus_format: CorpusFormatArg,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for the effective verbosity. `-q` keeps only errors and
    /// `-vvvv` or more enables tracing of every tier selection.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Propose corrections for one or more words
    Correct(CorrectArgs),

    /// Find and correct unknown words in a piece of text
    Check(CheckArgs),

    /// Show frequency model statistics
    Stats(StatsArgs),

    /// Write the frequency model as a "word count" file
    Export(ExportArgs),
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Never search three edits away
    #[arg(short, long)]
    pub bounded: bool,

    /// Include the selected tier and raw scores
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for checking text
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Never search three edits away
    #[arg(short, long)]
    pub bounded: bool,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Number of most frequent words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for exporting the model
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Corpus layouts accepted by `--corpus-format`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormatArg {
    /// Free running text
    Text,
    /// One word per line
    Words,
    /// "word count" per line
    Frequency,
}

impl From<CorpusFormatArg> for CorpusFormat {
    fn from(arg: CorpusFormatArg) -> Self {
        match arg {
            CorpusFormatArg::Text => CorpusFormat::Text,
            CorpusFormatArg::Words => CorpusFormat::Words,
            CorpusFormatArg::Frequency => CorpusFormat::Frequency,
        }
    }
}
