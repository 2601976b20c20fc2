//! CLI argument parsing for rove
//!
//! Uses clap for argument parsing. Every run parameter is optional on the
//! command line; whatever is missing is prompted for interactively.

pub mod args;
pub mod output;
pub mod parse;

use clap::Parser;

pub use args::RunArgs;
pub use output::OutputFormat;

/// Rove - animated BFS/DFS search over random connected graphs
#[derive(Parser, Debug)]
#[command(name = "rove")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(flatten)]
    pub run: RunArgs,
}
