use super::parse::parse_algorithm;
use clap::Args;
use rove_core::graph::Algorithm;

/// Parameters for one visualization run.
///
/// Anything left unset is prompted for interactively (except under
/// `--format json`, which never prompts).
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of nodes in the generated graph
    #[arg(long, short = 'n')]
    pub nodes: Option<usize>,

    /// Number of edges in the generated graph
    #[arg(long, short = 'e')]
    pub edges: Option<usize>,

    /// Traversal algorithm
    #[arg(long, short = 'a', value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Goal node to search for
    #[arg(long, short = 'g')]
    pub goal: Option<usize>,

    /// RNG seed for a reproducible graph
    #[arg(long, env = "ROVE_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds to pause between frames
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run a single visualization and skip the restart prompt
    #[arg(long)]
    pub once: bool,
}
