//! The visualization session loop
//!
//! Resolves run parameters from flags, prompting for whatever is missing;
//! generates the graph, computes the traversal order, then either animates
//! it or emits a JSON report. In interactive mode the whole flow repeats
//! until the user declines the restart prompt.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::playback::{self, PlaybackOptions};
use crate::prompt::Prompter;
use rove_core::error::{Result, RoveError};
use rove_core::graph::{
    bfs_order, dfs_order, generate, Algorithm, GraphSource, GraphSpec, NodeId, RandomGraph,
    TraversalOrder,
};

/// The demo always explores from node 0
const START_NODE: NodeId = NodeId::new(0);

/// Machine-readable result of one run
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    nodes: usize,
    edges: usize,
    seed: Option<u64>,
    goal: NodeId,
    /// Zero-based step at which the goal was visited, if at all
    goal_step: Option<usize>,
    #[serde(flatten)]
    traversal: &'a TraversalOrder,
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    if cli.format == OutputFormat::Json {
        run_json(cli, start)
    } else {
        run_interactive(cli, start)
    }
}

fn run_interactive(cli: &Cli, start: Instant) -> Result<()> {
    playback::install_interrupt_handler()?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        run_session(cli, &mut prompter)?;
        if cli.run.once || !prompter.confirm_restart()? {
            break;
        }
    }

    tracing::debug!(elapsed = ?start.elapsed(), "run_complete");
    Ok(())
}

fn run_session<R: BufRead, W: Write>(cli: &Cli, prompter: &mut Prompter<R, W>) -> Result<()> {
    let args = &cli.run;

    let nodes = match args.nodes {
        Some(n) => n,
        None => prompter.read_node_count()?,
    };

    let edges = match args.edges {
        Some(e) => e,
        None => prompter.read_edge_count(nodes)?,
    };

    // flag values go through the same validation the prompts enforce
    let spec = GraphSpec {
        nodes,
        edges,
        seed: args.seed,
    };
    let graph = generate(&spec)?;

    let algorithm = match args.algorithm {
        Some(a) => a,
        None => prompter.read_algorithm()?,
    };

    let goal = resolve_goal(args.goal, &graph, Some(prompter))?;

    let order = traverse(&graph, algorithm)?;

    let options = PlaybackOptions {
        goal,
        frame_delay: Duration::from_millis(args.delay_ms),
        color: !args.no_color,
        quiet: cli.quiet,
    };
    playback::play(&graph, &order, &options)
}

fn run_json(cli: &Cli, start: Instant) -> Result<()> {
    let args = &cli.run;
    let (Some(nodes), Some(edges), Some(algorithm), Some(goal)) =
        (args.nodes, args.edges, args.algorithm, args.goal)
    else {
        return Err(RoveError::UsageError(
            "--format json requires --nodes, --edges, --algorithm, and --goal".to_string(),
        ));
    };

    let spec = GraphSpec {
        nodes,
        edges,
        seed: args.seed,
    };
    let graph = generate(&spec)?;
    let goal = resolve_goal(Some(goal), &graph, None::<&mut Prompter<io::Empty, io::Sink>>)?;

    let order = traverse(&graph, algorithm)?;

    let report = RunReport {
        nodes,
        edges: graph.edge_count(),
        seed: args.seed,
        goal,
        goal_step: order.position_of(goal),
        traversal: &order,
    };

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &report)?;
    writeln!(stdout)?;

    tracing::debug!(elapsed = ?start.elapsed(), "run_complete");
    Ok(())
}

/// Validate a goal flag against the generated node set, or prompt for one.
///
/// An out-of-range flag is rejected rather than silently traversing to
/// completion without a match.
fn resolve_goal<R: BufRead, W: Write>(
    flag: Option<usize>,
    graph: &RandomGraph,
    prompter: Option<&mut Prompter<R, W>>,
) -> Result<NodeId> {
    match (flag, prompter) {
        (Some(goal), _) => {
            let node = NodeId::new(goal);
            if !graph.contains(node) {
                return Err(RoveError::NodeNotFound {
                    node: node.value(),
                    node_count: graph.node_count(),
                });
            }
            Ok(node)
        }
        (None, Some(prompter)) => prompter.read_goal(graph.node_count()),
        (None, None) => Err(RoveError::UsageError("goal node required".to_string())),
    }
}

fn traverse(graph: &RandomGraph, algorithm: Algorithm) -> Result<TraversalOrder> {
    match algorithm {
        Algorithm::Bfs => bfs_order(graph, START_NODE),
        Algorithm::Dfs => dfs_order(graph, START_NODE),
    }
}
