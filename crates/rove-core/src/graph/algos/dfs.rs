use crate::error::{Result, RoveError};
use crate::graph::types::{Algorithm, GraphSource, NodeId, TraversalOrder};
use std::collections::HashSet;

/// Depth-first visitation order from `start`, with a fresh visited set.
#[tracing::instrument(skip(graph), fields(start = %start, node_count = graph.node_count()))]
pub fn dfs_order(graph: &dyn GraphSource, start: NodeId) -> Result<TraversalOrder> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let order = dfs_order_with(graph, start, &mut visited)?;

    tracing::debug!(visited = order.len(), "dfs_complete");

    Ok(TraversalOrder {
        algorithm: Algorithm::Dfs,
        start,
        order,
    })
}

/// Depth-first traversal sharing a caller-owned visited set.
///
/// Chained calls across separate explorations skip nodes already seen; a
/// start node that is already visited yields an empty order. The loop is an
/// explicit stack with the visited check at pop time, which reproduces the
/// recursive definition's order exactly: neighbors are pushed in descending
/// order so the smallest unvisited neighbor's subtree is exhausted before
/// the next neighbor is considered.
pub fn dfs_order_with(
    graph: &dyn GraphSource,
    start: NodeId,
    visited: &mut HashSet<NodeId>,
) -> Result<Vec<NodeId>> {
    if !graph.contains(start) {
        return Err(RoveError::NodeNotFound {
            node: start.value(),
            node_count: graph.node_count(),
        });
    }

    let mut order: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);

        for neighbor in graph.neighbors(current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}
