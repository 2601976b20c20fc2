use crate::error::{Result, RoveError};
use crate::graph::types::{Algorithm, GraphSource, NodeId, TraversalOrder};
use std::collections::{HashSet, VecDeque};

/// Breadth-first visitation order from `start`.
///
/// FIFO queue seeded with the start node. A node joins the order the first
/// time it is dequeued; its not-yet-visited neighbors are then queued in
/// ascending order. The queue draining terminates the traversal, so every
/// node reachable from `start` appears exactly once and unreachable nodes
/// never appear.
#[tracing::instrument(skip(graph), fields(start = %start, node_count = graph.node_count()))]
pub fn bfs_order(graph: &dyn GraphSource, start: NodeId) -> Result<TraversalOrder> {
    if !graph.contains(start) {
        return Err(RoveError::NodeNotFound {
            node: start.value(),
            node_count: graph.node_count(),
        });
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut order: Vec<NodeId> = Vec::new();

    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);

        for neighbor in graph.neighbors(current) {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_complete");

    Ok(TraversalOrder {
        algorithm: Algorithm::Bfs,
        start,
        order,
    })
}
