//! Random connected graph generation
//!
//! G(n, m) sampling: draw `edges` distinct unordered pairs uniformly at
//! random, then redraw the whole graph until it comes out connected. For
//! the node counts this tool targets a handful of redraws is typical.

use crate::error::{Result, RoveError};
use crate::graph::types::{GraphSource, NodeId};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Redraw bound so a pathological edge count cannot spin forever
const MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct GraphSpec {
    pub nodes: usize,
    pub edges: usize,
    /// RNG seed for reproducible graphs; None draws from entropy
    pub seed: Option<u64>,
}

impl GraphSpec {
    /// Fewest edges that can connect `nodes` nodes (a spanning tree)
    pub fn min_edges(nodes: usize) -> usize {
        nodes.saturating_sub(1)
    }

    /// Most edges a simple undirected graph on `nodes` nodes can hold
    pub fn max_edges(nodes: usize) -> usize {
        nodes * nodes.saturating_sub(1) / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.nodes == 0 {
            return Err(RoveError::invalid_value("node count", self.nodes));
        }
        let min = Self::min_edges(self.nodes);
        let max = Self::max_edges(self.nodes);
        if self.edges < min || self.edges > max {
            return Err(RoveError::EdgeCountOutOfRange {
                edges: self.edges,
                nodes: self.nodes,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// A generated connected, simple, undirected graph.
///
/// Immutable once generated; traversals consume it through [`GraphSource`].
#[derive(Debug, Clone)]
pub struct RandomGraph {
    inner: UnGraph<(), ()>,
}

impl RandomGraph {
    /// Edge list as unordered pairs, for rendering and tests
    pub fn edge_pairs(&self) -> Vec<(NodeId, NodeId)> {
        self.inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| (NodeId::new(a.index()), NodeId::new(b.index())))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}

impl GraphSource for RandomGraph {
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.inner.node_count()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        (0..self.inner.node_count()).map(NodeId::new).collect()
    }

    fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut adjacent: Vec<NodeId> = self
            .inner
            .neighbors(NodeIndex::new(node.index()))
            .map(|n| NodeId::new(n.index()))
            .collect();
        adjacent.sort_unstable();
        adjacent
    }
}

/// Generate a connected random graph matching `spec`.
#[tracing::instrument(skip(spec), fields(nodes = spec.nodes, edges = spec.edges, seed = ?spec.seed))]
pub fn generate(spec: &GraphSpec) -> Result<RandomGraph> {
    spec.validate()?;

    let mut rng: StdRng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let graph = sample_gnm(spec.nodes, spec.edges, &mut rng);
        if connected_components(&graph) == 1 {
            tracing::debug!(attempt, "graph_connected");
            return Ok(RandomGraph { inner: graph });
        }
    }

    Err(RoveError::GenerationFailed {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

fn sample_gnm(nodes: usize, edges: usize, rng: &mut StdRng) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(nodes, edges);
    for _ in 0..nodes {
        graph.add_node(());
    }

    let mut chosen: HashSet<(usize, usize)> = HashSet::with_capacity(edges);
    while chosen.len() < edges {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a == b {
            continue;
        }
        let pair = (a.min(b), a.max(b));
        if chosen.insert(pair) {
            graph.add_edge(NodeIndex::new(pair.0), NodeIndex::new(pair.1), ());
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_counts() {
        let spec = GraphSpec {
            nodes: 8,
            edges: 10,
            seed: Some(42),
        };
        let graph = generate(&spec).unwrap();
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_generate_is_connected() {
        let spec = GraphSpec {
            nodes: 12,
            edges: 11,
            seed: Some(7),
        };
        let graph = generate(&spec).unwrap();
        assert_eq!(connected_components(&graph.inner), 1);
    }

    #[test]
    fn test_generate_is_simple() {
        let spec = GraphSpec {
            nodes: 6,
            edges: 9,
            seed: Some(3),
        };
        let graph = generate(&spec).unwrap();
        let mut seen = HashSet::new();
        for (a, b) in graph.edge_pairs() {
            assert_ne!(a, b, "self-loop in generated graph");
            let pair = (a.min(b), a.max(b));
            assert!(seen.insert(pair), "duplicate edge in generated graph");
        }
    }

    #[test]
    fn test_generate_seed_is_deterministic() {
        let spec = GraphSpec {
            nodes: 10,
            edges: 14,
            seed: Some(99),
        };
        let first = generate(&spec).unwrap();
        let second = generate(&spec).unwrap();
        assert_eq!(first.edge_pairs(), second.edge_pairs());
    }

    #[test]
    fn test_generate_single_node() {
        let spec = GraphSpec {
            nodes: 1,
            edges: 0,
            seed: Some(1),
        };
        let graph = generate(&spec).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(NodeId::new(0)).is_empty());
    }

    #[test]
    fn test_generate_rejects_zero_nodes() {
        let spec = GraphSpec {
            nodes: 0,
            edges: 0,
            seed: None,
        };
        assert!(generate(&spec).is_err());
    }

    #[test]
    fn test_generate_rejects_too_few_edges() {
        let spec = GraphSpec {
            nodes: 5,
            edges: 3,
            seed: None,
        };
        let err = generate(&spec).unwrap_err();
        assert!(err.to_string().contains("expected 4..=10"));
    }

    #[test]
    fn test_generate_rejects_too_many_edges() {
        let spec = GraphSpec {
            nodes: 4,
            edges: 7,
            seed: None,
        };
        assert!(generate(&spec).is_err());
    }

    #[test]
    fn test_neighbors_are_ascending() {
        let spec = GraphSpec {
            nodes: 9,
            edges: 16,
            seed: Some(5),
        };
        let graph = generate(&spec).unwrap();
        for node in graph.node_ids() {
            let neighbors = graph.neighbors(node);
            let mut sorted = neighbors.clone();
            sorted.sort_unstable();
            assert_eq!(neighbors, sorted);
        }
    }
}
