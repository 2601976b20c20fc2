use crate::error::RoveError;
use serde::Serialize;

/// Opaque identifier for a graph node.
///
/// Nodes carry no attributes beyond identity and adjacency; the integer is
/// an index into the generated node range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId::new(index)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Graph seam consumed by the traversal engine.
///
/// Neighbor lists must come back in ascending node order; with the tie-break
/// fixed, the same graph and start node always produce the same order.
pub trait GraphSource {
    fn node_count(&self) -> usize;

    fn contains(&self, node: NodeId) -> bool;

    /// All node ids, ascending
    fn node_ids(&self) -> Vec<NodeId>;

    /// Adjacent nodes, ascending
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;
}

/// Traversal algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl std::str::FromStr for Algorithm {
    type Err = RoveError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(RoveError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
        }
    }
}

/// Visitation order produced by one traversal call.
///
/// Each reachable node appears exactly once, start node first. The order is
/// built fresh per call and never mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalOrder {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub order: Vec<NodeId>,
}

impl TraversalOrder {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based step at which `goal` is visited, if at all
    pub fn position_of(&self, goal: NodeId) -> Option<usize> {
        self.order.iter().position(|&n| n == goal)
    }
}
