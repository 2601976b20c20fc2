//! Graph generation and traversal
//!
//! The traversal engine operates over an abstract graph:
//! - [`GraphSource`] trait for pluggable node/neighbor enumeration
//! - BFS and DFS visitation orders with shared ordering semantics
//! - Random connected graph generation behind the same trait

pub mod algos;
pub mod generate;
pub mod types;

pub use algos::{bfs_order, dfs_order, dfs_order_with};
pub use generate::{generate, GraphSpec, RandomGraph};
pub use types::{Algorithm, GraphSource, NodeId, TraversalOrder};
