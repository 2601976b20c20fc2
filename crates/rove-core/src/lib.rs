//! Rove Core Library
//!
//! Graph generation, layout, and the BFS/DFS traversal engine behind the
//! rove visualizer CLI.

pub mod error;
pub mod graph;
pub mod layout;
pub mod logging;
