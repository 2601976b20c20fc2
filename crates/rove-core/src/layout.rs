//! Node placement for rendering
//!
//! Maps each node to a 2D position on a character canvas. Consumed only by
//! the playback side; the traversal engine never sees positions.

use crate::graph::{GraphSource, NodeId};
use std::collections::HashMap;

/// Place nodes evenly on an ellipse inscribed in a `width` x `height`
/// canvas, leaving a one-cell margin for multi-digit labels.
///
/// Deterministic: node i sits at angle `i / n` of a full turn, starting at
/// twelve o'clock.
pub fn circle_layout(
    graph: &dyn GraphSource,
    width: u16,
    height: u16,
) -> HashMap<NodeId, (u16, u16)> {
    let count = graph.node_count();
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let rx = (cx - 3.0).max(1.0);
    let ry = (cy - 1.5).max(1.0);

    let mut positions = HashMap::with_capacity(count);
    for node in graph.node_ids() {
        let angle = std::f64::consts::TAU * node.index() as f64 / count as f64
            - std::f64::consts::FRAC_PI_2;
        let x = (cx + rx * angle.cos()).round();
        let y = (cy + ry * angle.sin()).round();
        positions.insert(
            node,
            (
                x.clamp(0.0, f64::from(width) - 1.0) as u16,
                y.clamp(0.0, f64::from(height) - 1.0) as u16,
            ),
        );
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{generate, GraphSpec};

    fn sample() -> crate::graph::RandomGraph {
        generate(&GraphSpec {
            nodes: 8,
            edges: 9,
            seed: Some(2),
        })
        .unwrap()
    }

    #[test]
    fn test_layout_covers_every_node_within_bounds() {
        let graph = sample();
        let positions = circle_layout(&graph, 60, 20);
        assert_eq!(positions.len(), 8);
        for &(x, y) in positions.values() {
            assert!(x < 60);
            assert!(y < 20);
        }
    }

    #[test]
    fn test_layout_is_deterministic() {
        let graph = sample();
        assert_eq!(circle_layout(&graph, 60, 20), circle_layout(&graph, 60, 20));
    }

    #[test]
    fn test_layout_positions_are_distinct_for_small_graphs() {
        let graph = sample();
        let positions = circle_layout(&graph, 60, 20);
        let unique: std::collections::HashSet<_> = positions.values().collect();
        assert_eq!(unique.len(), positions.len());
    }
}
