//! Character canvas rendering for playback frames
//!
//! Edges are plotted as dotted line segments, node labels sit on top at
//! their layout positions. Label colors follow the highlight scheme:
//! current node red, current node that is also the goal green, everything
//! else yellow.

use crate::playback::PlaybackOptions;
use crossterm::style::Stylize;
use rove_core::graph::{GraphSource, NodeId, RandomGraph, TraversalOrder};
use std::collections::HashMap;

/// Per-cell highlight state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellState {
    /// Current node and it is the goal
    Found,
    /// Current node
    Current,
    /// Any other node label
    Idle,
}

pub fn render_frame(
    graph: &RandomGraph,
    positions: &HashMap<NodeId, (u16, u16)>,
    order: &TraversalOrder,
    step: usize,
    options: &PlaybackOptions,
    title: &str,
) -> String {
    let width = super::CANVAS_WIDTH as usize;
    let height = super::CANVAS_HEIGHT as usize;
    let mut cells = vec![vec![' '; width]; height];
    let mut states: Vec<Vec<Option<CellState>>> = vec![vec![None; width]; height];

    for (a, b) in graph.edge_pairs() {
        let (x0, y0) = positions[&a];
        let (x1, y1) = positions[&b];
        draw_line(
            &mut cells,
            i32::from(x0),
            i32::from(y0),
            i32::from(x1),
            i32::from(y1),
        );
    }

    let current = order.order[step];
    for node in graph.node_ids() {
        let (x, y) = positions[&node];
        let state = if node == current && node == options.goal {
            CellState::Found
        } else if node == current {
            CellState::Current
        } else {
            CellState::Idle
        };
        for (i, ch) in node.to_string().chars().enumerate() {
            let cx = (x as usize + i).min(width - 1);
            cells[y as usize][cx] = ch;
            states[y as usize][cx] = Some(state);
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (row, state_row) in cells.iter().zip(states.iter()) {
        for (&ch, &state) in row.iter().zip(state_row.iter()) {
            match state {
                Some(state) if options.color => {
                    let styled = match state {
                        CellState::Found => ch.green(),
                        CellState::Current => ch.red(),
                        CellState::Idle => ch.yellow(),
                    };
                    out.push_str(&styled.to_string());
                }
                _ => out.push(ch),
            }
        }
        out.push('\n');
    }

    let visited: Vec<String> = order.order[..=step].iter().map(ToString::to_string).collect();
    out.push_str(&format!("Visited: {}\n", visited.join(" ")));
    out
}

fn draw_line(cells: &mut [Vec<char>], x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        if x >= 0 && y >= 0 {
            if let Some(cell) = cells
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                // labels are drawn after edges and win the cell
                if *cell == ' ' {
                    *cell = '.';
                }
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use rove_core::graph::{bfs_order, generate, GraphSpec};
    use rove_core::layout::circle_layout;
    use std::time::Duration;

    fn fixture() -> (RandomGraph, TraversalOrder) {
        let graph = generate(&GraphSpec {
            nodes: 5,
            edges: 6,
            seed: Some(8),
        })
        .unwrap();
        let order = bfs_order(&graph, NodeId::new(0)).unwrap();
        (graph, order)
    }

    fn options(color: bool) -> PlaybackOptions {
        PlaybackOptions {
            goal: NodeId::new(3),
            frame_delay: Duration::ZERO,
            color,
            quiet: false,
        }
    }

    #[test]
    fn test_frame_contains_title_and_visited_prefix() {
        let (graph, order) = fixture();
        let positions = circle_layout(&graph, CANVAS_WIDTH, CANVAS_HEIGHT);
        let frame = render_frame(&graph, &positions, &order, 1, &options(false), "BFS Visualization");
        assert!(frame.starts_with("BFS Visualization\n"));
        let visited_line = frame.lines().last().unwrap();
        assert_eq!(
            visited_line,
            format!("Visited: {} {}", order.order[0], order.order[1])
        );
    }

    #[test]
    fn test_plain_frame_has_no_escape_codes() {
        let (graph, order) = fixture();
        let positions = circle_layout(&graph, CANVAS_WIDTH, CANVAS_HEIGHT);
        let frame = render_frame(&graph, &positions, &order, 0, &options(false), "BFS Visualization");
        assert!(!frame.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_frame_marks_current_node() {
        let (graph, order) = fixture();
        let positions = circle_layout(&graph, CANVAS_WIDTH, CANVAS_HEIGHT);
        let frame = render_frame(&graph, &positions, &order, 0, &options(true), "BFS Visualization");
        assert!(frame.contains('\u{1b}'));
    }

    #[test]
    fn test_every_node_label_is_drawn() {
        let (graph, order) = fixture();
        let positions = circle_layout(&graph, CANVAS_WIDTH, CANVAS_HEIGHT);
        let frame = render_frame(&graph, &positions, &order, 0, &options(false), "BFS Visualization");
        for node in graph.node_ids() {
            assert!(frame.contains(&node.to_string()));
        }
    }

    #[test]
    fn test_draw_line_touches_both_endpoints() {
        let mut cells = vec![vec![' '; 10]; 10];
        draw_line(&mut cells, 1, 1, 8, 5);
        assert_eq!(cells[1][1], '.');
        assert_eq!(cells[5][8], '.');
    }
}
