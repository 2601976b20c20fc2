//! Frame-by-frame playback of a traversal order
//!
//! One frame per visited node: the full graph with the current node
//! highlighted and the visited prefix below. Playback pauses a fixed
//! interval between frames and stops early once the goal node is drawn.
//! The traversal itself is already complete before the first frame; only
//! the replay stops early.

pub mod canvas;

use canvas::render_frame;
use crossterm::{cursor, execute, terminal};
use rove_core::error::{Result, RoveError};
use rove_core::graph::{NodeId, RandomGraph, TraversalOrder};
use rove_core::layout::circle_layout;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

pub const CANVAS_WIDTH: u16 = 64;
pub const CANVAS_HEIGHT: u16 = 21;

#[derive(Debug, Clone)]
pub struct PlaybackOptions {
    /// Node the user is searching for
    pub goal: NodeId,
    /// Pause between frames
    pub frame_delay: Duration,
    pub color: bool,
    pub quiet: bool,
}

/// Restore the cursor and bail out cleanly on ctrl-c during playback
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        std::process::exit(130);
    })
    .map_err(|e| RoveError::Other(e.to_string()))
}

/// Animate `order` one node per frame, stopping once the goal is rendered.
pub fn play(graph: &RandomGraph, order: &TraversalOrder, options: &PlaybackOptions) -> Result<()> {
    let positions = circle_layout(graph, CANVAS_WIDTH, CANVAS_HEIGHT);
    let title = format!("{} Visualization", order.algorithm);
    let mut stdout = io::stdout();

    // cursor control only makes sense on a real terminal; piped output
    // gets one frame after another
    let redraw = stdout.is_terminal();

    if redraw {
        execute!(stdout, cursor::Hide)?;
    }
    let outcome = play_frames(graph, order, options, &positions, &title, redraw, &mut stdout);
    if redraw {
        execute!(stdout, cursor::Show)?;
    }
    let found_at = outcome?;

    if !options.quiet {
        match found_at {
            Some(step) => writeln!(
                stdout,
                "Goal node {} found at step {} of {}.",
                options.goal,
                step + 1,
                order.len()
            )?,
            None => writeln!(stdout, "Goal node {} was not reached.", options.goal)?,
        }
    }

    Ok(())
}

fn play_frames(
    graph: &RandomGraph,
    order: &TraversalOrder,
    options: &PlaybackOptions,
    positions: &std::collections::HashMap<NodeId, (u16, u16)>,
    title: &str,
    redraw: bool,
    stdout: &mut io::Stdout,
) -> Result<Option<usize>> {
    let mut frame_height: u16 = 0;
    let mut found_at = None;

    for (step, &node) in order.order.iter().enumerate() {
        if redraw && frame_height > 0 {
            execute!(
                stdout,
                cursor::MoveUp(frame_height),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }

        let frame = render_frame(graph, positions, order, step, options, title);
        frame_height = frame.lines().count() as u16;
        write!(stdout, "{}", frame)?;
        stdout.flush()?;

        if node == options.goal {
            found_at = Some(step);
            break;
        }
        std::thread::sleep(options.frame_delay);
    }

    Ok(found_at)
}
