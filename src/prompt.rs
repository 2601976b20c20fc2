//! Interactive prompts for the run flow
//!
//! Helpers are generic over the input/output streams so the re-prompt
//! loops can be exercised against in-memory buffers. Bad input is never
//! fatal here; the user is asked again until the value parses and passes
//! its range check.

use rove_core::error::{Result, RoveError};
use rove_core::graph::{Algorithm, GraphSpec, NodeId};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// One prompt round; None on end of input
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until a whole number is entered
    fn read_usize(&mut self, label: &str) -> Result<usize> {
        loop {
            let Some(line) = self.read_line(label)? else {
                return Err(RoveError::UsageError(
                    "unexpected end of input".to_string(),
                ));
            };
            match line.parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                }
            }
        }
    }

    pub fn read_node_count(&mut self) -> Result<usize> {
        loop {
            let nodes = self.read_usize("Enter the number of nodes: ")?;
            if nodes >= 1 {
                return Ok(nodes);
            }
            writeln!(self.output, "Please enter at least one node.")?;
        }
    }

    /// Re-prompts until the edge count can support a connected simple graph
    pub fn read_edge_count(&mut self, nodes: usize) -> Result<usize> {
        let min = GraphSpec::min_edges(nodes);
        let max = GraphSpec::max_edges(nodes);
        loop {
            let edges = self.read_usize("Enter the number of edges: ")?;
            if (min..=max).contains(&edges) {
                return Ok(edges);
            }
            writeln!(
                self.output,
                "Please enter a valid number of edges ({}..={}).",
                min, max
            )?;
        }
    }

    pub fn read_algorithm(&mut self) -> Result<Algorithm> {
        loop {
            let Some(line) = self.read_line("Enter the search algorithm (BFS or DFS): ")? else {
                return Err(RoveError::UsageError(
                    "unexpected end of input".to_string(),
                ));
            };
            match line.parse::<Algorithm>() {
                Ok(algorithm) => return Ok(algorithm),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    pub fn read_goal(&mut self, node_count: usize) -> Result<NodeId> {
        writeln!(
            self.output,
            "* * Reminder: Your nodes are in range 0..{} * *",
            node_count
        )?;
        loop {
            let goal = self.read_usize("What node would you like to search for? : ")?;
            if goal < node_count {
                return Ok(NodeId::new(goal));
            }
            writeln!(
                self.output,
                "Node {} is outside the range 0..{}.",
                goal, node_count
            )?;
        }
    }

    /// YES restarts the flow; anything else (including end of input) ends it
    pub fn confirm_restart(&mut self) -> Result<bool> {
        match self.read_line("Do you want to restart? (YES/NO): ")? {
            Some(line) => Ok(line.eq_ignore_ascii_case("yes")),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_node_count_reprompts_on_garbage() {
        let mut p = prompter("abc\n-2\n5\n");
        assert_eq!(p.read_node_count().unwrap(), 5);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("Invalid input"));
    }

    #[test]
    fn test_read_node_count_rejects_zero() {
        let mut p = prompter("0\n3\n");
        assert_eq!(p.read_node_count().unwrap(), 3);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("at least one node"));
    }

    #[test]
    fn test_read_edge_count_enforces_connectivity_floor() {
        let mut p = prompter("2\n3\n");
        assert_eq!(p.read_edge_count(4).unwrap(), 3);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("valid number of edges (3..=6)"));
    }

    #[test]
    fn test_read_edge_count_enforces_simple_graph_ceiling() {
        let mut p = prompter("10\n6\n");
        assert_eq!(p.read_edge_count(4).unwrap(), 6);
    }

    #[test]
    fn test_read_algorithm_is_case_insensitive_and_reprompts() {
        let mut p = prompter("astar\ndFs\n");
        assert_eq!(p.read_algorithm().unwrap(), Algorithm::Dfs);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("expected: bfs or dfs"));
    }

    #[test]
    fn test_read_goal_validates_range() {
        let mut p = prompter("9\n2\n");
        assert_eq!(p.read_goal(5).unwrap(), NodeId::new(2));
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("Reminder: Your nodes are in range 0..5"));
        assert!(transcript.contains("outside the range"));
    }

    #[test]
    fn test_confirm_restart() {
        assert!(prompter("YES\n").confirm_restart().unwrap());
        assert!(prompter("yes\n").confirm_restart().unwrap());
        assert!(!prompter("no\n").confirm_restart().unwrap());
        assert!(!prompter("anything\n").confirm_restart().unwrap());
        // closed stdin means no restart, not an error
        assert!(!prompter("").confirm_restart().unwrap());
    }

    #[test]
    fn test_eof_mid_prompt_is_an_error() {
        let mut p = prompter("");
        assert!(p.read_node_count().is_err());
    }
}
