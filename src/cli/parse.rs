use rove_core::graph::Algorithm;

/// Parse the algorithm flag, case-insensitive
pub fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_accepts_mixed_case() {
        assert_eq!(parse_algorithm("BFS").unwrap(), Algorithm::Bfs);
        assert_eq!(parse_algorithm("dfs").unwrap(), Algorithm::Dfs);
    }

    #[test]
    fn test_parse_algorithm_rejects_unknown() {
        let err = parse_algorithm("dijkstra").unwrap_err();
        assert!(err.contains("expected: bfs or dfs"));
    }
}
