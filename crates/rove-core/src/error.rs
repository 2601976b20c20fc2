//! Error types and exit codes for rove
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoveError>;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rove operations
#[derive(Error, Debug)]
pub enum RoveError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown algorithm: {0} (expected: bfs or dfs)")]
    UnknownAlgorithm(String),

    #[error("node {node} is not in the graph (valid range: 0..{node_count})")]
    NodeNotFound { node: u32, node_count: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("edge count {edges} out of range for {nodes} nodes (expected {min}..={max})")]
    EdgeCountOutOfRange {
        edges: usize,
        nodes: usize,
        min: usize,
        max: usize,
    },

    // Generic failures (exit code 1)
    #[error("failed to generate a connected graph after {attempts} attempts")]
    GenerationFailed { attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoveError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoveError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoveError::UsageError(_)
            | RoveError::UnknownAlgorithm(_)
            | RoveError::NodeNotFound { .. }
            | RoveError::InvalidValue { .. }
            | RoveError::EdgeCountOutOfRange { .. } => ExitCode::Usage,

            RoveError::GenerationFailed { .. }
            | RoveError::Io(_)
            | RoveError::Json(_)
            | RoveError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoveError::UsageError(_) => "usage_error",
            RoveError::UnknownAlgorithm(_) => "unknown_algorithm",
            RoveError::NodeNotFound { .. } => "node_not_found",
            RoveError::InvalidValue { .. } => "invalid_value",
            RoveError::EdgeCountOutOfRange { .. } => "edge_count_out_of_range",
            RoveError::GenerationFailed { .. } => "generation_failed",
            RoveError::Io(_) => "io_error",
            RoveError::Json(_) => "json_error",
            RoveError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_code() {
        let err = RoveError::UnknownAlgorithm("dijkstra".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);

        let err = RoveError::NodeNotFound {
            node: 9,
            node_count: 5,
        };
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn test_failure_exit_code() {
        let err = RoveError::GenerationFailed { attempts: 1000 };
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_shape() {
        let err = RoveError::UnknownAlgorithm("astar".to_string());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "unknown_algorithm");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("astar"));
    }

    #[test]
    fn test_node_not_found_message_names_range() {
        let err = RoveError::NodeNotFound {
            node: 7,
            node_count: 5,
        };
        assert_eq!(
            err.to_string(),
            "node 7 is not in the graph (valid range: 0..5)"
        );
    }
}
