//! Error types and exit codes for maze
//!
//! Exit codes:
//! - 0: Success (including "no solution exists")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad configuration values)
//! - 3: Data error (malformed maze file, missing or duplicate start/finish)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::grid::Position;

/// Exit codes for the maze binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed maze input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, configuring or solving a maze
#[derive(Error, Debug)]
pub enum MazeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown agenda type: {0} (expected: stack or queue)")]
    UnknownDiscipline(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("malformed maze at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("grid of {width}x{height} cannot hold {cells} cells")]
    InvalidShape {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("maze has no start cell ('o')")]
    MissingStart,

    #[error("maze has no finish cell ('*')")]
    MissingFinish,

    #[error("maze has more than one start cell: {first} and {second}")]
    DuplicateStart { first: Position, second: Position },

    #[error("maze has more than one finish cell: {first} and {second}")]
    DuplicateFinish { first: Position, second: Position },

    // Generic failures (exit code 1)
    #[error("frontier is empty")]
    EmptyFrontier,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl MazeError {
    /// Create a malformed-input error for a 1-based line of the maze file
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MazeError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl Into<PathBuf>,
        error: impl std::fmt::Display,
    ) -> Self {
        MazeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.into().display().to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MazeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MazeError::UnknownFormat(_)
            | MazeError::UnknownDiscipline(_)
            | MazeError::UsageError(_)
            | MazeError::InvalidValue { .. } => ExitCode::Usage,

            MazeError::MalformedInput { .. }
            | MazeError::InvalidShape { .. }
            | MazeError::MissingStart
            | MazeError::MissingFinish
            | MazeError::DuplicateStart { .. }
            | MazeError::DuplicateFinish { .. } => ExitCode::Data,

            MazeError::EmptyFrontier
            | MazeError::Json(_)
            | MazeError::Toml(_)
            | MazeError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MazeError::UnknownFormat(_) => "unknown_format",
            MazeError::UnknownDiscipline(_) => "unknown_discipline",
            MazeError::UsageError(_) => "usage_error",
            MazeError::InvalidValue { .. } => "invalid_value",
            MazeError::MalformedInput { .. } => "malformed_input",
            MazeError::InvalidShape { .. } => "invalid_shape",
            MazeError::MissingStart => "missing_start",
            MazeError::MissingFinish => "missing_finish",
            MazeError::DuplicateStart { .. } => "duplicate_start",
            MazeError::DuplicateFinish { .. } => "duplicate_finish",
            MazeError::EmptyFrontier => "empty_frontier",
            MazeError::Json(_) => "json_error",
            MazeError::Toml(_) => "toml_error",
            MazeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let MazeError::MalformedInput { line, .. } = self {
            error_obj["line"] = serde_json::json!(line);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
