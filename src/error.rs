//! Top-level error types for the action binary.

use thiserror::Error;

/// Result type alias for action operations
pub type Result<T> = std::result::Result<T, ActionError>;

/// Main error type for a run of the action
#[derive(Error, Debug)]
pub enum ActionError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors (terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Build orchestration errors
    #[error(transparent)]
    Build(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ActionError {
    /// Exit code of the failed command behind this error, if any.
    pub fn command_exit_code(&self) -> Option<i32> {
        match self {
            ActionError::Build(e) => e.exit_code(),
            _ => None,
        }
    }
}
