//! Error types for build orchestration.
//!
//! Every failure inside the lifecycle surfaces as one of these variants and is
//! propagated unchanged to the caller of [`Orchestrator::run`](super::Orchestrator::run).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for orchestration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing, building, or collecting a Tauri application.
#[derive(Error, Debug)]
pub enum Error {
    /// Host OS is not one of Windows, Linux, or macOS.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform {
        /// Host identity as reported by the caller
        platform: String,
    },

    /// A shell invocation exited unsuccessfully.
    #[error("Command `{command}` failed with {}", describe_exit(.exit_code))]
    CommandFailed {
        /// Full command line that was executed
        command: String,
        /// Exit code, `None` when the process was terminated by a signal
        exit_code: Option<i32>,
    },

    /// A shell invocation could not be started at all.
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        /// Full command line that was attempted
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// An expected build output was absent when collecting artifacts.
    #[error("Expected build output {} does not exist", .path.display())]
    MissingArtifact {
        /// Path the build tool was contracted to produce
        path: PathBuf,
    },

    /// A required toolchain is missing or older than the supported minimum.
    #[error("Environment check failed for {tool}: {reason}")]
    EnvironmentPrecheck {
        /// Tool that failed the check (e.g. `java`)
        tool: String,
        /// Human-readable reason
        reason: String,
    },

    /// The version string is not a valid semantic version.
    #[error("Invalid version `{version}`: {source}")]
    InvalidVersion {
        /// Rejected version string
        version: String,
        /// Parser error
        #[source]
        source: semver::Error,
    },

    /// Build options failed validation.
    #[error("Invalid build options: {reason}")]
    InvalidOptions {
        /// What was wrong
        reason: String,
    },

    /// Filesystem operation failed on a specific path.
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO errors without path context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON errors while patching project configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Exit code carried by a failed command, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

/// Attach path context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with the operation and path it happened on.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Convert `Option` into a [`Result`] with a message.
pub trait Context<T> {
    /// Fail with `msg` when the value is absent.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
