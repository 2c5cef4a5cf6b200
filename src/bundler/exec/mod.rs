//! Command execution seam between the orchestrator and the host.
//!
//! Platform strategies never spawn processes themselves; they describe
//! commands as [`CommandSpec`] values and hand them to a [`CommandExecutor`].
//! [`ShellExecutor`] is the production implementation, tests substitute a
//! recording double.

mod shell;

pub use shell::ShellExecutor;

use crate::bundler::{ArtifactEntry, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One shell command plus environment overrides scoped to that process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandSpec {
    command_line: String,
    envs: Vec<(String, String)>,
}

impl CommandSpec {
    /// Creates a command without environment overrides.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            envs: Vec::new(),
        }
    }

    /// Adds an environment variable visible only to this command.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// The shell command line.
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// Environment overrides in insertion order.
    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Value of an override, if set.
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.envs {
            write!(f, "{key}={value} ")?;
        }
        f.write_str(&self.command_line)
    }
}

/// A file relocated into the output directory.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CollectedArtifact {
    /// Destination path inside the output directory
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the copied file
    pub sha256: String,
}

/// Capability set the orchestrator needs from the host.
///
/// Every method awaits full completion before returning; a failure is final
/// and never retried by callers.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    /// Runs a command to completion, streaming its output.
    ///
    /// Returns the exit code on success; a non-zero exit is an
    /// [`Error::CommandFailed`](crate::bundler::Error::CommandFailed).
    async fn execute(&self, command: &CommandSpec) -> Result<i32>;

    /// Runs a command and returns its trimmed standard output, or its trimmed
    /// standard error when standard output is empty.
    async fn execute_capturing_output(&self, command: &CommandSpec) -> Result<String>;

    /// Creates a directory and all of its parents.
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Copies `entry.from` to `entry.to`.
    ///
    /// A missing source is an [`Error::MissingArtifact`](crate::bundler::Error::MissingArtifact).
    async fn copy_artifact(&self, entry: &ArtifactEntry) -> Result<CollectedArtifact>;
}
