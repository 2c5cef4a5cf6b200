//! Recording executor shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tauri_build_action::bundler::{
    ArtifactEntry, BuildOptions, BuildOptionsBuilder, CollectedArtifact, CommandExecutor,
    CommandSpec, Error, Result,
};

/// One interaction with the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Execute(CommandSpec),
    Capture(CommandSpec),
    CreateDir(PathBuf),
    Copy(ArtifactEntry),
}

/// Records every call and fails on demand.
///
/// Toolchain registrations are tracked like rustup does: adding a target a
/// second time succeeds and logs that it is up to date.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
    fail_on: Option<(String, i32)>,
    missing: HashSet<PathBuf>,
    outputs: HashMap<String, String>,
    registered: Mutex<HashSet<String>>,
    up_to_date: Mutex<Vec<String>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first command whose line contains `needle` exits with `code`.
    pub fn fail_on(mut self, needle: &str, code: i32) -> Self {
        self.fail_on = Some((needle.to_string(), code));
        self
    }

    /// Copying from `from` reports a missing build output.
    pub fn missing(mut self, from: impl Into<PathBuf>) -> Self {
        self.missing.insert(from.into());
        self
    }

    /// Captured output returned for `command_line`.
    pub fn output(mut self, command_line: &str, output: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), output.to_string());
        self
    }

    /// `triple` is already installed, as on a reused runner.
    pub fn registered(self, triple: &str) -> Self {
        self.registered.lock().unwrap().insert(triple.to_string());
        self
    }

    /// Messages emitted by `rustup target add` for already installed targets.
    pub fn up_to_date(&self) -> Vec<String> {
        self.up_to_date.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Command lines passed to `execute`, in order.
    pub fn executed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Execute(spec) => Some(spec.command_line().to_string()),
                _ => None,
            })
            .collect()
    }

    /// Full specs passed to `execute`, in order.
    pub fn executed_specs(&self) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Execute(spec) => Some(spec),
                _ => None,
            })
            .collect()
    }

    pub fn copies(&self) -> Vec<ArtifactEntry> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Copy(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, spec: &CommandSpec) -> Result<()> {
        match &self.fail_on {
            Some((needle, code)) if spec.command_line().contains(needle.as_str()) => {
                Err(Error::CommandFailed {
                    command: spec.command_line().to_string(),
                    exit_code: Some(*code),
                })
            }
            _ => Ok(()),
        }
    }

    fn register(&self, spec: &CommandSpec) {
        let Some(triple) = spec.command_line().strip_prefix("rustup target add ") else {
            return;
        };
        if !self.registered.lock().unwrap().insert(triple.to_string()) {
            self.up_to_date.lock().unwrap().push(format!(
                "info: component 'rust-std' for target '{triple}' is up to date"
            ));
        }
    }
}

impl CommandExecutor for RecordingExecutor {
    async fn execute(&self, command: &CommandSpec) -> Result<i32> {
        self.record(Call::Execute(command.clone()));
        self.check(command)?;
        self.register(command);
        Ok(0)
    }

    async fn execute_capturing_output(&self, command: &CommandSpec) -> Result<String> {
        self.record(Call::Capture(command.clone()));
        self.check(command)?;
        Ok(self
            .outputs
            .get(command.command_line())
            .cloned()
            .unwrap_or_default())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.record(Call::CreateDir(path.to_path_buf()));
        Ok(())
    }

    async fn copy_artifact(&self, entry: &ArtifactEntry) -> Result<CollectedArtifact> {
        self.record(Call::Copy(entry.clone()));
        if self.missing.contains(&entry.from) {
            return Err(Error::MissingArtifact {
                path: entry.from.clone(),
            });
        }
        Ok(CollectedArtifact {
            path: entry.to.clone(),
            size: 0,
            sha256: String::new(),
        })
    }
}

/// Options for the `demo` 1.2.3 project writing to `out`.
pub fn demo_options() -> BuildOptionsBuilder {
    BuildOptionsBuilder::new()
        .project_name("demo")
        .version("1.2.3")
        .output_dir("out")
}

pub fn demo() -> BuildOptions {
    demo_options().build().unwrap()
}
