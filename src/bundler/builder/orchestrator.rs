//! Main build orchestration.
//!
//! This module provides the [`Orchestrator`] that drives a platform's stage
//! table through the lifecycle and collects the resulting artifacts.

use crate::bundler::{
    BuildOptions, CollectedArtifact, Platform, Result,
    artifacts::ensure_unique_destinations,
    exec::CommandExecutor,
    platform::{BuildContext, Step},
};

use super::lifecycle::{LifecycleState, Stage};
use serde::Serialize;

/// Outcome of a successful run.
#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    /// Platform the run resolved to
    pub platform: Platform,
    /// Artifacts in the output directory, in collection order
    pub artifacts: Vec<CollectedArtifact>,
}

/// Drives one build run.
///
/// Commands run strictly one at a time: each step is awaited to completion
/// before the next is issued, and the first failure ends the run with that
/// error unchanged.
///
/// # Examples
///
/// ```no_run
/// use tauri_build_action::bundler::{BuildOptionsBuilder, Orchestrator, ShellExecutor};
///
/// # async fn example() -> tauri_build_action::bundler::Result<()> {
/// let options = BuildOptionsBuilder::new()
///     .project_name("demo")
///     .version("1.2.3")
///     .output_dir("tauri-builds")
///     .build()?;
///
/// let orchestrator = Orchestrator::new(options, ShellExecutor::new("."));
/// let report = orchestrator.run(std::env::consts::OS).await?;
/// println!("Collected {} artifacts", report.artifacts.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Orchestrator<E> {
    options: BuildOptions,
    executor: E,
}

impl<E: CommandExecutor> Orchestrator<E> {
    /// Creates an orchestrator over `executor`.
    pub fn new(options: BuildOptions, executor: E) -> Self {
        Self { options, executor }
    }

    /// Executor commands are issued to.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Runs the full lifecycle for the host identified by `host_os`.
    ///
    /// An unsupported host fails before any command is issued.
    pub async fn run(&self, host_os: &str) -> Result<BuildReport> {
        let platform = Platform::from_os_str(host_os)?;
        let ctx = BuildContext::new(platform, &self.options);
        let table = platform.stages();

        log::info!("Building {} for {platform}", self.options.project_name());
        for kind in ctx.unsupported_mobile_targets() {
            log::warn!("{kind} builds are not supported on {platform}; skipping");
        }

        self.executor
            .create_dir_all(self.options.output_dir())
            .await?;

        let mut state = LifecycleState::Idle;
        let mut artifacts = Vec::new();
        while let Some(stage) = state.pending_stage() {
            log::info!("Stage {stage} started");
            let steps = table.steps(stage, &ctx);

            if stage == Stage::AfterBuild {
                let entries: Vec<_> = steps
                    .iter()
                    .filter_map(|step| match step {
                        Step::Copy(entry) => Some(entry.clone()),
                        Step::Run(_) => None,
                    })
                    .collect();
                ensure_unique_destinations(&entries)?;
            }

            for step in &steps {
                match step {
                    Step::Run(command) => {
                        self.executor.execute(command).await?;
                    }
                    Step::Copy(entry) => {
                        let artifact = self.executor.copy_artifact(entry).await?;
                        log::info!(
                            "Collected {} ({} bytes)",
                            artifact.path.display(),
                            artifact.size
                        );
                        artifacts.push(artifact);
                    }
                }
            }

            state = stage.completed_state();
            log::info!("Stage {stage} finished");
        }

        Ok(BuildReport {
            platform,
            artifacts,
        })
    }
}
