//! Lifecycle stages and the states they lead to.

use std::fmt;

/// One phase of a build run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// Host package and toolchain setup
    InstallPrerequisites,
    /// One-time preparation shared by all targets
    BeforeBuild,
    /// Per-target compilation
    Build,
    /// Artifact collection
    AfterBuild,
}

impl Stage {
    /// Stages in execution order.
    pub const ALL: [Stage; 4] = [
        Stage::InstallPrerequisites,
        Stage::BeforeBuild,
        Stage::Build,
        Stage::AfterBuild,
    ];

    /// Lifecycle name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::InstallPrerequisites => "installPrerequisites",
            Stage::BeforeBuild => "beforeBuild",
            Stage::Build => "build",
            Stage::AfterBuild => "afterBuild",
        }
    }

    /// State reached once this stage has completed.
    pub fn completed_state(&self) -> LifecycleState {
        match self {
            Stage::InstallPrerequisites => LifecycleState::PrerequisitesInstalled,
            Stage::BeforeBuild => LifecycleState::Prepared,
            Stage::Build => LifecycleState::Built,
            Stage::AfterBuild => LifecycleState::ArtifactsCollected,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress of a run. Transitions only move forward; a failed stage leaves
/// the state where it was.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LifecycleState {
    /// Nothing has run yet
    #[default]
    Idle,
    /// Prerequisites are installed
    PrerequisitesInstalled,
    /// Dependencies, icons and mobile projects are ready
    Prepared,
    /// Every target has been compiled
    Built,
    /// Terminal state
    ArtifactsCollected,
}

impl LifecycleState {
    /// The only stage allowed to run from this state.
    pub fn pending_stage(&self) -> Option<Stage> {
        match self {
            LifecycleState::Idle => Some(Stage::InstallPrerequisites),
            LifecycleState::PrerequisitesInstalled => Some(Stage::BeforeBuild),
            LifecycleState::Prepared => Some(Stage::Build),
            LifecycleState::Built => Some(Stage::AfterBuild),
            LifecycleState::ArtifactsCollected => None,
        }
    }
}
