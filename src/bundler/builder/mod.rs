//! Build orchestration and coordination.
//!
//! The [`Orchestrator`] resolves the host [`Platform`](crate::bundler::Platform),
//! then walks the [`LifecycleState`] machine, asking the platform's stage table
//! for the steps of each [`Stage`] and issuing them through a
//! [`CommandExecutor`](crate::bundler::CommandExecutor).
//!
//! - [`lifecycle`] - stage and state definitions
//! - [`orchestrator`] - the [`Orchestrator`] and its [`BuildReport`]

pub mod lifecycle;
mod orchestrator;

pub use lifecycle::{LifecycleState, Stage};
pub use orchestrator::{BuildReport, Orchestrator};
