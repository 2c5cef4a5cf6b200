//! Multi-platform, multi-architecture Tauri build orchestration.
//!
//! A run takes validated [`BuildOptions`], resolves the host [`Platform`],
//! and drives that platform's stage table through four lifecycle stages:
//!
//! 1. `installPrerequisites` - system packages and toolchains
//! 2. `beforeBuild` - dependency install, icons, mobile project init
//! 3. `build` - one Tauri build per target triple, plus mobile builds
//! 4. `afterBuild` - copy every mapped artifact into the output directory
//!
//! All host interaction goes through a [`CommandExecutor`], so the whole
//! lifecycle can be exercised against a recording double.
//!
//! # Example
//!
//! ```no_run
//! use tauri_build_action::bundler::{BuildOptionsBuilder, Orchestrator, ShellExecutor};
//!
//! # async fn example() -> tauri_build_action::bundler::Result<()> {
//! let options = BuildOptionsBuilder::new()
//!     .project_name("demo")
//!     .version("1.2.3")
//!     .output_dir("tauri-builds")
//!     .build()?;
//!
//! let report = Orchestrator::new(options, ShellExecutor::new("."))
//!     .run(std::env::consts::OS)
//!     .await?;
//!
//! for artifact in &report.artifacts {
//!     println!("{} {}", artifact.sha256, artifact.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod builder;
pub mod error;
pub mod exec;
pub mod platform;
pub mod precheck;
pub mod settings;
pub mod utils;

pub use artifacts::{ArtifactEntry, artifact_entries, ensure_unique_destinations};
pub use builder::{BuildReport, LifecycleState, Orchestrator, Stage};
pub use error::{Context, Error, ErrorExt, Result};
pub use exec::{CollectedArtifact, CommandExecutor, CommandSpec, ShellExecutor};
pub use platform::{BuildContext, MobileKind, Platform, PlatformDescriptor, Step};
pub use settings::{
    BuildOptions, BuildOptionsBuilder, BundleFormat, MobileTargets, PackageManager,
    ProjectOverrides,
};
