//! Host platforms, their static build descriptors, and stage tables.
//!
//! Each supported host is a [`Platform`] variant. A variant owns two pieces of
//! static data:
//!
//! - a [`PlatformDescriptor`] listing, in build order, every target triple the
//!   host compiles for together with its filename token, scoped environment,
//!   and bundle-format skip list;
//! - a [`StageTable`] of four plain function pointers, one per lifecycle
//!   stage, each turning a [`BuildContext`] into the ordered [`Step`]s the
//!   orchestrator executes.
//!
//! Stage functions are pure: they never touch the host, which keeps command
//! construction testable on any machine.

pub mod commands;
mod linux;
mod macos;
mod mobile;
mod stages;
mod windows;

pub use mobile::MobileKind;

use crate::bundler::{
    ArtifactEntry, BuildOptions, BundleFormat, Error, Result, builder::Stage, exec::CommandSpec,
};
use serde::Serialize;
use std::fmt;

/// Host operating system a run targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows (MSVC toolchain)
    Windows,
    /// Linux (Debian/Ubuntu package tooling)
    Linux,
    /// macOS
    MacOs,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Linux, Platform::MacOs];

    /// Maps a host identity string to a platform.
    ///
    /// Accepts Rust's `std::env::consts::OS` values as well as Node-style
    /// `win32`/`darwin`.
    pub fn from_os_str(os: &str) -> Result<Self> {
        match os.trim().to_ascii_lowercase().as_str() {
            "windows" | "win32" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            _ => Err(Error::UnsupportedPlatform {
                platform: os.to_string(),
            }),
        }
    }

    /// Label used in artifact file names.
    pub fn os_label(&self) -> &'static str {
        self.descriptor().os_label
    }

    /// Static build description for this platform.
    pub fn descriptor(&self) -> &'static PlatformDescriptor {
        match self {
            Platform::Windows => &windows::DESCRIPTOR,
            Platform::Linux => &linux::DESCRIPTOR,
            Platform::MacOs => &macos::DESCRIPTOR,
        }
    }

    /// Lifecycle stage functions for this platform.
    pub fn stages(&self) -> &'static StageTable {
        match self {
            Platform::Windows => &windows::STAGES,
            Platform::Linux => &linux::STAGES,
            Platform::MacOs => &macos::STAGES,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.os_label())
    }
}

/// One compilation target of a platform.
#[derive(Debug)]
pub struct TargetDescriptor {
    /// Triple passed to the build tool (`--target`)
    pub triple: &'static str,
    /// Architecture token used by Tauri's bundle names and ours
    pub arch: &'static str,
    /// Toolchain targets that must be registered before building
    pub toolchain_targets: &'static [&'static str],
    /// Environment overrides scoped to this target's build invocation
    pub env: &'static [(&'static str, &'static str)],
    /// Bundle formats the build tool cannot produce for this target
    pub skipped_formats: &'static [BundleFormat],
}

impl TargetDescriptor {
    /// Formats built and collected for this target in this run.
    ///
    /// Platform defaults minus the target's skip list, restricted to the
    /// formats enabled in `options`. Order follows the platform default list.
    pub fn effective_formats(
        &self,
        platform: &PlatformDescriptor,
        options: &BuildOptions,
    ) -> Vec<BundleFormat> {
        platform
            .bundle_formats
            .iter()
            .copied()
            .filter(|format| !self.skipped_formats.contains(format))
            .filter(|format| options.bundle_enabled(*format))
            .collect()
    }
}

/// Static build description of a platform.
#[derive(Debug)]
pub struct PlatformDescriptor {
    /// Label used in artifact file names
    pub os_label: &'static str,
    /// Extension of the raw executable, if the OS uses one
    pub binary_extension: Option<&'static str>,
    /// Bundle formats built by default, in collection order
    pub bundle_formats: &'static [BundleFormat],
    /// Targets in build order
    pub targets: &'static [TargetDescriptor],
    /// Mobile targets this host can build
    pub mobile: &'static [MobileKind],
}

/// Inputs shared by every stage function.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    /// Platform the run targets
    pub platform: Platform,
    /// Options for this run
    pub options: &'a BuildOptions,
}

impl<'a> BuildContext<'a> {
    /// Creates a context.
    pub fn new(platform: Platform, options: &'a BuildOptions) -> Self {
        Self { platform, options }
    }

    /// Static description of the active platform.
    pub fn descriptor(&self) -> &'static PlatformDescriptor {
        self.platform.descriptor()
    }

    /// Mobile targets both requested and buildable on this host.
    pub fn mobile_targets(&self) -> Vec<MobileKind> {
        self.descriptor()
            .mobile
            .iter()
            .copied()
            .filter(|kind| kind.requested(self.options))
            .collect()
    }

    /// Mobile targets requested but not buildable on this host.
    pub fn unsupported_mobile_targets(&self) -> Vec<MobileKind> {
        MobileKind::ALL
            .into_iter()
            .filter(|kind| kind.requested(self.options))
            .filter(|kind| !self.descriptor().mobile.contains(kind))
            .collect()
    }
}

/// A unit of work emitted by a stage function.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// Run a shell command
    Run(CommandSpec),
    /// Copy a build output into the output directory
    Copy(ArtifactEntry),
}

/// Signature shared by every stage function.
pub type StageFn = fn(&BuildContext<'_>) -> Vec<Step>;

/// The four lifecycle stage functions of one platform.
pub struct StageTable {
    /// Package-manager and toolchain setup
    pub install_prerequisites: StageFn,
    /// One-time, architecture-independent preparation
    pub before_build: StageFn,
    /// Per-architecture compilation
    pub build: StageFn,
    /// Artifact collection
    pub after_build: StageFn,
}

impl StageTable {
    /// Function implementing `stage`.
    pub fn get(&self, stage: Stage) -> StageFn {
        match stage {
            Stage::InstallPrerequisites => self.install_prerequisites,
            Stage::BeforeBuild => self.before_build,
            Stage::Build => self.build,
            Stage::AfterBuild => self.after_build,
        }
    }

    /// Steps `stage` issues for `ctx`.
    pub fn steps(&self, stage: Stage, ctx: &BuildContext<'_>) -> Vec<Step> {
        (self.get(stage))(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::BuildOptionsBuilder;

    #[test]
    fn host_strings_map_to_platforms() {
        assert_eq!(Platform::from_os_str("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_os_str("darwin").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_os_str("macos").unwrap(), Platform::MacOs);
        assert_eq!(Platform::from_os_str("win32").unwrap(), Platform::Windows);
        assert!(matches!(
            Platform::from_os_str("freebsd"),
            Err(Error::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn every_platform_has_targets_and_formats() {
        for platform in Platform::ALL {
            let descriptor = platform.descriptor();
            assert!(!descriptor.targets.is_empty(), "{platform}");
            assert!(!descriptor.bundle_formats.is_empty(), "{platform}");
            for target in descriptor.targets {
                assert!(!target.toolchain_targets.is_empty(), "{}", target.triple);
            }
        }
    }

    #[test]
    fn skip_list_and_restriction_combine() {
        let options = BuildOptionsBuilder::new()
            .project_name("demo")
            .version("1.0.0")
            .output_dir("out")
            .bundles(vec![BundleFormat::AppImage])
            .build()
            .unwrap();
        let linux = Platform::Linux.descriptor();
        let amd64 = &linux.targets[0];
        let arm64 = &linux.targets[2];
        assert_eq!(amd64.effective_formats(linux, &options), vec![BundleFormat::AppImage]);
        assert!(arm64.effective_formats(linux, &options).is_empty());
    }

    #[test]
    fn unsupported_mobile_targets_are_reported() {
        let options = BuildOptionsBuilder::new()
            .project_name("demo")
            .version("1.0.0")
            .output_dir("out")
            .mobile(crate::bundler::MobileTargets {
                android: true,
                ios: true,
            })
            .build()
            .unwrap();
        let ctx = BuildContext::new(Platform::Linux, &options);
        assert_eq!(ctx.mobile_targets(), vec![MobileKind::Android]);
        assert_eq!(ctx.unsupported_mobile_targets(), vec![MobileKind::Ios]);

        let ctx = BuildContext::new(Platform::Windows, &options);
        assert!(ctx.mobile_targets().is_empty());
    }
}
