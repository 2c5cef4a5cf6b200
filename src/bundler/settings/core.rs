//! Core BuildOptions struct and accessors.

use super::{BundleFormat, MobileTargets, PackageManager, ProjectOverrides};
use std::path::{Path, PathBuf};

/// Immutable configuration for one orchestration run.
///
/// Constructed once via [`BuildOptionsBuilder`](super::BuildOptionsBuilder) and
/// only read afterwards. The active platform strategy borrows it to
/// parameterise shell commands and artifact paths.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub(super) project_name: String,
    pub(super) identifier: String,
    pub(super) version: String,
    pub(super) template: String,
    pub(super) manager: PackageManager,
    pub(super) frontend_dist: String,
    pub(super) output_dir: PathBuf,
    pub(super) project_dir: PathBuf,
    pub(super) icon: Option<PathBuf>,
    pub(super) bundles: Option<Vec<BundleFormat>>,
    pub(super) mobile: MobileTargets,
    pub(super) overrides: ProjectOverrides,
}

impl BuildOptions {
    /// Application name; also the binary and product name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Reverse-domain bundle identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Version string, used verbatim in artifact file names.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Scaffolding template name.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Package manager driving the Tauri CLI.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Frontend build output directory, relative to `src-tauri`.
    pub fn frontend_dist(&self) -> &str {
        &self.frontend_dist
    }

    /// Directory that receives the collected artifacts.
    ///
    /// Relative paths are resolved against [`project_dir`](Self::project_dir).
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Root of the Tauri project; commands run from here.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Source image for icon generation, if any.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Whether `format` is enabled for this run.
    pub fn bundle_enabled(&self, format: BundleFormat) -> bool {
        self.bundles
            .as_ref()
            .is_none_or(|enabled| enabled.contains(&format))
    }

    /// Requested mobile targets.
    pub fn mobile(&self) -> MobileTargets {
        self.mobile
    }

    /// Raw replacement payloads for generated project files.
    pub fn overrides(&self) -> &ProjectOverrides {
        &self.overrides
    }
}
