//! Builder for constructing BuildOptions.

use super::{BuildOptions, BundleFormat, MobileTargets, PackageManager, ProjectOverrides};
use crate::bundler::error::{Context, Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PROJECT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("static regex is valid")
});

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").expect("static regex is valid")
});

/// Builder for constructing [`BuildOptions`].
///
/// # Examples
///
/// ```no_run
/// use tauri_build_action::bundler::BuildOptionsBuilder;
///
/// # fn example() -> tauri_build_action::bundler::Result<()> {
/// let options = BuildOptionsBuilder::new()
///     .project_name("demo")
///     .identifier("com.example.demo")
///     .version("1.2.3")
///     .output_dir("tauri-builds")
///     .build()?;
/// assert_eq!(options.version(), "1.2.3");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BuildOptionsBuilder {
    project_name: Option<String>,
    identifier: Option<String>,
    version: Option<String>,
    template: Option<String>,
    manager: PackageManager,
    frontend_dist: Option<String>,
    output_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
    icon: Option<PathBuf>,
    bundles: Option<Vec<BundleFormat>>,
    mobile: MobileTargets,
    overrides: ProjectOverrides,
}

impl BuildOptionsBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project name.
    ///
    /// # Required
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Sets the bundle identifier.
    ///
    /// Default: `com.<project_name>.app`, with `_` and `.` replaced by `-`
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets the application version.
    ///
    /// # Required
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the scaffolding template.
    ///
    /// Default: `vanilla`
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the package manager.
    ///
    /// Default: npm
    pub fn manager(mut self, manager: PackageManager) -> Self {
        self.manager = manager;
        self
    }

    /// Sets the frontend dist directory written into `tauri.conf.json`.
    ///
    /// Default: `../dist`
    pub fn frontend_dist(mut self, dist: impl Into<String>) -> Self {
        self.frontend_dist = Some(dist.into());
        self
    }

    /// Sets the artifact output directory.
    ///
    /// # Required
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the project root.
    ///
    /// Default: `.`
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the source icon used to regenerate the icon set.
    pub fn icon<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon = Some(path.as_ref().to_path_buf());
        self
    }

    /// Restricts the bundle formats built and collected.
    ///
    /// Default: None (every format the platform supports)
    pub fn bundles(mut self, bundles: Vec<BundleFormat>) -> Self {
        self.bundles = Some(bundles);
        self
    }

    /// Sets the requested mobile targets.
    pub fn mobile(mut self, mobile: MobileTargets) -> Self {
        self.mobile = mobile;
        self
    }

    /// Sets the raw project file overrides.
    pub fn overrides(mut self, overrides: ProjectOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Validates and builds the options.
    ///
    /// # Errors
    ///
    /// - `project_name`, `version` or `output_dir` missing
    /// - project name not usable as a file and crate name
    /// - identifier not in reverse-domain notation
    /// - version not a semantic version
    pub fn build(self) -> Result<BuildOptions> {
        let project_name = self.project_name.context("project_name is required")?;
        if !PROJECT_NAME.is_match(&project_name) {
            return Err(Error::InvalidOptions {
                reason: format!(
                    "project name `{project_name}` must start with a letter or digit and contain only letters, digits, '.', '_' or '-'"
                ),
            });
        }

        let identifier = self
            .identifier
            .unwrap_or_else(|| format!("com.{}.app", project_name.replace(['_', '.'], "-")));
        if !IDENTIFIER.is_match(&identifier) {
            return Err(Error::InvalidOptions {
                reason: format!("identifier `{identifier}` must be in reverse-domain notation"),
            });
        }

        let version = self.version.context("version is required")?;
        semver::Version::parse(&version).map_err(|source| Error::InvalidVersion {
            version: version.clone(),
            source,
        })?;

        if self.bundles.as_ref().is_some_and(Vec::is_empty) {
            return Err(Error::InvalidOptions {
                reason: "bundle restriction must name at least one format".into(),
            });
        }

        Ok(BuildOptions {
            project_name,
            identifier,
            version,
            template: self.template.unwrap_or_else(|| "vanilla".into()),
            manager: self.manager,
            frontend_dist: self.frontend_dist.unwrap_or_else(|| "../dist".into()),
            output_dir: self.output_dir.context("output_dir is required")?,
            project_dir: self.project_dir.unwrap_or_else(|| PathBuf::from(".")),
            icon: self.icon,
            bundles: self.bundles,
            mobile: self.mobile,
            overrides: self.overrides,
        })
    }
}
