//! Toolchain detection and minimum-version checks.
//!
//! Each [`ToolRequirement`] names a probe command whose output carries a
//! version. Probes run through [`CommandExecutor::execute_capturing_output`]
//! because some tools (notably `java -version`) print to stderr.

use crate::bundler::{
    BuildOptions, CommandExecutor, CommandSpec, Error, Result,
};
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("static regex is valid")
});

static JAVA_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version "(\d+)(?:\.(\d+))?"#).expect("static regex is valid")
});

/// How a probe's output maps to a comparable version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VersionScheme {
    /// `major.minor.patch`, missing parts read as zero
    Semver,
    /// Java's major release; legacy `1.x` strings mean major `x`
    JavaMajor,
}

/// A tool the build needs on `PATH`.
#[derive(Clone, Debug)]
pub struct ToolRequirement {
    /// Tool name reported in errors
    pub tool: &'static str,
    /// Command whose output carries the version
    pub probe: CommandSpec,
    /// Lowest accepted version; `None` checks presence only
    pub minimum: Option<Version>,
    /// Output format of the probe
    pub scheme: VersionScheme,
}

impl ToolRequirement {
    fn new(tool: &'static str, probe: &str, minimum: Option<Version>) -> Self {
        Self {
            tool,
            probe: CommandSpec::new(probe),
            minimum,
            scheme: VersionScheme::Semver,
        }
    }

    fn precheck_error(&self, reason: impl Into<String>) -> Error {
        Error::EnvironmentPrecheck {
            tool: self.tool.to_string(),
            reason: reason.into(),
        }
    }

    /// Checks probe output against the minimum.
    ///
    /// Returns the detected version, or `None` for presence-only checks.
    pub fn evaluate(&self, output: &str) -> Result<Option<Version>> {
        let Some(minimum) = &self.minimum else {
            return Ok(None);
        };

        let found = parse_version(output, self.scheme).ok_or_else(|| {
            self.precheck_error(format!("could not read a version from `{output}`"))
        })?;

        if &found < minimum {
            return Err(self.precheck_error(format!(
                "found {found}, at least {minimum} is required"
            )));
        }
        Ok(Some(found))
    }
}

/// Extracts the first version number in `output`.
pub fn parse_version(output: &str, scheme: VersionScheme) -> Option<Version> {
    match scheme {
        VersionScheme::Semver => {
            let caps = VERSION_RE.captures(output)?;
            let part = |i: usize| {
                caps.get(i)
                    .and_then(|m| m.as_str().parse::<u64>().ok())
                    .unwrap_or(0)
            };
            Some(Version::new(part(1), part(2), part(3)))
        }
        VersionScheme::JavaMajor => {
            let caps = JAVA_VERSION_RE
                .captures(output)
                .or_else(|| VERSION_RE.captures(output))?;
            let mut major = caps.get(1)?.as_str().parse::<u64>().ok()?;
            if major == 1 {
                major = caps.get(2)?.as_str().parse::<u64>().ok()?;
            }
            Some(Version::new(major, 0, 0))
        }
    }
}

/// Tools this run depends on.
pub fn requirements(options: &BuildOptions) -> Vec<ToolRequirement> {
    let manager = options.manager();
    let mut tools = vec![
        ToolRequirement::new("node", "node --version", Some(Version::new(18, 0, 0))),
        ToolRequirement::new("rustc", "rustc --version", Some(Version::new(1, 77, 2))),
        ToolRequirement::new(
            manager.as_str(),
            &format!("{} --version", manager.as_str()),
            None,
        ),
    ];

    if options.mobile().android {
        tools.push(ToolRequirement {
            scheme: VersionScheme::JavaMajor,
            ..ToolRequirement::new("java", "java -version", Some(Version::new(17, 0, 0)))
        });
    }

    tools
}

/// Probes every requirement in order and fails on the first unmet one.
pub async fn verify_environment<E: CommandExecutor>(
    executor: &E,
    options: &BuildOptions,
) -> Result<()> {
    for requirement in requirements(options) {
        let output = executor
            .execute_capturing_output(&requirement.probe)
            .await
            .map_err(|e| requirement.precheck_error(format!("probe failed: {e}")))?;

        match requirement.evaluate(&output)? {
            Some(version) => log::info!("{} {version} detected", requirement.tool),
            None => log::info!("{} available", requirement.tool),
        }
    }
    Ok(())
}
