//! Command line argument parsing and validation.
//!
//! Every option can also be supplied through the `INPUT_<NAME>` environment
//! variable GitHub Actions sets for action inputs, so the binary runs
//! unchanged as a workflow step.

use crate::bundler::{
    BuildOptions, BuildOptionsBuilder, BundleFormat, MobileTargets, PackageManager,
    ProjectOverrides,
};
use crate::error::{ActionError, CliError};
use clap::Parser;
use clap::builder::FalseyValueParser;
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Build a Tauri application for every architecture of the host OS
#[derive(Parser, Debug)]
#[command(
    name = "tauri_build_action",
    version,
    about = "Build a Tauri application for every architecture of the host OS",
    long_about = "Scaffolds (or reuses) a Tauri project, installs the host's cross-compilation
prerequisites, builds every target triple of the host OS in sequence, and copies the
executables and installers into one output directory under canonical names:

  <project>-<os>-<version>_<arch>[.<ext>]

Usage:
  tauri_build_action --project-name demo --app-version 1.2.3
  tauri_build_action --skip-scaffold --project-dir ./app --bundles deb
  INPUT_ANDROID=true tauri_build_action

Exit code 0 = every mapped artifact exists in the output directory."
)]
pub struct Args {
    /// Application name; also the binary and product name
    #[arg(long, env = "INPUT_PROJECT_NAME", default_value = "tauri-app")]
    pub project_name: String,

    /// Reverse-domain bundle identifier (default: com.<project-name>.app)
    #[arg(long, env = "INPUT_IDENTIFIER")]
    pub identifier: Option<String>,

    /// Semantic version embedded in artifact names
    #[arg(long, env = "INPUT_VERSION", default_value = "0.1.0")]
    pub app_version: String,

    /// create-tauri-app template
    #[arg(long, env = "INPUT_TEMPLATE", default_value = "vanilla")]
    pub template: String,

    /// Package manager: npm, yarn, pnpm, bun, deno or cargo
    #[arg(long, env = "INPUT_MANAGER", default_value = "npm")]
    pub manager: PackageManager,

    /// Value written to build.frontendDist in tauri.conf.json
    #[arg(long, env = "INPUT_FRONTEND_DIST", default_value = "../dist")]
    pub frontend_dist: String,

    /// Directory receiving the collected artifacts (relative to the project directory)
    #[arg(short, long, env = "INPUT_OUTPUT_DIR", default_value = "tauri-builds")]
    pub output_dir: PathBuf,

    /// Root of the Tauri project
    #[arg(long, env = "INPUT_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Source image used to regenerate the icon set
    #[arg(long, env = "INPUT_ICON")]
    pub icon: Option<PathBuf>,

    /// Comma-separated bundle formats to build (default: all for the host)
    #[arg(long, env = "INPUT_BUNDLES", value_delimiter = ',')]
    pub bundles: Vec<BundleFormat>,

    /// Also build Android APK and AAB (Linux hosts)
    #[arg(long, env = "INPUT_ANDROID", value_parser = FalseyValueParser::new())]
    pub android: bool,

    /// Also build an iOS IPA (macOS hosts)
    #[arg(long, env = "INPUT_IOS", value_parser = FalseyValueParser::new())]
    pub ios: bool,

    /// Reuse the project in --project-dir instead of generating one
    #[arg(long, env = "INPUT_SKIP_SCAFFOLD", value_parser = FalseyValueParser::new())]
    pub skip_scaffold: bool,

    /// Skip the toolchain version checks
    #[arg(long, env = "INPUT_SKIP_PRECHECK", value_parser = FalseyValueParser::new())]
    pub skip_precheck: bool,

    /// Raw replacement for src-tauri/tauri.conf.json
    #[arg(long, env = "INPUT_TAURI_CONF_JSON", hide_env_values = true)]
    pub tauri_conf_json: Option<String>,

    /// Raw replacement for Cargo.toml
    #[arg(long, env = "INPUT_CARGO_TOML", hide_env_values = true)]
    pub cargo_toml: Option<String>,

    /// Raw replacement for src-tauri/build.rs
    #[arg(long, env = "INPUT_BUILD_RS", hide_env_values = true)]
    pub build_rs: Option<String>,

    /// Raw replacement for src-tauri/src/lib.rs
    #[arg(long, env = "INPUT_LIB_RS", hide_env_values = true)]
    pub lib_rs: Option<String>,

    /// Raw replacement for src-tauri/src/main.rs
    #[arg(long, env = "INPUT_MAIN_RS", hide_env_values = true)]
    pub main_rs: Option<String>,

    /// Write a JSON report of the collected artifacts to this path
    #[arg(long, env = "INPUT_REPORT_FILE")]
    pub report_file: Option<PathBuf>,

    /// Print detail lines
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Empty action inputs arrive as empty strings rather than absent variables.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string)
}

impl TryFrom<&Args> for BuildOptions {
    type Error = ActionError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let project_dir = args
            .project_dir
            .absolutize()
            .map_err(|e| CliError::InvalidArguments {
                reason: format!("cannot resolve {}: {e}", args.project_dir.display()),
            })?
            .into_owned();
        let output_dir = args
            .output_dir
            .absolutize_from(&project_dir)
            .map_err(|e| CliError::InvalidArguments {
                reason: format!("cannot resolve {}: {e}", args.output_dir.display()),
            })?
            .into_owned();

        let mut builder = BuildOptionsBuilder::new()
            .project_name(&args.project_name)
            .version(&args.app_version)
            .template(&args.template)
            .manager(args.manager)
            .frontend_dist(&args.frontend_dist)
            .project_dir(project_dir)
            .output_dir(output_dir)
            .mobile(MobileTargets {
                android: args.android,
                ios: args.ios,
            })
            .overrides(ProjectOverrides {
                tauri_conf_json: non_empty(&args.tauri_conf_json),
                cargo_toml: non_empty(&args.cargo_toml),
                build_rs: non_empty(&args.build_rs),
                lib_rs: non_empty(&args.lib_rs),
                main_rs: non_empty(&args.main_rs),
            });

        if let Some(identifier) = non_empty(&args.identifier) {
            builder = builder.identifier(identifier);
        }
        if let Some(icon) = &args.icon {
            builder = builder.icon(icon);
        }
        if !args.bundles.is_empty() {
            builder = builder.bundles(args.bundles.clone());
        }

        Ok(builder.build()?)
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["tauri_build_action"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn bundles_split_on_commas() {
        let args = parse(&["--bundles", "deb,AppImage"]);
        assert_eq!(args.bundles, vec![BundleFormat::Deb, BundleFormat::AppImage]);
    }

    #[test]
    fn unknown_manager_is_rejected() {
        assert!(Args::try_parse_from(["tauri_build_action", "--manager", "pip"]).is_err());
    }

    #[test]
    fn output_dir_resolves_against_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().to_str().unwrap();
        let args = parse(&["--project-dir", project, "--output-dir", "dist-out"]);
        let options = BuildOptions::try_from(&args).unwrap();
        assert_eq!(options.output_dir(), dir.path().join("dist-out"));
        assert!(options.project_dir().is_absolute());
    }

    #[test]
    fn blank_identifier_falls_back_to_derived_default() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(&[
            "--project-dir",
            dir.path().to_str().unwrap(),
            "--identifier",
            "",
            "--main-rs",
            "  ",
        ]);
        let options = BuildOptions::try_from(&args).unwrap();
        assert_eq!(options.identifier(), "com.tauri-app.app");
        assert!(options.overrides().files().is_empty());
        assert!(options.icon().is_none());
    }

    #[test]
    fn invalid_version_is_a_build_error() {
        let args = parse(&["--app-version", "one.two"]);
        assert!(matches!(
            BuildOptions::try_from(&args),
            Err(ActionError::Build(crate::bundler::Error::InvalidVersion { .. }))
        ));
    }
}
