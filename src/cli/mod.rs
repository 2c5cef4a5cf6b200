//! Command line interface for the Tauri build action.
//!
//! Parses inputs, checks the toolchain, prepares the project, runs the build
//! orchestrator for the current host and prints the collected artifacts.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{
    BuildOptions, BuildReport, Orchestrator, ShellExecutor, precheck, utils::fs,
};
use crate::error::Result;
use crate::project;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args, std::env::consts::OS).await
}

/// Runs the action for `host_os` with already parsed arguments.
pub async fn execute(args: &Args, host_os: &str) -> Result<i32> {
    let config = RuntimeConfig::from(args);
    let options = BuildOptions::try_from(args)?;
    config.verbose_println(&format!("Options: {options:?}"))?;

    fs::create_dir_all(options.project_dir()).await?;
    let executor = ShellExecutor::new(options.project_dir());

    if args.skip_precheck {
        config.warn("Skipping toolchain checks")?;
    } else {
        config.progress("Checking toolchain")?;
        precheck::verify_environment(&executor, &options).await?;
    }

    if args.skip_scaffold {
        config.verbose_println("Using existing project")?;
    } else {
        config.progress(&format!("Creating {} project", options.project_name()))?;
        project::initialize(&executor, &options).await?;
    }

    for path in project::apply_overrides(&options).await? {
        config.verbose_println(&format!("Replaced {}", path.display()))?;
    }

    config.progress(&format!("Building for {host_os}"))?;
    let report = Orchestrator::new(options, executor).run(host_os).await?;

    print_summary(&config, &report)?;
    if let Some(path) = &args.report_file {
        fs::write_file(path, &serde_json::to_string_pretty(&report)?).await?;
        config.verbose_println(&format!("Report written to {}", path.display()))?;
    }

    Ok(0)
}

fn print_summary(config: &RuntimeConfig, report: &BuildReport) -> std::io::Result<()> {
    config.section(&format!(
        "Collected {} artifacts for {}",
        report.artifacts.len(),
        report.platform
    ))?;
    for artifact in &report.artifacts {
        config.indent(&format!(
            "{}  {} ({} bytes)",
            artifact.sha256,
            artifact.path.display(),
            artifact.size
        ))?;
    }
    config.success("Build complete")
}
