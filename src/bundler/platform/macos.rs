//! macOS build description: Intel, Apple Silicon and universal binaries.

use super::{
    BuildContext, MobileKind, PlatformDescriptor, StageTable, Step, TargetDescriptor, stages,
};
use crate::bundler::{BundleFormat, exec::CommandSpec};

pub(super) static DESCRIPTOR: PlatformDescriptor = PlatformDescriptor {
    os_label: "macos",
    binary_extension: None,
    bundle_formats: &[BundleFormat::Dmg],
    targets: &[
        TargetDescriptor {
            triple: "x86_64-apple-darwin",
            arch: "x64",
            toolchain_targets: &["x86_64-apple-darwin"],
            env: &[],
            skipped_formats: &[],
        },
        TargetDescriptor {
            triple: "aarch64-apple-darwin",
            arch: "aarch64",
            toolchain_targets: &["aarch64-apple-darwin"],
            env: &[],
            skipped_formats: &[],
        },
        // lipo of both Apple triples
        TargetDescriptor {
            triple: "universal-apple-darwin",
            arch: "universal",
            toolchain_targets: &["x86_64-apple-darwin", "aarch64-apple-darwin"],
            env: &[],
            skipped_formats: &[],
        },
    ],
    mobile: &[MobileKind::Ios],
};

pub(super) static STAGES: StageTable = StageTable {
    install_prerequisites,
    before_build: stages::before_build,
    build: stages::build,
    after_build: stages::after_build,
};

/// Confirms rustup and the Xcode command line tools.
fn install_prerequisites(ctx: &BuildContext<'_>) -> Vec<Step> {
    let mut steps = stages::confirm_toolchain(ctx);
    steps.push(Step::Run(CommandSpec::new("xcode-select --print-path")));
    steps
}
