//! Windows build description: MSVC targets with MSI and NSIS installers.

use super::{PlatformDescriptor, StageTable, TargetDescriptor, stages};
use crate::bundler::BundleFormat;

pub(super) static DESCRIPTOR: PlatformDescriptor = PlatformDescriptor {
    os_label: "windows",
    binary_extension: Some("exe"),
    bundle_formats: &[BundleFormat::Msi, BundleFormat::Nsis],
    targets: &[
        TargetDescriptor {
            triple: "x86_64-pc-windows-msvc",
            arch: "x64",
            toolchain_targets: &["x86_64-pc-windows-msvc"],
            env: &[],
            skipped_formats: &[],
        },
        TargetDescriptor {
            triple: "i686-pc-windows-msvc",
            arch: "x86",
            toolchain_targets: &["i686-pc-windows-msvc"],
            env: &[],
            skipped_formats: &[],
        },
        // WiX v3 cannot target ARM64
        TargetDescriptor {
            triple: "aarch64-pc-windows-msvc",
            arch: "arm64",
            toolchain_targets: &["aarch64-pc-windows-msvc"],
            env: &[],
            skipped_formats: &[BundleFormat::Msi],
        },
    ],
    mobile: &[],
};

pub(super) static STAGES: StageTable = StageTable {
    install_prerequisites: stages::confirm_toolchain,
    before_build: stages::before_build,
    build: stages::build,
    after_build: stages::after_build,
};
