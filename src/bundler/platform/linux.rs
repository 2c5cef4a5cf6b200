//! Linux build description: four Debian-multiarch targets.
//!
//! x86_64 builds natively, i686 through multilib, and the two ARM targets
//! cross-compile against foreign-architecture packages from the Ubuntu ports
//! archive. AppImage cannot be produced for the ARM targets on an x86_64 host,
//! so they only ship `.deb`.
//!
//! Each target's `PKG_CONFIG_PATH` is searched before whatever the runner
//! already exports; the executor appends the inherited value.

use super::{BuildContext, PlatformDescriptor, StageTable, Step, TargetDescriptor, commands, stages};
use crate::bundler::BundleFormat;

pub(super) static DESCRIPTOR: PlatformDescriptor = PlatformDescriptor {
    os_label: "linux",
    binary_extension: None,
    bundle_formats: &[BundleFormat::Deb, BundleFormat::AppImage],
    targets: &[
        TargetDescriptor {
            triple: "x86_64-unknown-linux-gnu",
            arch: "amd64",
            toolchain_targets: &["x86_64-unknown-linux-gnu"],
            env: &[],
            skipped_formats: &[],
        },
        TargetDescriptor {
            triple: "i686-unknown-linux-gnu",
            arch: "i386",
            toolchain_targets: &["i686-unknown-linux-gnu"],
            env: &[
                ("PKG_CONFIG_PATH", "/usr/lib/i386-linux-gnu/pkgconfig/"),
                ("PKG_CONFIG_SYSROOT_DIR", "/"),
            ],
            skipped_formats: &[],
        },
        TargetDescriptor {
            triple: "aarch64-unknown-linux-gnu",
            arch: "arm64",
            toolchain_targets: &["aarch64-unknown-linux-gnu"],
            env: &[
                ("PKG_CONFIG_PATH", "/usr/lib/aarch64-linux-gnu/pkgconfig/"),
                ("PKG_CONFIG_SYSROOT_DIR", "/usr/aarch64-linux-gnu/"),
                (
                    "CARGO_TARGET_AARCH64_UNKNOWN_LINUX_GNU_LINKER",
                    "aarch64-linux-gnu-gcc",
                ),
            ],
            skipped_formats: &[BundleFormat::AppImage],
        },
        TargetDescriptor {
            triple: "armv7-unknown-linux-gnueabihf",
            arch: "armhf",
            toolchain_targets: &["armv7-unknown-linux-gnueabihf"],
            env: &[
                ("PKG_CONFIG_PATH", "/usr/lib/arm-linux-gnueabihf/pkgconfig/"),
                ("PKG_CONFIG_SYSROOT_DIR", "/usr/arm-linux-gnueabihf/"),
                (
                    "CARGO_TARGET_ARMV7_UNKNOWN_LINUX_GNUEABIHF_LINKER",
                    "arm-linux-gnueabihf-gcc",
                ),
            ],
            skipped_formats: &[BundleFormat::AppImage],
        },
    ],
    mobile: &[super::MobileKind::Android],
};

pub(super) static STAGES: StageTable = StageTable {
    install_prerequisites,
    before_build: stages::before_build,
    build: stages::build,
    after_build: stages::after_build,
};

/// Architectures served by archive.ubuntu.com.
const NATIVE_ARCHES: &[&str] = &["amd64", "i386"];

/// Architectures served by ports.ubuntu.com.
const PORTED_ARCHES: &[&str] = &["arm64", "armhf"];

/// Architectures dpkg must learn about; amd64 is the host.
const FOREIGN_ARCHES: &[&str] = &["i386", "arm64", "armhf"];

/// WebKitGTK and friends for the host architecture.
const HOST_PACKAGES: &[&str] = &[
    "libwebkit2gtk-4.1-dev",
    "build-essential",
    "curl",
    "wget",
    "file",
    "libxdo-dev",
    "libssl-dev",
    "libayatana-appindicator3-dev",
    "librsvg2-dev",
    "libsoup-3.0-dev",
];

// libayatana-appindicator3-dev has no i386 build
const I386_PACKAGES: &[&str] = &[
    "libwebkit2gtk-4.1-dev:i386",
    "libssl-dev:i386",
    "librsvg2-dev:i386",
    "libsoup-3.0-dev:i386",
];

const ARM64_PACKAGES: &[&str] = &[
    "gcc-aarch64-linux-gnu",
    "g++-aarch64-linux-gnu",
    "libc6-dev-arm64-cross",
    "patchelf:arm64",
    "libwebkit2gtk-4.1-dev:arm64",
    "libssl-dev:arm64",
    "librsvg2-dev:arm64",
    "libayatana-appindicator3-dev:arm64",
    "libsoup-3.0-dev:arm64",
];

const ARMHF_PACKAGES: &[&str] = &[
    "gcc-arm-linux-gnueabihf",
    "g++-arm-linux-gnueabihf",
    "libc6-dev-armhf-cross",
    "patchelf:armhf",
    "libwebkit2gtk-4.1-dev:armhf",
    "libssl-dev:armhf",
    "librsvg2-dev:armhf",
    "libayatana-appindicator3-dev:armhf",
    "libsoup-3.0-dev:armhf",
];

/// Configures multiarch apt and installs native and cross development
/// packages for every target in [`DESCRIPTOR`].
fn install_prerequisites(_ctx: &BuildContext<'_>) -> Vec<Step> {
    vec![
        Step::Run(commands::apt_sources(NATIVE_ARCHES, PORTED_ARCHES)),
        Step::Run(commands::dpkg_add_architectures(FOREIGN_ARCHES)),
        Step::Run(commands::apt_install(&["gcc-multilib", "g++-multilib"])),
        Step::Run(commands::apt_install(HOST_PACKAGES)),
        Step::Run(commands::apt_install(I386_PACKAGES)),
        Step::Run(commands::apt_install(ARM64_PACKAGES)),
        Step::Run(commands::apt_install(ARMHF_PACKAGES)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{BuildOptionsBuilder, Platform};

    #[test]
    fn multiarch_registered_before_cross_packages() {
        let options = BuildOptionsBuilder::new()
            .project_name("demo")
            .version("1.2.3")
            .output_dir("out")
            .build()
            .unwrap();
        let ctx = BuildContext::new(Platform::Linux, &options);
        let lines: Vec<String> = install_prerequisites(&ctx)
            .into_iter()
            .map(|step| match step {
                Step::Run(spec) => spec.command_line().to_string(),
                Step::Copy(entry) => panic!("unexpected copy {entry:?}"),
            })
            .collect();

        let register = lines
            .iter()
            .position(|l| l.contains("dpkg --add-architecture armhf"))
            .unwrap();
        let armhf = lines.iter().position(|l| l.contains(":armhf")).unwrap();
        assert!(register < armhf);
        assert!(lines[1].contains("--add-architecture i386"));
        assert!(!lines[1].contains("--add-architecture amd64"));
    }
}
