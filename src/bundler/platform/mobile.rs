//! Mobile targets built alongside the desktop targets of a host.

use crate::bundler::BuildOptions;
use std::fmt;

/// A mobile build the Tauri CLI can drive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MobileKind {
    /// Android APK and AAB
    Android,
    /// iOS IPA
    Ios,
}

/// A file produced by a mobile build.
#[derive(Clone, Copy, Debug)]
pub struct MobileOutput {
    /// Path relative to the project root
    pub path: &'static str,
    /// Destination suffix including extension
    pub suffix: &'static str,
}

const ANDROID_OUTPUTS: &[MobileOutput] = &[
    MobileOutput {
        path: "src-tauri/gen/android/app/build/outputs/apk/universal/release/app-universal-release-unsigned.apk",
        suffix: "android.apk",
    },
    MobileOutput {
        path: "src-tauri/gen/android/app/build/outputs/bundle/universalRelease/app-universal-release.aab",
        suffix: "android.aab",
    },
];

impl MobileKind {
    /// Every mobile kind.
    pub const ALL: [MobileKind; 2] = [MobileKind::Android, MobileKind::Ios];

    /// Subcommand name of the Tauri CLI.
    pub fn subcommand(&self) -> &'static str {
        match self {
            MobileKind::Android => "android",
            MobileKind::Ios => "ios",
        }
    }

    /// Whether the run asked for this target.
    pub fn requested(&self, options: &BuildOptions) -> bool {
        match self {
            MobileKind::Android => options.mobile().android,
            MobileKind::Ios => options.mobile().ios,
        }
    }

    /// Rust targets the mobile build compiles.
    pub fn toolchain_targets(&self) -> &'static [&'static str] {
        match self {
            MobileKind::Android => &[
                "aarch64-linux-android",
                "armv7-linux-androideabi",
                "i686-linux-android",
                "x86_64-linux-android",
            ],
            MobileKind::Ios => &["aarch64-apple-ios"],
        }
    }

    /// Extra arguments for `<runner> <subcommand> build`.
    pub fn build_args(&self) -> &'static str {
        match self {
            MobileKind::Android => "--apk --aab",
            MobileKind::Ios => "--export-method app-store-connect",
        }
    }

    /// Files the mobile build writes, relative to the project root.
    pub fn outputs(&self, project_name: &str) -> Vec<(String, &'static str)> {
        match self {
            MobileKind::Android => ANDROID_OUTPUTS
                .iter()
                .map(|output| (output.path.to_string(), output.suffix))
                .collect(),
            MobileKind::Ios => vec![(
                format!("src-tauri/gen/apple/build/arm64/{project_name}.ipa"),
                "ios.ipa",
            )],
        }
    }
}

impl fmt::Display for MobileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}
