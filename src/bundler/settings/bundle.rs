//! Bundle formats, mobile targets and raw project overrides.

use std::fmt;
use std::str::FromStr;

/// Packaging type produced by the Tauri bundler.
///
/// Only formats that end up as a single file are listed; directory bundles
/// such as `.app` are intermediate products of [`BundleFormat::Dmg`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BundleFormat {
    /// Debian package (.deb)
    Deb,
    /// AppImage
    AppImage,
    /// Windows Installer package (.msi, WiX)
    Msi,
    /// NSIS setup executable
    Nsis,
    /// macOS disk image (.dmg)
    Dmg,
}

impl BundleFormat {
    /// Identifier accepted by `tauri build --bundles`.
    pub fn cli_name(&self) -> &'static str {
        match self {
            BundleFormat::Deb => "deb",
            BundleFormat::AppImage => "appimage",
            BundleFormat::Msi => "msi",
            BundleFormat::Nsis => "nsis",
            BundleFormat::Dmg => "dmg",
        }
    }

    /// Subdirectory of `release/bundle/` the format is written to.
    pub fn bundle_dir(&self) -> &'static str {
        self.cli_name()
    }

    /// File name Tauri gives the bundle for `product`, `version` and `arch`.
    pub fn output_file_name(&self, product: &str, version: &str, arch: &str) -> String {
        format!("{product}_{version}{}", self.arch_suffix(arch))
    }

    /// Architecture-dependent tail shared by the Tauri output name and the
    /// canonical destination name.
    pub fn arch_suffix(&self, arch: &str) -> String {
        match self {
            BundleFormat::Deb => format!("_{arch}.deb"),
            BundleFormat::AppImage => format!("_{arch}.AppImage"),
            BundleFormat::Msi => format!("_{arch}_en-US.msi"),
            BundleFormat::Nsis => format!("_{arch}-setup.exe"),
            BundleFormat::Dmg => format!("_{arch}.dmg"),
        }
    }
}

impl fmt::Display for BundleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for BundleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deb" => Ok(BundleFormat::Deb),
            "appimage" => Ok(BundleFormat::AppImage),
            "msi" => Ok(BundleFormat::Msi),
            "nsis" => Ok(BundleFormat::Nsis),
            "dmg" => Ok(BundleFormat::Dmg),
            other => Err(format!(
                "unknown bundle format `{other}` (expected deb, appimage, msi, nsis or dmg)"
            )),
        }
    }
}

/// Mobile targets requested for this run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MobileTargets {
    /// Build an Android APK and AAB (Linux hosts)
    pub android: bool,
    /// Build an iOS IPA (macOS hosts)
    pub ios: bool,
}

/// Raw file contents that replace generated project files after scaffolding.
///
/// The payloads are written verbatim and never parsed.
#[derive(Clone, Debug, Default)]
pub struct ProjectOverrides {
    /// Replacement for `src-tauri/tauri.conf.json`
    pub tauri_conf_json: Option<String>,
    /// Replacement for the root `Cargo.toml`
    pub cargo_toml: Option<String>,
    /// Replacement for `src-tauri/build.rs`
    pub build_rs: Option<String>,
    /// Replacement for `src-tauri/src/lib.rs`
    pub lib_rs: Option<String>,
    /// Replacement for `src-tauri/src/main.rs`
    pub main_rs: Option<String>,
}

impl ProjectOverrides {
    /// Pairs of project-relative path and payload for every override present.
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        [
            ("src-tauri/tauri.conf.json", &self.tauri_conf_json),
            ("Cargo.toml", &self.cargo_toml),
            ("src-tauri/build.rs", &self.build_rs),
            ("src-tauri/src/lib.rs", &self.lib_rs),
            ("src-tauri/src/main.rs", &self.main_rs),
        ]
        .into_iter()
        .filter_map(|(path, payload)| payload.as_deref().map(|p| (path, p)))
        .collect()
    }
}
