//! JavaScript package manager selection and the commands it implies.

use std::fmt;
use std::str::FromStr;

/// Package manager used to scaffold the project and drive the Tauri CLI.
///
/// Mirrors the managers accepted by `create-tauri-app --manager`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PackageManager {
    /// npm (default)
    #[default]
    Npm,
    /// Yarn
    Yarn,
    /// pnpm
    Pnpm,
    /// Bun
    Bun,
    /// Deno
    Deno,
    /// Cargo with `tauri-cli` installed as a cargo subcommand
    Cargo,
}

impl PackageManager {
    /// Name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
            PackageManager::Cargo => "cargo",
        }
    }

    /// Command line that installs project dependencies.
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn install",
            PackageManager::Pnpm => "pnpm install",
            PackageManager::Bun => "bun install",
            PackageManager::Deno => "deno install",
            PackageManager::Cargo => "cargo install tauri-cli --version ^2.0.0 --locked",
        }
    }

    /// Prefix that invokes the Tauri CLI through this manager.
    ///
    /// npm needs `--` so the following flags reach the script instead of npm.
    pub fn tauri_runner(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run tauri --",
            PackageManager::Yarn => "yarn tauri",
            PackageManager::Pnpm => "pnpm tauri",
            PackageManager::Bun => "bun tauri",
            PackageManager::Deno => "deno task tauri",
            PackageManager::Cargo => "cargo tauri",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            "deno" => Ok(PackageManager::Deno),
            "cargo" => Ok(PackageManager::Cargo),
            other => Err(format!(
                "unknown package manager `{other}` (expected npm, yarn, pnpm, bun, deno or cargo)"
            )),
        }
    }
}
