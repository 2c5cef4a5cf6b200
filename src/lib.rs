//! Build orchestration for Tauri applications in CI
//!
//! This library drives a Tauri project through every target triple of the
//! host operating system and collects the results under canonical names:
//! - Linux: x86_64, i686, aarch64 and armv7 binaries, .deb and AppImage
//! - macOS: x86_64, aarch64 and universal binaries, .dmg
//! - Windows: x64, x86 and arm64 executables, .msi and NSIS installers
//!
//! It can be used both as a CLI tool (a GitHub Actions step) and as a library.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod project;

// Re-export commonly used types
pub use error::{ActionError, CliError, Result};
