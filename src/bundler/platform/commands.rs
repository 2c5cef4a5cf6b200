//! Pure command construction.
//!
//! Every function here maps options and descriptor data to a [`CommandSpec`]
//! without spawning anything, so the exact command lines a run will issue can
//! be asserted in unit tests.

use super::{MobileKind, PlatformDescriptor, TargetDescriptor};
use crate::bundler::{BuildOptions, PackageManager, exec::CommandSpec};
use std::path::Path;

/// Registers a compilation target with rustup.
///
/// Re-adding an installed target is a no-op that exits successfully.
pub fn rustup_target_add(triple: &str) -> CommandSpec {
    CommandSpec::new(format!("rustup target add {triple}"))
}

/// Installs the project's JavaScript (or cargo) dependencies.
pub fn install_dependencies(manager: PackageManager) -> CommandSpec {
    CommandSpec::new(manager.install_command())
}

/// Prints the Tauri environment report.
pub fn tauri_info(manager: PackageManager) -> CommandSpec {
    CommandSpec::new(format!("{} info", manager.tauri_runner()))
}

/// Regenerates the icon set from a source image.
pub fn tauri_icon(manager: PackageManager, icon: &Path) -> CommandSpec {
    CommandSpec::new(format!(
        "{} icon {}",
        manager.tauri_runner(),
        quote(&icon.display().to_string())
    ))
}

/// Builds one desktop target.
///
/// The effective bundle list is always spelled out so the build tool produces
/// exactly what artifact collection expects; `--no-bundle` when nothing is
/// left after skips and restrictions. The target's environment overrides are
/// attached to this invocation only.
pub fn tauri_build(
    options: &BuildOptions,
    platform: &PlatformDescriptor,
    target: &TargetDescriptor,
) -> CommandSpec {
    let formats = target.effective_formats(platform, options);
    let bundles = if formats.is_empty() {
        "--no-bundle".to_string()
    } else {
        let names: Vec<&str> = formats.iter().map(|f| f.cli_name()).collect();
        format!("--bundles {}", names.join(","))
    };

    target.env.iter().fold(
        CommandSpec::new(format!(
            "{} build --target {} {bundles}",
            options.manager().tauri_runner(),
            target.triple
        )),
        |spec, (key, value)| spec.env(*key, *value),
    )
}

/// Generates the native mobile project.
pub fn mobile_init(manager: PackageManager, kind: MobileKind) -> CommandSpec {
    CommandSpec::new(format!(
        "{} {} init",
        manager.tauri_runner(),
        kind.subcommand()
    ))
}

/// Builds the mobile application.
pub fn mobile_build(manager: PackageManager, kind: MobileKind) -> CommandSpec {
    CommandSpec::new(format!(
        "{} {} build {}",
        manager.tauri_runner(),
        kind.subcommand(),
        kind.build_args()
    ))
}

/// Installs Debian packages non-interactively.
pub fn apt_install(packages: &[&str]) -> CommandSpec {
    CommandSpec::new(format!("sudo apt-get install -y {}", packages.join(" ")))
}

/// Registers foreign dpkg architectures and refreshes the package index.
pub fn dpkg_add_architectures(arches: &[&str]) -> CommandSpec {
    let mut parts: Vec<String> = arches
        .iter()
        .map(|arch| format!("sudo dpkg --add-architecture {arch}"))
        .collect();
    parts.push("sudo apt-get update -y".to_string());
    CommandSpec::new(parts.join(" && "))
}

/// Rewrites the apt sources so native architectures resolve from the main
/// archive and ported architectures from `ports.ubuntu.com`.
///
/// The deb822 `ubuntu.sources` file is removed because it would otherwise
/// request ported architectures from the main archive.
pub fn apt_sources(native: &[&str], ported: &[&str]) -> CommandSpec {
    let suites = ["", "-security", "-updates", "-backports"];
    let components = "main multiverse universe restricted";
    let mut body = String::new();
    for suite in suites {
        body.push_str(&format!(
            "deb [arch={}] http://archive.ubuntu.com/ubuntu $codename{suite} {components}\n",
            native.join(",")
        ));
    }
    body.push('\n');
    for suite in suites {
        body.push_str(&format!(
            "deb [arch={}] http://ports.ubuntu.com/ubuntu-ports $codename{suite} {components}\n",
            ported.join(",")
        ));
    }

    CommandSpec::new(format!(
        "sudo rm -f /etc/apt/sources.list.d/ubuntu.sources && codename=$(lsb_release -cs) && sudo tee /etc/apt/sources.list > /dev/null << EOF\n{body}EOF"
    ))
}

/// Double-quotes an argument when it contains whitespace.
fn quote(arg: &str) -> String {
    if arg.chars().any(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}
