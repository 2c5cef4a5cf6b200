//! Declarative mapping from build outputs to canonical artifact names.
//!
//! One generic function derives every platform's copy list from its
//! [`PlatformDescriptor`](super::platform::PlatformDescriptor), so all
//! platforms share a single naming scheme:
//!
//! ```text
//! <projectName>-<osLabel>-<version>_<arch or format suffix>[.<ext>]
//! ```
//!
//! Source paths follow the Tauri CLI's output layout under
//! `src-tauri/target/<triple>/release/`, and every `from` contains the triple
//! of the target that produced it.

use crate::{
    bail,
    bundler::{BuildOptions, Platform, Result},
};
use std::collections::HashSet;
use std::path::PathBuf;

/// One file to relocate after a build.
///
/// `from` is relative to the project directory; `to` lies inside the output
/// directory.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArtifactEntry {
    /// Path the build tool is contracted to produce
    pub from: PathBuf,
    /// Canonical destination
    pub to: PathBuf,
}

/// Enumerates every artifact a run on `platform` collects.
///
/// For each target in build order: the raw executable, then one entry per
/// effective bundle format. Mobile artifacts follow when the corresponding
/// mobile build is requested and supported by the host.
pub fn artifact_entries(platform: Platform, options: &BuildOptions) -> Vec<ArtifactEntry> {
    let descriptor = platform.descriptor();
    let name = options.project_name();
    let version = options.version();
    let prefix = format!("{name}-{}-{version}", descriptor.os_label);
    let out = options.output_dir();
    let ext = descriptor
        .binary_extension
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let mut entries = Vec::new();
    for target in descriptor.targets {
        let release = PathBuf::from("src-tauri/target")
            .join(target.triple)
            .join("release");

        entries.push(ArtifactEntry {
            from: release.join(format!("{name}{ext}")),
            to: out.join(format!("{prefix}_{}{ext}", target.arch)),
        });

        for format in target.effective_formats(descriptor, options) {
            entries.push(ArtifactEntry {
                from: release
                    .join("bundle")
                    .join(format.bundle_dir())
                    .join(format.output_file_name(name, version, target.arch)),
                to: out.join(format!("{prefix}{}", format.arch_suffix(target.arch))),
            });
        }
    }

    for kind in descriptor.mobile {
        if !kind.requested(options) {
            continue;
        }
        for (from, suffix) in kind.outputs(name) {
            entries.push(ArtifactEntry {
                from: PathBuf::from(from),
                to: out.join(format!("{prefix}_{suffix}")),
            });
        }
    }

    entries
}

/// Fails if two entries share a destination.
pub fn ensure_unique_destinations(entries: &[ArtifactEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(&entry.to) {
            bail!(
                "artifact destination {} is produced by more than one build output",
                entry.to.display()
            );
        }
    }
    Ok(())
}
