//! Properties of the artifact mapping across every platform.

mod support;

use std::collections::HashSet;
use support::{demo, demo_options};
use tauri_build_action::bundler::{
    BundleFormat, MobileTargets, Platform, artifact_entries, ensure_unique_destinations,
};

#[test]
fn every_platform_maps_unique_destinations() {
    let options = demo_options()
        .mobile(MobileTargets {
            android: true,
            ios: true,
        })
        .build()
        .unwrap();

    for platform in Platform::ALL {
        let entries = artifact_entries(platform, &options);
        assert!(!entries.is_empty(), "{platform}");
        ensure_unique_destinations(&entries).unwrap();

        let destinations: HashSet<_> = entries.iter().map(|e| &e.to).collect();
        assert_eq!(destinations.len(), entries.len(), "{platform}");
    }
}

#[test]
fn desktop_sources_live_under_their_own_triple() {
    let options = demo();
    for platform in Platform::ALL {
        let descriptor = platform.descriptor();
        let entries = artifact_entries(platform, &options);

        for target in descriptor.targets {
            let token = format!("_{}", target.arch);
            let own: Vec<_> = entries
                .iter()
                .filter(|e| {
                    let name = e.to.file_name().unwrap().to_string_lossy();
                    name.ends_with(&token)
                        || name.contains(&format!("{token}."))
                        || name.contains(&format!("{token}_"))
                        || name.contains(&format!("{token}-"))
                })
                .collect();
            assert!(!own.is_empty(), "{}", target.triple);
            for entry in own {
                assert!(
                    entry.from.to_string_lossy().contains(target.triple),
                    "{entry:?} should come from {}",
                    target.triple
                );
            }
        }
    }
}

#[test]
fn destinations_share_the_naming_prefix() {
    let options = demo();
    for platform in Platform::ALL {
        let prefix = format!("demo-{}-1.2.3_", platform.os_label());
        for entry in artifact_entries(platform, &options) {
            assert!(entry.to.starts_with("out"), "{entry:?}");
            let name = entry.to.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name.starts_with(&prefix), "{name}");
        }
    }
}

#[test]
fn skipped_formats_never_appear() {
    let options = demo();

    let linux = artifact_entries(Platform::Linux, &options);
    for arch in ["arm64", "armhf"] {
        let name = format!("demo-linux-1.2.3_{arch}.AppImage");
        assert!(!linux.iter().any(|e| e.to.ends_with(&name)), "{name}");
    }

    let windows = artifact_entries(Platform::Windows, &options);
    assert!(
        !windows
            .iter()
            .any(|e| e.to.ends_with("demo-windows-1.2.3_arm64_en-US.msi"))
    );
}

#[test]
fn restricting_to_a_foreign_format_keeps_only_binaries() {
    let options = demo_options()
        .bundles(vec![BundleFormat::Dmg])
        .build()
        .unwrap();
    let entries = artifact_entries(Platform::Windows, &options);
    assert_eq!(entries.len(), 3);
    assert!(
        entries
            .iter()
            .all(|e| e.from.extension().is_some_and(|ext| ext == "exe"))
    );
}
