//! Stage functions shared by every platform's table.

use super::{BuildContext, Step, commands};
use crate::bundler::{artifacts::artifact_entries, exec::CommandSpec};

/// Installs project dependencies, regenerates icons and initialises mobile
/// projects.
pub(super) fn before_build(ctx: &BuildContext<'_>) -> Vec<Step> {
    let manager = ctx.options.manager();
    let mut steps = vec![Step::Run(commands::install_dependencies(manager))];

    if let Some(icon) = ctx.options.icon() {
        steps.push(Step::Run(commands::tauri_icon(manager, icon)));
    }

    for kind in ctx.mobile_targets() {
        steps.push(Step::Run(commands::mobile_init(manager, kind)));
    }

    steps
}

/// Compiles every target in descriptor order, then the mobile targets.
///
/// For each target the toolchain registration precedes the build invocation,
/// and nothing for the next target is issued until the current one is done.
pub(super) fn build(ctx: &BuildContext<'_>) -> Vec<Step> {
    let manager = ctx.options.manager();
    let descriptor = ctx.descriptor();
    let mut steps = vec![Step::Run(commands::tauri_info(manager))];

    for target in descriptor.targets {
        steps.extend(
            target
                .toolchain_targets
                .iter()
                .map(|triple| Step::Run(commands::rustup_target_add(triple))),
        );
        steps.push(Step::Run(commands::tauri_build(
            ctx.options,
            descriptor,
            target,
        )));
    }

    for kind in ctx.mobile_targets() {
        steps.extend(
            kind.toolchain_targets()
                .iter()
                .map(|triple| Step::Run(commands::rustup_target_add(triple))),
        );
        steps.push(Step::Run(commands::mobile_build(manager, kind)));
    }

    steps
}

/// Copies every mapped artifact into the output directory.
pub(super) fn after_build(ctx: &BuildContext<'_>) -> Vec<Step> {
    artifact_entries(ctx.platform, ctx.options)
        .into_iter()
        .map(Step::Copy)
        .collect()
}

/// Confirms the Rust toolchain manager is available.
pub(super) fn confirm_toolchain(_ctx: &BuildContext<'_>) -> Vec<Step> {
    vec![Step::Run(CommandSpec::new("rustup --version"))]
}
