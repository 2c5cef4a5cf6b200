//! Tauri project scaffolding and configuration patching.
//!
//! A fresh project is generated with `create-tauri-app` into a subdirectory
//! named after the project, its `tauri.conf.json` is patched with the run's
//! identity, and the generated tree is lifted into the project directory so
//! the build stages find `src-tauri/` at the root.

use crate::bundler::{
    BuildOptions, CommandExecutor, CommandSpec, Context, ErrorExt, Result, utils::fs,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Location of the Tauri configuration inside a project.
pub const TAURI_CONF_PATH: &str = "src-tauri/tauri.conf.json";

/// Command that generates the project skeleton.
pub fn create_command(options: &BuildOptions) -> CommandSpec {
    CommandSpec::new(format!(
        "npm create tauri-app {} -- --identifier {} --template {} --manager {} --yes --force",
        options.project_name(),
        options.identifier(),
        options.template(),
        options.manager(),
    ))
}

/// Scaffolds a new project into `options.project_dir()`.
///
/// The executor must run commands from the project directory.
pub async fn initialize<E: CommandExecutor>(executor: &E, options: &BuildOptions) -> Result<()> {
    log::info!(
        "Scaffolding {} from template {}",
        options.project_name(),
        options.template()
    );
    executor.execute(&create_command(options)).await?;

    let generated = options.project_dir().join(options.project_name());
    let conf_path = generated.join(TAURI_CONF_PATH);
    if tokio::fs::try_exists(&conf_path)
        .await
        .fs_context("checking", &conf_path)?
    {
        patch_tauri_config_file(&conf_path, options).await?;
    } else {
        log::warn!("{} not generated; leaving configuration untouched", conf_path.display());
    }

    fs::move_dir_contents(&generated, options.project_dir()).await
}

/// Rewrites the configuration file at `path` in place.
pub async fn patch_tauri_config_file(path: &Path, options: &BuildOptions) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading", path)?;
    let patched = patch_tauri_config(&raw, options)?;
    fs::write_file(path, &patched).await
}

/// Sets `productName`, `version`, `identifier` and `build.frontendDist`.
///
/// Every other key is preserved.
pub fn patch_tauri_config(raw: &str, options: &BuildOptions) -> Result<String> {
    let mut conf: Value = serde_json::from_str(raw)?;
    let root = conf
        .as_object_mut()
        .context("tauri.conf.json must contain a JSON object")?;

    root.insert("productName".into(), options.project_name().into());
    root.insert("version".into(), options.version().into());
    root.insert("identifier".into(), options.identifier().into());

    let build = root
        .entry("build")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .context("`build` in tauri.conf.json must be an object")?;
    build.insert("frontendDist".into(), options.frontend_dist().into());

    Ok(serde_json::to_string_pretty(&conf)?)
}

/// Writes every configured override verbatim, returning the paths written.
pub async fn apply_overrides(options: &BuildOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (relative, contents) in options.overrides().files() {
        let path = options.project_dir().join(relative);
        fs::write_file(&path, contents).await?;
        log::info!("Overrode {}", path.display());
        written.push(path);
    }
    Ok(written)
}
