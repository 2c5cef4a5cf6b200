//! File system utilities for artifact collection and project preparation.

use crate::{
    bail,
    bundler::error::{Error, ErrorExt, Result},
};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Succeeds when the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// A missing source is reported as [`Error::MissingArtifact`]; a source that
/// exists but is not a regular file is a generic error.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let metadata = match fs::metadata(from).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingArtifact {
                path: from.to_path_buf(),
            });
        }
        Err(e) => return Err(e).fs_context("reading metadata of", from),
    };
    if !metadata.is_file() {
        bail!("{} is not a file", from.display());
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying to", to)
}

/// Moves every entry of `from` into `to`, then removes the emptied `from`.
///
/// Existing entries in `to` with the same name are replaced. Used to lift a
/// freshly scaffolded project into the working directory.
///
/// When `from` lives inside `to` it is first renamed into a staging
/// directory, so an entry that shares its name (a project called `src`
/// containing `src/`) cannot replace the tree being moved.
pub async fn move_dir_contents(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)
        .await
        .fs_context("creating directory", to)?;

    let staging = if from.starts_with(to) {
        let staging = tempfile::Builder::new()
            .prefix(".scaffold-")
            .tempdir_in(to)
            .fs_context("creating staging directory in", to)?;
        let tree = staging.path().join("tree");
        fs::rename(from, &tree)
            .await
            .fs_context("moving into", &tree)?;
        Some((staging, tree))
    } else {
        None
    };
    let source = staging.as_ref().map_or(from, |(_, tree)| tree.as_path());

    let mut entries = fs::read_dir(source)
        .await
        .fs_context("reading directory", source)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory", source)?
    {
        let dest = to.join(entry.file_name());
        remove_path(&dest).await?;
        fs::rename(entry.path(), &dest)
            .await
            .fs_context("moving into", &dest)?;
    }

    fs::remove_dir(source)
        .await
        .fs_context("removing directory", source)?;
    if let Some((staging, _)) = staging {
        let path = staging.path().to_path_buf();
        staging.close().fs_context("removing directory", &path)?;
    }
    Ok(())
}

/// Removes a file or directory if it exists.
async fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()), // Idempotent
        Err(e) => return Err(e).fs_context("reading metadata of", path),
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path)
            .await
            .fs_context("removing directory", path)
    } else {
        fs::remove_file(path).await.fs_context("removing file", path)
    }
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    fs::write(path, contents).await.fs_context("writing", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copy_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(&dir.path().join("absent"), &dir.path().join("out/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingArtifact { .. }));
    }

    #[tokio::test]
    async fn copy_creates_destination_parent() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("bin");
        std::fs::write(&src, b"payload").unwrap();
        let dest = dir.path().join("nested/out/bin-copy");

        let bytes = copy_file(&src, &dest).await.unwrap();

        assert_eq!(bytes, 7);
        assert_eq!(std::fs::read(&dest).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn copy_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(dir.path(), &dir.path().join("copy"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GenericError(_)));
    }

    #[tokio::test]
    async fn move_replaces_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let scaffold = dir.path().join("demo");
        std::fs::create_dir_all(scaffold.join("src-tauri")).unwrap();
        std::fs::write(scaffold.join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join("package.json"), "old").unwrap();

        move_dir_contents(&scaffold, dir.path()).await.unwrap();

        assert!(!scaffold.exists());
        assert!(dir.path().join("src-tauri").is_dir());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{}"
        );
    }

    #[tokio::test]
    async fn move_survives_entry_named_like_source() {
        let dir = tempfile::tempdir().unwrap();
        let scaffold = dir.path().join("src");
        std::fs::create_dir_all(scaffold.join("src")).unwrap();
        std::fs::write(scaffold.join("src/main.js"), "main").unwrap();
        std::fs::write(scaffold.join("package.json"), "{}").unwrap();

        move_dir_contents(&scaffold, dir.path()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("src/main.js")).unwrap(),
            "main"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{}"
        );
        let mut left: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, ["package.json", "src"]);
    }
}
