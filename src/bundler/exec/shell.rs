//! Shell-backed command executor.

use super::{CollectedArtifact, CommandExecutor, CommandSpec};
use crate::bundler::{
    ArtifactEntry, Error, Result,
    utils::{checksum::calculate_sha256, fs},
};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Variables whose scoped value is searched before the inherited one.
const SEARCH_PATH_VARS: &[&str] = &["PKG_CONFIG_PATH"];

const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Runs commands through the platform shell (`sh -c` or `cmd /C`).
///
/// Output of [`execute`](CommandExecutor::execute) is inherited so CI logs
/// stay live during long compiler runs. There is no timeout; the CI job's own
/// limit is the only cancellation mechanism.
#[derive(Clone, Debug)]
pub struct ShellExecutor {
    working_dir: PathBuf,
}

impl ShellExecutor {
    /// Creates an executor that runs every command from `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    fn command(&self, spec: &CommandSpec) -> Command {
        #[cfg(windows)]
        let mut command = {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(spec.command_line());
            command
        };
        #[cfg(not(windows))]
        let mut command = {
            let mut command = Command::new("sh");
            command.arg("-c").arg(spec.command_line());
            command
        };

        command.current_dir(&self.working_dir).envs(spec.envs().iter().map(|(k, v)| {
            let inherited = std::env::var(k).ok();
            (k.as_str(), scoped_value(k, v, inherited.as_deref()))
        }));
        command
    }
}

/// Value a scoped variable takes in the child.
///
/// Search-path variables keep the inherited entries after the scoped one;
/// everything else is replaced.
fn scoped_value(key: &str, value: &str, inherited: Option<&str>) -> String {
    match inherited {
        Some(inherited) if !inherited.is_empty() && SEARCH_PATH_VARS.contains(&key) => {
            format!("{value}{PATH_LIST_SEPARATOR}{inherited}")
        }
        _ => value.to_string(),
    }
}

/// Echoes `pipe` line by line through `echo` and returns everything read.
///
/// Bytes that are not UTF-8 are replaced so the rest of the stream is still
/// drained.
async fn tee<R: AsyncRead + Unpin>(pipe: Option<R>, echo: impl Fn(&str)) -> String {
    let mut captured = String::new();
    let Some(pipe) = pipe else {
        return captured;
    };
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                echo(line);
                captured.push_str(line);
                captured.push('\n');
            }
            Err(e) => {
                log::warn!("Stopped reading command output: {e}");
                break;
            }
        }
    }
    captured
}

fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> Error {
    Error::CommandSpawn {
        command: spec.command_line().to_string(),
        source,
    }
}

fn failed(spec: &CommandSpec, status: std::process::ExitStatus) -> Error {
    Error::CommandFailed {
        command: spec.command_line().to_string(),
        exit_code: status.code(),
    }
}

impl CommandExecutor for ShellExecutor {
    async fn execute(&self, spec: &CommandSpec) -> Result<i32> {
        log::info!("Running command: {spec}");

        let status = self
            .command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| spawn_error(spec, e))?;

        if !status.success() {
            return Err(failed(spec, status));
        }
        Ok(status.code().unwrap_or(0))
    }

    async fn execute_capturing_output(&self, spec: &CommandSpec) -> Result<String> {
        log::info!("Running command: {spec}");

        let mut child = self
            .command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(spec, e))?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        // Drain both pipes concurrently, echoing as lines arrive
        let (stdout, stderr) = tokio::join!(
            tee(stdout_pipe, |line| println!("{line}")),
            tee(stderr_pipe, |line| eprintln!("{line}"))
        );

        let status = child.wait().await.map_err(|e| spawn_error(spec, e))?;
        if !status.success() {
            log::error!("`{}` stderr: {}", spec.command_line(), stderr.trim());
            return Err(failed(spec, status));
        }

        let stdout = stdout.trim();
        if stdout.is_empty() {
            Ok(stderr.trim().to_string())
        } else {
            Ok(stdout.to_string())
        }
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(&self.working_dir.join(path)).await
    }

    async fn copy_artifact(&self, entry: &ArtifactEntry) -> Result<CollectedArtifact> {
        let from = self.working_dir.join(&entry.from);
        let to = self.working_dir.join(&entry.to);
        log::info!("Copying {} -> {}", from.display(), to.display());

        let size = fs::copy_file(&from, &to).await?;
        let sha256 = calculate_sha256(&to).await?;

        Ok(CollectedArtifact {
            path: to,
            size,
            sha256,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn successful_command_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let code = executor.execute(&CommandSpec::new("true")).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn failing_command_carries_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let err = executor
            .execute(&CommandSpec::new("exit 3"))
            .await
            .unwrap_err();
        match err {
            Error::CommandFailed { command, exit_code } => {
                assert_eq!(command, "exit 3");
                assert_eq!(exit_code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn environment_is_scoped_to_command() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let spec = CommandSpec::new("printf %s \"$TBA_PROBE\"").env("TBA_PROBE", "armhf");
        let output = executor.execute_capturing_output(&spec).await.unwrap();
        assert_eq!(output, "armhf");

        let output = executor
            .execute_capturing_output(&CommandSpec::new("printf %s \"${TBA_PROBE:-unset}\""))
            .await
            .unwrap();
        assert_eq!(output, "unset");
    }

    #[tokio::test]
    async fn capture_continues_past_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let output = executor
            .execute_capturing_output(&CommandSpec::new("printf 'caf\\351\\nv1.2.3\\n'"))
            .await
            .unwrap();
        assert_eq!(output, "caf\u{FFFD}\nv1.2.3");
    }

    #[test]
    fn search_path_keeps_inherited_entries() {
        assert_eq!(
            scoped_value(
                "PKG_CONFIG_PATH",
                "/usr/lib/i386-linux-gnu/pkgconfig/",
                Some("/opt/local/pkgconfig")
            ),
            "/usr/lib/i386-linux-gnu/pkgconfig/:/opt/local/pkgconfig"
        );
        assert_eq!(
            scoped_value("PKG_CONFIG_PATH", "/usr/lib/i386-linux-gnu/pkgconfig/", Some("")),
            "/usr/lib/i386-linux-gnu/pkgconfig/"
        );
        assert_eq!(
            scoped_value("PKG_CONFIG_SYSROOT_DIR", "/usr/aarch64-linux-gnu/", Some("/")),
            "/usr/aarch64-linux-gnu/"
        );
    }

    #[tokio::test]
    async fn scoped_search_path_comes_first() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let spec = CommandSpec::new("printf %s \"$PKG_CONFIG_PATH\"")
            .env("PKG_CONFIG_PATH", "/usr/lib/arm-linux-gnueabihf/pkgconfig/");
        let output = executor.execute_capturing_output(&spec).await.unwrap();

        let inherited = std::env::var("PKG_CONFIG_PATH").ok();
        assert!(output.starts_with("/usr/lib/arm-linux-gnueabihf/pkgconfig/"));
        assert_eq!(
            output,
            scoped_value(
                "PKG_CONFIG_PATH",
                "/usr/lib/arm-linux-gnueabihf/pkgconfig/",
                inherited.as_deref()
            )
        );
    }

    #[tokio::test]
    async fn capture_falls_back_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let output = executor
            .execute_capturing_output(&CommandSpec::new(
                "echo 'openjdk version \"17.0.2\"' 1>&2",
            ))
            .await
            .unwrap();
        assert_eq!(output, "openjdk version \"17.0.2\"");
    }

    #[tokio::test]
    async fn capture_prefers_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let output = executor
            .execute_capturing_output(&CommandSpec::new("echo v20.11.0; echo warn 1>&2"))
            .await
            .unwrap();
        assert_eq!(output, "v20.11.0");
    }

    #[tokio::test]
    async fn commands_run_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let executor = ShellExecutor::new(dir.path());
        let output = executor
            .execute_capturing_output(&CommandSpec::new("ls"))
            .await
            .unwrap();
        assert!(output.contains("marker"));
    }

    #[tokio::test]
    async fn copy_artifact_hashes_destination() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("build")).unwrap();
        std::fs::write(dir.path().join("build/demo"), b"abc").unwrap();
        let executor = ShellExecutor::new(dir.path());
        let entry = ArtifactEntry {
            from: PathBuf::from("build/demo"),
            to: PathBuf::from("out/demo-linux-1.0.0_amd64"),
        };

        let artifact = executor.copy_artifact(&entry).await.unwrap();

        assert_eq!(artifact.size, 3);
        assert_eq!(artifact.path, dir.path().join("out/demo-linux-1.0.0_amd64"));
        assert_eq!(
            artifact.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn copy_artifact_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let executor = ShellExecutor::new(dir.path());
        let entry = ArtifactEntry {
            from: PathBuf::from("build/absent"),
            to: PathBuf::from("out/absent"),
        };
        let err = executor.copy_artifact(&entry).await.unwrap_err();
        assert!(matches!(err, Error::MissingArtifact { .. }));
    }
}
