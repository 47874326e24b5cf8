//! Git remote lookup for readgen
//!
//! readgen only needs one fact from version control: the configured origin
//! remote URL. Like Cargo's `git-fetch-with-cli`, the lookup shells out to
//! the system `git` binary rather than embedding a Git library, so it works
//! with whatever repository layout and configuration the user already has.
//!
//! Failures (no git installed, not a repository, no remote configured) are
//! reported as typed errors; the metadata resolver collapses them into an
//! absent repository URL and carries on.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::core::ReadgenError;

/// Returns the platform-appropriate git executable name.
const fn get_git_command() -> &'static str {
    if cfg!(windows) { "git.exe" } else { "git" }
}

/// Minimal builder for executing git commands with captured output.
///
/// Working directory is passed with `-C` so the lookup is independent of the
/// process's current directory.
#[derive(Debug, Clone, Default)]
pub struct GitCommand {
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl GitCommand {
    /// Creates an empty command builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the repository directory the command runs against.
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Executes the command and returns trimmed stdout.
    ///
    /// A non-zero exit status becomes [`ReadgenError::GitCommandError`]; a
    /// missing git binary becomes [`ReadgenError::GitNotFound`].
    pub async fn execute_with_output(self) -> Result<String> {
        let git_command = get_git_command();

        let mut full_args = Vec::new();
        if let Some(ref dir) = self.current_dir {
            full_args.push("-C".to_string());
            full_args.push(dir.display().to_string());
        }
        full_args.extend(self.args.clone());

        debug!(target: "git", "Executing command: {} {}", git_command, full_args.join(" "));

        let mut cmd = Command::new(git_command);
        cmd.args(&full_args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.stdin(Stdio::null());

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReadgenError::GitNotFound.into());
            }
            Err(e) => {
                return Err(e)
                    .context(format!("Failed to execute git {}", full_args.join(" ")));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(target: "git", "Command failed with exit code: {:?}", output.status.code());
            return Err(ReadgenError::GitCommandError {
                operation: self.args.join(" "),
                stderr: stderr.trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Reads the configured origin remote URL for the repository containing `dir`.
///
/// Fails when git is missing, `dir` is not inside a repository, or no origin
/// remote is configured. The returned URL is raw; pass it through
/// [`normalize_repository_url`] before deriving anything from it.
pub async fn remote_origin_url(dir: &Path) -> Result<String> {
    GitCommand::new()
        .current_dir(dir)
        .args(["config", "--get", "remote.origin.url"])
        .execute_with_output()
        .await
}

/// Normalizes a repository URL for display and derivation.
///
/// Strips the `git+` scheme decoration and the trailing `.git` suffix, and
/// rewrites SSH-form GitHub remotes (`git@github.com:owner/repo`) to their
/// https equivalent so every caller sees one canonical shape.
#[must_use]
pub fn normalize_repository_url(raw: &str) -> String {
    let url = raw.trim();
    let url = url.strip_prefix("git+").unwrap_or(url);
    let url = url.strip_suffix(".git").unwrap_or(url);

    if let Some(path) = url.strip_prefix("git@github.com:") {
        return format!("https://github.com/{path}");
    }

    url.to_string()
}
