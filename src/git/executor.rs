//! Git process execution
//!
//! Every git invocation goes through the [`GitExecutor`] capability so that
//! the clone sequence can be driven by a fake in tests.

use crate::error::GitsubError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Oldest Git release whose `sparse-checkout set` accepts `--cone`
pub const MIN_GIT_VERSION: (u32, u32, u32) = (2, 35, 0);

/// A single git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    /// Short name of the step, used in diagnostics
    pub operation: String,
    /// Arguments passed to `git`
    pub args: Vec<String>,
    /// Directory to run in; `None` means the current directory
    pub working_dir: Option<PathBuf>,
}

impl GitCommand {
    /// Create a command run from the current directory
    #[must_use]
    pub fn new<O, I, S>(operation: O, args: I) -> Self
    where
        O: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operation: operation.into(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
        }
    }

    /// Run this command inside `dir`
    #[must_use]
    pub fn in_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Render the command as a shell line, `-C` standing in for the working directory
    #[must_use]
    pub fn to_command_line(&self) -> String {
        let mut parts = vec!["git".to_owned()];
        if let Some(dir) = &self.working_dir {
            parts.push("-C".to_owned());
            parts.push(shell_escape(&dir.to_string_lossy()));
        }
        parts.extend(self.args.iter().map(|arg| shell_escape(arg)));
        parts.join(" ")
    }
}

/// Capability for running git
pub trait GitExecutor: Send + Sync {
    /// Run a command to completion, forwarding its output live
    ///
    /// # Errors
    ///
    /// Returns `GitsubError::ExternalOperation` if git cannot be started or
    /// exits unsuccessfully.
    fn execute(&self, command: &GitCommand) -> Result<()>;

    /// Raw output of `git --version`
    ///
    /// # Errors
    ///
    /// Returns `GitsubError::ToolUnavailable` if git cannot be run.
    fn version(&self) -> Result<String>;
}

/// Runs the `git` executable found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct RealGitExecutor;

impl RealGitExecutor {
    /// Create a new `RealGitExecutor`
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl GitExecutor for RealGitExecutor {
    fn execute(&self, command: &GitCommand) -> Result<()> {
        debug!("Running: {}", command.to_command_line());

        let mut process = Command::new("git");
        process.args(&command.args);
        if let Some(dir) = &command.working_dir {
            process.current_dir(dir);
        }

        // stdout and stderr are inherited so git's progress reaches the user
        let status = process.status().map_err(|e| {
            GitsubError::external(&command.operation, format!("failed to start git: {e}"))
        })?;

        if !status.success() {
            return Err(GitsubError::external(&command.operation, status.to_string()).into());
        }

        Ok(())
    }

    fn version(&self) -> Result<String> {
        let output = Command::new("git")
            .arg("--version")
            .output()
            .map_err(|e| GitsubError::tool_unavailable(format!("git not found or not installed: {e}")))?;

        if !output.status.success() {
            return Err(GitsubError::tool_unavailable(format!(
                "git --version failed with {}",
                output.status
            ))
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check that git responds to a version query and is recent enough
///
/// # Errors
///
/// Returns `GitsubError::ToolUnavailable` if:
/// - git cannot be run
/// - the output is not a git version banner
/// - the version is older than [`MIN_GIT_VERSION`]
pub fn check_git_availability(executor: &dyn GitExecutor) -> Result<()> {
    let banner = executor.version()?;

    if !banner.contains("git version") {
        return Err(GitsubError::tool_unavailable("unable to detect git version").into());
    }

    if let Some(version_part) = banner.split_whitespace().nth(2)
        && let Ok(version) = parse_git_version(version_part)
        && version < MIN_GIT_VERSION
    {
        let (major, minor, patch) = MIN_GIT_VERSION;
        return Err(GitsubError::tool_unavailable(format!(
            "git {version_part} is too old, sparse checkout in cone mode needs {major}.{minor}.{patch} or later"
        ))
        .into());
    }

    debug!("Detected {}", banner.trim());
    Ok(())
}

/// Parse Git version string into tuple (major, minor, patch)
///
/// # Errors
///
/// Returns an error if the string does not start with three numeric components.
pub fn parse_git_version(version: &str) -> Result<(u32, u32, u32)> {
    let parts: Vec<&str> = version.split('.').collect();
    if let [major, minor, patch, ..] = parts.as_slice() {
        return Ok((major.parse()?, minor.parse()?, patch.parse()?));
    }
    Err(anyhow::anyhow!("Invalid version format: {version}"))
}

/// Escape a string for shell execution
/// Uses double quotes for safety, escaping special characters inside
fn shell_escape(s: &str) -> String {
    if !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | ':' | '=' | '@')
        })
    {
        return s.to_owned();
    }

    let mut result = String::from('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            '$' => result.push_str(r"\$"),
            '`' => result.push_str(r"\`"),
            '!' => result.push_str(r"\!"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Directory a command runs in, for log messages
#[must_use]
pub fn display_dir(command: &GitCommand) -> String {
    command
        .working_dir
        .as_deref()
        .map_or_else(|| ".".to_owned(), |dir: &Path| dir.display().to_string())
}
