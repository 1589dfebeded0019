//! Recording git executor for testing

use super::{GitCommand, GitExecutor};
use crate::error::GitsubError;
use anyhow::Result;
use std::sync::{Arc, RwLock};

/// In-memory implementation of `GitExecutor` for testing
///
/// Records every command it is asked to run instead of spawning git, and can
/// be told to fail a named operation or the version check.
///
/// # Example
/// ```
/// use gitsub::git::{GitCommand, GitExecutor, RecordingExecutor};
///
/// let executor = RecordingExecutor::new().failing_on("fetch");
///
/// executor.execute(&GitCommand::new("init", ["init", "repo"])).unwrap();
/// assert!(executor.execute(&GitCommand::new("fetch", ["fetch"])).is_err());
/// assert_eq!(executor.operations(), vec!["init", "fetch"]);
/// ```
#[derive(Clone)]
pub struct RecordingExecutor {
    state: Arc<RwLock<RecordingState>>,
}

struct RecordingState {
    commands: Vec<GitCommand>,
    version_checks: usize,
    fail_on: Option<String>,
    banner: Option<String>,
}

impl RecordingExecutor {
    /// Create an executor that succeeds at everything
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RecordingState {
                commands: Vec::new(),
                version_checks: 0,
                fail_on: None,
                banner: Some("git version 2.43.0\n".to_owned()),
            })),
        }
    }

    /// Fail the first command whose operation matches (builder pattern)
    #[must_use]
    pub fn failing_on(self, operation: &str) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.fail_on = Some(operation.to_owned());
        }
        self
    }

    /// Answer the version check with `banner` (builder pattern)
    #[must_use]
    pub fn with_version_banner(self, banner: &str) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.banner = Some(banner.to_owned());
        }
        self
    }

    /// Behave as if git were not installed (builder pattern)
    #[must_use]
    pub fn unavailable(self) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.banner = None;
        }
        self
    }

    /// Every command received so far, in order
    #[must_use]
    pub fn commands(&self) -> Vec<GitCommand> {
        self.state
            .read()
            .map(|state| state.commands.clone())
            .unwrap_or_default()
    }

    /// Operation names received so far, in order
    #[must_use]
    pub fn operations(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .map(|command| command.operation)
            .collect()
    }

    /// Number of version checks received
    #[must_use]
    pub fn version_checks(&self) -> usize {
        self.state
            .read()
            .map(|state| state.version_checks)
            .unwrap_or_default()
    }
}

impl Default for RecordingExecutor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor for RecordingExecutor {
    fn execute(&self, command: &GitCommand) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow::anyhow!("Recording state poisoned: {e}"))?;
        state.commands.push(command.clone());

        if state.fail_on.as_deref() == Some(command.operation.as_str()) {
            drop(state);
            return Err(GitsubError::external(&command.operation, "exit status: 128").into());
        }

        drop(state);
        Ok(())
    }

    fn version(&self) -> Result<String> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow::anyhow!("Recording state poisoned: {e}"))?;
        state.version_checks += 1;
        let banner = state.banner.clone();
        drop(state);

        banner.ok_or_else(|| GitsubError::tool_unavailable("git not found or not installed").into())
    }
}
