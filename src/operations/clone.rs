//! Clone operation coordination

use crate::cli::CloneArgs;
use crate::git::{GitExecutor, SparseCheckout, check_git_availability};
use crate::operations::{CloneRequest, RequestDefaults};
use crate::system::System;
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::info;

/// Coordinates a complete clone invocation
///
/// Builds the request, checks git and hands the request to the
/// orchestrator. No git command runs until the request is valid.
#[non_exhaustive]
pub struct CloneOperation<'src> {
    request: CloneRequest,
    dry_run: bool,
    executor: &'src dyn GitExecutor,
}

impl<'src> CloneOperation<'src> {
    /// Create a new clone operation from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, see
    /// [`CloneRequest::build`].
    #[inline]
    pub fn new(
        args: &CloneArgs,
        defaults: &RequestDefaults,
        system: &dyn System,
        executor: &'src dyn GitExecutor,
    ) -> Result<Self> {
        let request = CloneRequest::build(args, defaults, system)?;

        Ok(CloneOperation {
            request,
            dry_run: args.dry_run,
            executor,
        })
    }

    /// Execute the clone operation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - git is missing or too old
    /// - any git step fails
    #[inline]
    pub fn execute(self) -> Result<()> {
        if self.dry_run {
            return self.preview_operations(&mut std::io::stdout().lock());
        }

        check_git_availability(self.executor)?;

        let path = SparseCheckout::new(self.request, self.executor).execute()?;
        info!("Sparse checkout ready at {}", path.display());
        Ok(())
    }

    /// Write the git commands that would run, one per line
    fn preview_operations(&self, out: &mut dyn Write) -> Result<()> {
        info!("Dry run preview - no git commands will be executed:");

        let checkout = SparseCheckout::new(self.request.clone(), self.executor);
        for step in checkout.steps() {
            writeln!(out, "{}", step.to_command_line()).context("Failed to write preview")?;
        }

        Ok(())
    }
}
