//! Git sparse checkout implementation

use crate::git::{GitCommand, GitExecutor};
use crate::operations::CloneRequest;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Remote name registered in the new repository
pub const REMOTE_NAME: &str = "origin";

/// Realizes a [`CloneRequest`] as an ordered series of git commands
///
/// Each step depends on the side effects of the one before it, so the first
/// failure stops the sequence. Nothing is rolled back: a partially
/// initialized output directory stays on disk as git left it.
#[non_exhaustive]
pub struct SparseCheckout<'exec> {
    pub request: CloneRequest,
    executor: &'exec dyn GitExecutor,
}

impl<'exec> SparseCheckout<'exec> {
    /// Create a new sparse checkout operation
    #[must_use]
    #[inline]
    pub fn new(request: CloneRequest, executor: &'exec dyn GitExecutor) -> Self {
        Self { request, executor }
    }

    /// The commands `execute` runs, in order
    #[must_use]
    pub fn steps(&self) -> Vec<GitCommand> {
        let request = &self.request;
        let output = request.output_directory.as_str();

        // User-supplied operands follow --end-of-options. checkout keeps that
        // marker as a revision before git 2.44, so it takes `<branch> --`
        // and CloneRequest::build rejects branches starting with '-'
        let mut sparse_set = vec![
            "sparse-checkout".to_owned(),
            "set".to_owned(),
            "--cone".to_owned(),
            "--end-of-options".to_owned(),
        ];
        sparse_set.extend(request.directories.iter().cloned());

        vec![
            GitCommand::new("init", ["init", output]),
            GitCommand::new(
                "remote-add",
                ["remote", "add", REMOTE_NAME, request.repository_url.as_str()],
            )
            .in_dir(output),
            GitCommand::new(
                "sparse-checkout-enable",
                ["config", "core.sparseCheckout", "true"],
            )
            .in_dir(output),
            GitCommand::new("sparse-checkout-set", sparse_set).in_dir(output),
            // Shallow and blob-less: only the tip commit and its trees are
            // transferred, blobs arrive lazily during checkout
            GitCommand::new(
                "fetch",
                [
                    "fetch",
                    "--filter=blob:none",
                    "--depth=1",
                    "--end-of-options",
                    REMOTE_NAME,
                    request.branch.as_str(),
                ],
            )
            .in_dir(output),
            GitCommand::new("checkout", ["checkout", request.branch.as_str(), "--"])
                .in_dir(output),
        ]
    }

    /// Execute the sparse checkout operation
    ///
    /// Returns the path of the new working copy.
    ///
    /// # Errors
    ///
    /// Returns the error of the first git step that fails:
    /// - The repository cannot be initialized
    /// - The remote cannot be added
    /// - Sparse checkout cannot be enabled or its paths cannot be set
    /// - The branch cannot be fetched or checked out
    #[inline]
    pub fn execute(self) -> Result<PathBuf> {
        let request = &self.request;

        info!("Cloning repository: {}", request.repository_url);
        info!("Output directory: {}", request.output_directory);
        info!("Branch: {}", request.branch);
        debug!("Sparse paths: {}", request.directories.join(", "));

        for step in self.steps() {
            if step.operation == "fetch" {
                info!("Fetching required files...");
            }
            debug!("Step {} in {}", step.operation, super::display_dir(&step));
            self.executor.execute(&step)?;
            debug!("Step {} complete", step.operation);
        }

        info!("Done.");
        Ok(PathBuf::from(&request.output_directory))
    }
}
