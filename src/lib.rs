//! `gitsub` - clone only the subdirectories you need from a Git repository
//!
//! This library turns either an explicit repository URL plus directories, or a
//! single GitHub tree/blob URL, into a sparse, blob-less, shallow clone driven
//! by the `git` executable.

pub mod cli;
pub mod error;
pub mod git;
pub mod operations;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{CloneArgs, Command};
use git::{GitExecutor, RealGitExecutor};
use operations::{CloneOperation, RequestDefaults};
use system::{RealSystem, System};

/// Main entry point for the gitsub library
pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Clone(args) => run_clone(args, &RealSystem, &RealGitExecutor),
    }
}

/// Run the clone command against the given system and executor
pub fn run_clone(args: &CloneArgs, system: &dyn System, executor: &dyn GitExecutor) -> Result<()> {
    let operation = CloneOperation::new(args, &RequestDefaults::default(), system, executor)?;
    operation.execute()
}
