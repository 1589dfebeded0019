//! # `gitsub`
//!
//! Materialize only part of a remote Git repository using sparse checkout and
//! partial clone.
//!
//! ## Usage
//!
//! **Explicit repository and directories:**
//! ```sh
//! gitsub clone https://github.com/tensorflow/tensorflow tensorflow/core
//! ```
//!
//! **GitHub directory or file link:**
//! ```sh
//! gitsub clone https://github.com/owner/repo/tree/main/src/lib
//! ```
//!
//! See `gitsub clone --help` for options.

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory as _, Parser as _};
use gitsub::cli::Cli;
use gitsub::error::GitsubError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|err| exit_on_parse_error(&err));

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries usage text and dry-run output only
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match gitsub::run(&cli.command) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            let gitsub_error = err.downcast_ref::<GitsubError>();
            if let Some(GitsubError::Usage { .. }) = gitsub_error {
                print_clone_usage();
            }
            std::process::exit(gitsub_error.map_or(1, GitsubError::exit_code));
        }
    }
}

/// Report a clap failure with help and usage on stdout, error text on stderr
fn exit_on_parse_error(err: &clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => print!("{}", err.render()),
        _ => {
            eprint!("{}", err.render());
            if let Some(ContextValue::StyledStr(usage)) = err.get(ContextKind::Usage) {
                println!("{usage}");
            }
        }
    }
    std::process::exit(err.exit_code());
}

fn print_clone_usage() {
    let mut command = Cli::command();
    command.build();
    if let Some(clone) = command.find_subcommand_mut("clone") {
        println!("{}", clone.render_usage());
    }
}
