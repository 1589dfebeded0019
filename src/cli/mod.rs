//! Command-line interface module
//!
//! Handles argument parsing for the `clone` subcommand

pub mod args;

pub use args::*;
