//! Error handling module
//!
//! Defines the error taxonomy for clone invocations and their exit codes

pub mod types;

pub use types::*;
