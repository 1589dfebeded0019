//! Operations module
//!
//! Builds clone requests and coordinates their execution

pub mod clone;
pub mod request;

pub use clone::*;
pub use request::*;
