//! System abstraction for filesystem queries
//!
//! This module provides a unified trait for the filesystem checks made while
//! building a clone request, allowing for easy testing with mock implementations.

use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Check if any filesystem entry (file, directory or link) exists at a path
    fn exists(&self, path: &Path) -> bool;
}
