//! Real system implementation using `std::fs`

use super::System;
use std::fs;
use std::path::Path;

/// Production implementation of System trait
///
/// This implementation directly delegates to the standard library's
/// filesystem functions.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so that a dangling link still counts as taken
        fs::symlink_metadata(path).is_ok()
    }
}
