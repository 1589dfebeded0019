//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for gitsub operations
///
/// Every variant is terminal for the invocation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GitsubError {
    /// Wrong argument count or shape
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Repository URL does not use an accepted transport
    #[error("Invalid repository URL: {url}")]
    InvalidUrl { url: String },

    /// A directory argument normalizes to nothing
    #[error("Invalid directory path: {raw:?}")]
    InvalidDirectory { raw: String },

    /// No output directory given and none could be derived from the URL
    #[error("Unable to determine output directory from repository URL: {url}")]
    MissingOutputDirectory { url: String },

    /// Target output path is already present on disk
    #[error("Output directory already exists: {path}")]
    OutputExists { path: String },

    /// Git executable missing or unresponsive to a version check
    #[error("Git unavailable: {message}")]
    ToolUnavailable { message: String },

    /// A git step failed
    #[error("git {operation} failed: {message}")]
    ExternalOperation { operation: String, message: String },
}

impl GitsubError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::InvalidUrl { .. }
            | Self::InvalidDirectory { .. }
            | Self::MissingOutputDirectory { .. } => 1,
            Self::Usage { .. } => 2,
            Self::ToolUnavailable { .. } | Self::ExternalOperation { .. } => 4,
            Self::OutputExists { .. } => 5,
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an invalid URL error
    #[inline]
    pub fn invalid_url<S: Into<String>>(url: S) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Create an invalid directory error naming the raw argument
    #[inline]
    pub fn invalid_directory<S: Into<String>>(raw: S) -> Self {
        Self::InvalidDirectory { raw: raw.into() }
    }

    /// Create a missing output directory error
    #[inline]
    pub fn missing_output_directory<S: Into<String>>(url: S) -> Self {
        Self::MissingOutputDirectory { url: url.into() }
    }

    /// Create an output exists error
    #[inline]
    pub fn output_exists<S: Into<String>>(path: S) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create a tool unavailable error
    #[inline]
    pub fn tool_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ToolUnavailable {
            message: message.into(),
        }
    }

    /// Create an external operation error for the named git step
    #[inline]
    pub fn external<O: Into<String>, S: Into<String>>(operation: O, message: S) -> Self {
        Self::ExternalOperation {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
