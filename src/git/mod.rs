//! Git operations module
//!
//! URL handling, the git executor capability and the sparse clone sequence

pub mod executor;
pub mod mock;
pub mod sparse_checkout;
pub mod remote_url;

pub use executor::*;
pub use mock::RecordingExecutor;
pub use sparse_checkout::*;
pub use remote_url::*;
