//! Error types for takeoff core.

use thiserror::Error;

/// Errors that can escape the core. Everything inside a synthesis pass
/// degrades to a defined default instead; only the storage boundary fails.
#[derive(Error, Debug)]
pub enum TakeoffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TakeoffError>;
