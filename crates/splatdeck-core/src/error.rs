//! Error types for Splatdeck

use thiserror::Error;

/// Result type alias using Splatdeck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Splatdeck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Serializing the experience settings payload failed
    #[error("Settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
