//! Error types for the domino-train crate
//!
//! The search core itself is total; these errors only arise at the
//! boundary (parsing dominoes, building pools, loading configuration).

use thiserror::Error;

/// Main error type for the domino-train crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid domino '{input}': {reason}")]
    InvalidDomino { input: String, reason: String },

    #[error("pool of {size} distinct dominoes exceeds capacity of {capacity}")]
    PoolTooLarge { size: usize, capacity: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Bare I/O errors come from streaming writers such as the improvement trace.
impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "write search output".to_string(),
            source,
        }
    }
}
