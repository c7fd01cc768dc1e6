//! Error types for article-extract.
//!
//! Extraction over an in-memory string never fails. Errors only come from
//! invalid configuration and from the byte/file entry points.

use std::path::PathBuf;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `Options` field holds a value extraction cannot work with.
    #[error("invalid option `{field}`: {reason}")]
    InvalidOption {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
