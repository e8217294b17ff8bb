//! Block Model Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading and parsing block collections
#[derive(Debug, Error)]
pub enum ModelError {
    /// The block file could not be read
    #[error("failed to read block file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block or transaction record is missing a field or has a wrong-typed value
    #[error("malformed block record in {path}: {source}")]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file's top-level JSON is neither an array of blocks nor a single block
    #[error("block file {path} does not hold a block array or a single block object")]
    UnexpectedShape { path: PathBuf },
}
