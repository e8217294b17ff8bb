//! Dataset Assembly
//!
//! Scans a directory of block-collection JSON files, extracts one feature
//! vector per block, labels every row from the directory category, and
//! writes the labeled table as CSV.

mod builder;

pub use builder::{DatasetBuilder, DatasetSummary};

use block_model::ModelError;
use feature_engine::FeatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors during dataset assembly
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Source directory or a file in it could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A block file failed to parse
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A block in a file failed feature extraction
    #[error("feature extraction failed for a block in {path}: {source}")]
    Feature {
        path: PathBuf,
        #[source]
        source: FeatureError,
    },

    /// The output CSV could not be written
    #[error("failed to write dataset to {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
