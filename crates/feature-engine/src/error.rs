//! Feature Extraction Error Types

use thiserror::Error;

/// Errors during block feature extraction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// A statistic was requested over zero elements. A transaction with no
    /// inputs or outputs, or a block with no transactions, is a data-quality
    /// signal, not something to paper over with a default value.
    #[error("cannot aggregate over an empty {what} series")]
    EmptyAggregation { what: &'static str },

    /// The assembled feature vector is not exactly 78 elements. This is a
    /// logic defect in the extractor, always fatal.
    #[error("feature vector has {actual} elements, expected 78")]
    ShapeInvariant { actual: usize },
}
