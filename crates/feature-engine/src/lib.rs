//! Block Feature Engineering
//!
//! Maps one raw Bitcoin block to a fixed 78-dimensional statistical feature
//! vector, and generates the matching dataset column schema.

mod error;
mod extractor;
mod schema;
mod statistics;

pub use error::FeatureError;
pub use extractor::{extract_block_features, FEATURE_DIMENSION};
pub use schema::{column_names, LABEL_COLUMN};
pub use statistics::SummaryStats;
