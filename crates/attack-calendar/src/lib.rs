//! Attack-Day Calendar
//!
//! Date and timestamp bookkeeping for partitioning crawled days into the
//! "attack" and "normal" categories. Pure and local; the network fetch that
//! consumes these timestamps lives elsewhere.

mod calendar;

pub use calendar::{
    date_range_timestamps, to_timestamp_ms, write_timestamp_table, AttackCalendar,
};

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading or converting attack-day tables
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A timestamp table could not be read or written
    #[error("failed to access timestamp table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV table is malformed
    #[error("malformed timestamp table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the table
    #[error("timestamp table {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A date string is not YYYY-MM-DD
    #[error("'{date}' is not a YYYY-MM-DD date")]
    BadDate { date: String },
}
