//! Typed Bitcoin Block Records
//!
//! Provides strongly typed block, transaction, input and output structures
//! parsed from raw blockchain.info JSON, replacing loosely keyed dictionary
//! access with parse-time validation.

mod error;
mod loader;
mod record;

pub use error::ModelError;
pub use loader::parse_block_collection;
pub use record::{Block, Input, Output, PrevOut, Transaction, SATOSHI_PER_COIN};
