//! Domain types for the board game collection.
//!
//! Shared by the storage layer, the import reconciler, the statistics engine
//! and the CLI. Nothing here touches the database.

pub mod timestamp;
pub mod types;

use thiserror::Error;

pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, now_local, parse_timestamp};
pub use types::{Game, GameStats, PlaySession, SortKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid sort key '{0}' (expected one of: game, total, last-played)")]
    InvalidSortKey(String),
    #[error("Unrecognized date/time '{0}'")]
    InvalidTimestamp(String),
}
