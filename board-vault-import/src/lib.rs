//! Bulk import of play history into the collection database.
//!
//! Delimited text is parsed into typed rows at the boundary (`rows`), then
//! reconciled against existing games one row at a time (`reconcile`). Bad
//! rows are collected in the summary and never abort the batch.

pub mod reconcile;
pub mod rows;

use thiserror::Error;

pub use reconcile::{
    ImportOptions, ImportSummary, RowOutcome, SkippedRow, TimestampPolicy, import_rows,
    import_rows_at,
};
pub use rows::{PlayRow, RawRow, RowIssue, RowTimestamp, ValidRow, read_play_file, read_play_rows};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] board_vault_db::OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Cannot read import file {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
