//! Typed rows at the import parse boundary.
//!
//! Column 0 is the game name, column 1 an optional play timestamp. The
//! first line is a header and is always skipped. Extra columns are ignored.

use std::io::Read;
use std::path::Path;

use board_vault_catalog::parse_timestamp;
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::ImportError;

/// The two fields of an import record, as they appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub game_name: String,
    pub played_at: Option<String>,
}

impl RawRow {
    pub fn new(game_name: impl Into<String>, played_at: Option<&str>) -> Self {
        Self {
            game_name: game_name.into(),
            played_at: played_at.map(str::to_string),
        }
    }
}

/// Why a row could not be imported as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("game name is blank")]
    BlankName,
    #[error("unrecognized date/time '{0}'")]
    BadTimestamp(String),
    #[error("play session at {0} is already recorded")]
    Duplicate(String),
    #[error("unreadable record: {0}")]
    Unreadable(String),
}

/// The timestamp cell of a valid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTimestamp {
    /// Empty or missing cell.
    Absent,
    Parsed(NaiveDateTime),
    /// Present but not a recognizable date/time. The reconciler's
    /// `TimestampPolicy` decides what happens to it.
    Unparseable(String),
}

/// A row with a usable game name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRow {
    pub line: u64,
    pub game_name: String,
    pub played_at: RowTimestamp,
    pub raw: RawRow,
}

/// Outcome of validating one source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRow {
    Valid(ValidRow),
    Invalid { line: u64, raw: RawRow, issue: RowIssue },
}

impl PlayRow {
    /// Validate a raw record. Names are trimmed; a blank name is invalid.
    pub fn parse(line: u64, raw: RawRow) -> Self {
        let game_name = raw.game_name.trim().to_string();
        if game_name.is_empty() {
            return PlayRow::Invalid {
                line,
                raw,
                issue: RowIssue::BlankName,
            };
        }

        let played_at = match raw.played_at.as_deref().map(str::trim) {
            None | Some("") => RowTimestamp::Absent,
            Some(s) => match parse_timestamp(s) {
                Ok(ts) => RowTimestamp::Parsed(ts),
                Err(_) => RowTimestamp::Unparseable(s.to_string()),
            },
        };

        PlayRow::Valid(ValidRow {
            line,
            game_name,
            played_at,
            raw,
        })
    }

    pub fn line(&self) -> u64 {
        match self {
            PlayRow::Valid(row) => row.line,
            PlayRow::Invalid { line, .. } => *line,
        }
    }
}

/// Read import rows from delimited text with a header line.
///
/// Records the CSV reader cannot decode (e.g. invalid UTF-8) become
/// `PlayRow::Invalid` with `RowIssue::Unreadable`; reading continues.
pub fn read_play_rows<R: Read>(reader: R) -> Result<Vec<PlayRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // Header is line 1
        let fallback_line = i as u64 + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
                log::warn!("Unreadable import record on line {}: {}", line, e);
                rows.push(PlayRow::Invalid {
                    line,
                    raw: RawRow::new("", None),
                    issue: RowIssue::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
        let raw = RawRow::new(record.get(0).unwrap_or(""), record.get(1));
        rows.push(PlayRow::parse(line, raw));
    }

    Ok(rows)
}

/// Open and read an import file. A missing file is an error, not an empty import.
pub fn read_play_file(path: &Path) -> Result<Vec<PlayRow>, ImportError> {
    let file = std::fs::File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_play_rows(std::io::BufReader::new(file))
}
