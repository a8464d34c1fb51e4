//! Row-by-row reconciliation of import data against the collection.
//!
//! Each valid row resolves its game by exact name, creating the game on
//! first reference, then appends one play session. Row problems are
//! recorded in the summary; only storage failures abort the import, and
//! then nothing from the batch is kept.

use board_vault_catalog::{format_timestamp, now_local};
use board_vault_db::operations;
use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::ImportError;
use crate::rows::{PlayRow, RawRow, RowIssue, RowTimestamp, ValidRow};

/// Rows between progress lines in the debug log.
const PROGRESS_INTERVAL: usize = 100;

/// What to do with a timestamp that is present but unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Import the row at the current moment and count it as defaulted.
    #[default]
    FallbackToNow,
    /// Skip the row with `RowIssue::BadTimestamp`.
    Strict,
}

/// Options controlling an import run.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub timestamp_policy: TimestampPolicy,
}

/// Per-row result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Imported,
    SkippedBlankName,
    SkippedBadTimestamp,
    SkippedDuplicate,
    SkippedUnreadable,
}

impl RowOutcome {
    fn for_issue(issue: &RowIssue) -> Self {
        match issue {
            RowIssue::BlankName => RowOutcome::SkippedBlankName,
            RowIssue::BadTimestamp(_) => RowOutcome::SkippedBadTimestamp,
            RowIssue::Duplicate(_) => RowOutcome::SkippedDuplicate,
            RowIssue::Unreadable(_) => RowOutcome::SkippedUnreadable,
        }
    }
}

/// A row that was not imported, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub row: RawRow,
    pub reason: RowIssue,
}

/// Summary of an import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub games_created: usize,
    /// Rows imported at the current moment because their timestamp was unparseable.
    pub defaulted_timestamps: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Import rows, using the current moment for rows without a usable timestamp.
pub fn import_rows(
    conn: &Connection,
    rows: &[PlayRow],
    options: &ImportOptions,
) -> Result<ImportSummary, ImportError> {
    import_rows_at(conn, rows, options, now_local())
}

/// Import rows with an explicit "current moment".
pub fn import_rows_at(
    conn: &Connection,
    rows: &[PlayRow],
    options: &ImportOptions,
    now: NaiveDateTime,
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();

    if rows.is_empty() {
        return Ok(summary);
    }

    let tx = conn.unchecked_transaction()?;

    for (i, row) in rows.iter().enumerate() {
        let (outcome, name) = match row {
            PlayRow::Valid(valid) => (
                import_row(&tx, valid, options, now, &mut summary)?,
                valid.game_name.as_str(),
            ),
            PlayRow::Invalid { line, raw, issue } => {
                log::warn!("Skipping line {}: {}", line, issue);
                summary.skipped.push(SkippedRow {
                    line: *line,
                    row: raw.clone(),
                    reason: issue.clone(),
                });
                (RowOutcome::for_issue(issue), raw.game_name.as_str())
            }
        };
        log::trace!("line {}: {:?}", row.line(), outcome);

        let current = i + 1;
        if current.is_multiple_of(PROGRESS_INTERVAL) || current == rows.len() {
            log::debug!("  [{}/{}] {}", current, rows.len(), name);
        }
    }

    tx.commit()?;

    Ok(summary)
}

/// Import a single valid row.
fn import_row(
    conn: &Connection,
    row: &ValidRow,
    options: &ImportOptions,
    now: NaiveDateTime,
    summary: &mut ImportSummary,
) -> Result<RowOutcome, ImportError> {
    let skip = |summary: &mut ImportSummary, reason: RowIssue| {
        log::warn!("Skipping line {} ('{}'): {}", row.line, row.game_name, reason);
        let outcome = RowOutcome::for_issue(&reason);
        summary.skipped.push(SkippedRow {
            line: row.line,
            row: row.raw.clone(),
            reason,
        });
        outcome
    };

    // Resolve the timestamp before touching games, so a skipped row never
    // creates a game as a side effect.
    let (played_at, explicit) = match &row.played_at {
        RowTimestamp::Parsed(ts) => (*ts, true),
        RowTimestamp::Absent => (now, false),
        RowTimestamp::Unparseable(raw) => match options.timestamp_policy {
            TimestampPolicy::Strict => {
                return Ok(skip(summary, RowIssue::BadTimestamp(raw.clone())));
            }
            TimestampPolicy::FallbackToNow => {
                log::warn!(
                    "Line {} ('{}'): unrecognized date/time '{}', using current time",
                    row.line,
                    row.game_name,
                    raw,
                );
                summary.defaulted_timestamps += 1;
                (now, false)
            }
        },
    };

    let game = match operations::find_game_by_name(conn, &row.game_name)? {
        Some(game) => game,
        None => {
            let game = operations::insert_game(conn, &row.game_name)?;
            log::debug!("Created game '{}' (id {})", game.name, game.id);
            summary.games_created += 1;
            game
        }
    };

    if explicit && operations::play_exists(conn, game.id, &played_at)? {
        return Ok(skip(summary, RowIssue::Duplicate(format_timestamp(&played_at))));
    }

    operations::insert_play(conn, game.id, &played_at)?;
    summary.imported += 1;
    Ok(RowOutcome::Imported)
}
