//! Read queries for the collection database.

use board_vault_catalog::{Game, PlaySession, format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, params};

use crate::operations::OperationError;

// ── Games ───────────────────────────────────────────────────────────────────

/// List all games in insertion order.
pub fn list_games(conn: &Connection) -> Result<Vec<Game>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM games ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Game {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn count_games(conn: &Connection) -> Result<u64, OperationError> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
    Ok(n as u64)
}

// ── Play History ────────────────────────────────────────────────────────────

pub fn count_plays(conn: &Connection) -> Result<u64, OperationError> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM game_flow", [], |row| row.get(0))?;
    Ok(n as u64)
}

/// All plays of one game, oldest first.
pub fn plays_for_game(conn: &Connection, game_id: i64) -> Result<Vec<PlaySession>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, game_id, played_at FROM game_flow
         WHERE game_id = ?1 ORDER BY datetime(played_at), id",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        Ok(PlaySession {
            id: row.get(0)?,
            game_id: row.get(1)?,
            played_at: row_timestamp(row, 2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Aggregates ──────────────────────────────────────────────────────────────

/// Per-game totals straight out of the grouped query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayAggregate {
    pub game_id: i64,
    pub name: String,
    pub total_plays: u64,
    pub plays_since: u64,
    pub last_played: Option<NaiveDateTime>,
}

/// Aggregate play history for every game, including games never played.
///
/// `plays_since` counts plays at or after `since`. Stored timestamps are
/// compared through `datetime()`, so rows written with a `T` separator or
/// fractional seconds order the same as ours. Rows come back ordered by
/// name; callers apply their own report ordering.
pub fn game_play_aggregates(
    conn: &Connection,
    since: &NaiveDateTime,
) -> Result<Vec<PlayAggregate>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT g.id,
                g.name,
                COUNT(f.id),
                COALESCE(SUM(CASE WHEN datetime(f.played_at) >= ?1 THEN 1 ELSE 0 END), 0),
                MAX(datetime(f.played_at))
         FROM games AS g
         LEFT JOIN game_flow AS f ON f.game_id = g.id
         GROUP BY g.id
         ORDER BY g.name",
    )?;
    let rows = stmt.query_map(params![format_timestamp(since)], |row| {
        let total: i64 = row.get(2)?;
        let recent: i64 = row.get(3)?;
        let last: Option<String> = row.get(4)?;
        let last_played = match last {
            Some(s) => Some(
                parse_timestamp(&s)
                    .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
            ),
            None => None,
        };
        Ok(PlayAggregate {
            game_id: row.get(0)?,
            name: row.get(1)?,
            total_plays: total as u64,
            plays_since: recent as u64,
            last_played,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_timestamp(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
