//! Write operations and single-entity lookups for games and play sessions.

use board_vault_catalog::{Game, PlaySession, format_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, ErrorCode, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Game '{0}' already exists")]
    DuplicateGame(String),
    #[error("Game '{0}' not found")]
    NotFound(String),
}

// ── Game Operations ─────────────────────────────────────────────────────────

/// Insert a new game. Fails with `DuplicateGame` if the name is taken.
pub fn insert_game(conn: &Connection, name: &str) -> Result<Game, OperationError> {
    match conn.execute("INSERT INTO games (name) VALUES (?1)", params![name]) {
        Ok(_) => Ok(Game {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        }),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(OperationError::DuplicateGame(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Find a game by name (exact, case-sensitive match).
pub fn find_game_by_name(conn: &Connection, name: &str) -> Result<Option<Game>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name FROM games WHERE name = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![name], |row| {
        Ok(Game {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    });
    match result {
        Ok(game) => Ok(Some(game)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a game and its whole play history.
///
/// Play rows are removed explicitly in the same transaction as the game, so
/// the history never dangles even on databases created without the
/// `ON DELETE CASCADE` clause. Returns the number of play rows removed.
pub fn delete_game(conn: &Connection, name: &str) -> Result<usize, OperationError> {
    let game = find_game_by_name(conn, name)?
        .ok_or_else(|| OperationError::NotFound(name.to_string()))?;

    let tx = conn.unchecked_transaction()?;
    let plays_removed = tx.execute(
        "DELETE FROM game_flow WHERE game_id = ?1",
        params![game.id],
    )?;
    tx.execute("DELETE FROM games WHERE id = ?1", params![game.id])?;
    tx.commit()?;

    Ok(plays_removed)
}

// ── Play Operations ─────────────────────────────────────────────────────────

/// Record a play of an existing game at the given moment.
pub fn insert_play(
    conn: &Connection,
    game_id: i64,
    played_at: &NaiveDateTime,
) -> Result<PlaySession, OperationError> {
    conn.execute(
        "INSERT INTO game_flow (game_id, played_at) VALUES (?1, ?2)",
        params![game_id, format_timestamp(played_at)],
    )?;
    Ok(PlaySession {
        id: conn.last_insert_rowid(),
        game_id,
        played_at: *played_at,
    })
}

/// Whether a play of this game at exactly this moment is already recorded.
pub fn play_exists(
    conn: &Connection,
    game_id: i64,
    played_at: &NaiveDateTime,
) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM game_flow WHERE game_id = ?1 AND datetime(played_at) = ?2)",
        params![game_id, format_timestamp(played_at)],
        |row| row.get(0),
    )?;
    Ok(exists)
}
