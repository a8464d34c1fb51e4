//! Explicit single-entity writes: add, delete, and log a play.
//!
//! Names are trimmed; matching is otherwise exact and case-sensitive.
//! Asking the user before `delete_game` is the caller's job.

use std::path::Path;

use board_vault_catalog::{Game, PlaySession, now_local};
use board_vault_db::{Connection, OperationError, operations, queries};
use chrono::NaiveDateTime;

use crate::error::VaultError;

/// Open (creating if needed) the collection database at `path`.
///
/// Failure here means storage is unavailable: missing permissions, a locked
/// or corrupt file, or a schema newer than this build understands.
pub fn open_collection(path: &Path) -> Result<Connection, VaultError> {
    let conn = board_vault_db::open_database(path)?;
    log::debug!("Opened collection at {}", path.display());
    Ok(conn)
}

fn clean_name(name: &str) -> Result<&str, VaultError> {
    let name = name.trim();
    if name.is_empty() {
        Err(VaultError::BlankName)
    } else {
        Ok(name)
    }
}

/// Add a game with no play history. Fails with `DuplicateGame` if the name exists.
pub fn add_game(conn: &Connection, name: &str) -> Result<Game, VaultError> {
    let name = clean_name(name)?;
    let game = operations::insert_game(conn, name)?;
    log::debug!("Added game '{}' (id {})", game.name, game.id);
    Ok(game)
}

/// Delete a game and all of its plays. Returns how many plays were removed.
pub fn delete_game(conn: &Connection, name: &str) -> Result<usize, VaultError> {
    let name = clean_name(name)?;
    let removed = operations::delete_game(conn, name)?;
    log::debug!("Deleted game '{}' and {} plays", name, removed);
    Ok(removed)
}

/// Record a play of an existing game now.
pub fn log_play(conn: &Connection, name: &str) -> Result<PlaySession, VaultError> {
    log_play_at(conn, name, now_local())
}

/// Record a play of an existing game at `played_at`.
pub fn log_play_at(
    conn: &Connection,
    name: &str,
    played_at: NaiveDateTime,
) -> Result<PlaySession, VaultError> {
    let name = clean_name(name)?;
    let game = operations::find_game_by_name(conn, name)?
        .ok_or_else(|| OperationError::NotFound(name.to_string()))?;
    Ok(operations::insert_play(conn, game.id, &played_at)?)
}

/// All games, in the order they were added.
pub fn list_games(conn: &Connection) -> Result<Vec<Game>, VaultError> {
    Ok(queries::list_games(conn)?)
}

#[cfg(test)]
#[path = "tests/collection_tests.rs"]
mod tests;
