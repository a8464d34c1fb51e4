//! SQLite persistence layer for the board game collection.
//!
//! Provides schema creation, CRUD operations, and the grouped aggregate
//! query behind the statistics report, backed by SQLite (via rusqlite with
//! the bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, delete_game, find_game_by_name, insert_game, insert_play, play_exists,
};
pub use queries::{
    PlayAggregate, count_games, count_plays, game_play_aggregates, list_games, plays_for_game,
};
pub use rusqlite::Connection;
pub use schema::{SchemaError, open_database, open_memory};
