//! Data model types for the collection: games, play sessions and the
//! derived per-game statistics.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::CatalogError;

// ── Game ────────────────────────────────────────────────────────────────────

/// A named entry in the collection. Names are unique and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
}

// ── Play Session ────────────────────────────────────────────────────────────

/// One recorded play of a game. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    pub id: i64,
    pub game_id: i64,
    pub played_at: NaiveDateTime,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Aggregated play history for one game. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub name: String,
    pub total_plays: u64,
    /// Plays inside the trailing recency window (three months).
    pub recent_plays: u64,
    /// `None` when the game has never been played.
    pub last_played: Option<NaiveDateTime>,
}

/// Ordering applied to a statistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name ascending.
    #[default]
    Game,
    /// Total plays descending, then name ascending.
    Total,
    /// Most recent play first; never-played games last, by name.
    LastPlayed,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Game, SortKey::Total, SortKey::LastPlayed];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Game => "game",
            SortKey::Total => "total",
            SortKey::LastPlayed => "last-played",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidSortKey(s.to_string()))
    }
}
