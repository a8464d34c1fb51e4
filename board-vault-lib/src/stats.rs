//! Play statistics: per-game totals, recent activity, and report ordering.
//!
//! Statistics are derived on every call from the play history; nothing is
//! cached or stored.

use board_vault_catalog::{GameStats, SortKey, now_local};
use board_vault_db::{Connection, queries};
use chrono::{Months, NaiveDateTime};
use serde::Serialize;

use crate::error::VaultError;

/// Length of the trailing "recent activity" window.
pub const RECENT_MONTHS: u32 = 3;

/// Widest star bar rendered by [`star_bar`].
const MAX_STARS: u64 = 10;

/// Start of the recency window ending at `now`.
///
/// Calendar months: 31 May minus three months is 28/29 February.
pub fn recent_cutoff(now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_months(Months::new(RECENT_MONTHS))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Compute statistics for every game, ordered by `sort_key`.
pub fn compute_stats(conn: &Connection, sort_key: SortKey) -> Result<Vec<GameStats>, VaultError> {
    compute_stats_at(conn, sort_key, now_local())
}

/// Compute statistics relative to an explicit "current moment".
pub fn compute_stats_at(
    conn: &Connection,
    sort_key: SortKey,
    now: NaiveDateTime,
) -> Result<Vec<GameStats>, VaultError> {
    let since = recent_cutoff(now);
    let mut stats: Vec<GameStats> = queries::game_play_aggregates(conn, &since)?
        .into_iter()
        .map(|agg| GameStats {
            name: agg.name,
            total_plays: agg.total_plays,
            recent_plays: agg.plays_since,
            last_played: agg.last_played,
        })
        .collect();

    sort_stats(&mut stats, sort_key);
    Ok(stats)
}

/// Order statistics rows. Every key falls back to name ascending on ties.
pub fn sort_stats(stats: &mut [GameStats], sort_key: SortKey) {
    match sort_key {
        SortKey::Game => stats.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Total => stats.sort_by(|a, b| {
            b.total_plays
                .cmp(&a.total_plays)
                .then_with(|| a.name.cmp(&b.name))
        }),
        // `None < Some(_)`, so reversing the comparison puts never-played last
        SortKey::LastPlayed => stats.sort_by(|a, b| {
            b.last_played
                .cmp(&a.last_played)
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
}

/// Statistics rows plus the figures needed to render them.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub sort_key: SortKey,
    pub generated_at: NaiveDateTime,
    pub recent_since: NaiveDateTime,
    pub games: Vec<GameStats>,
    pub max_total: u64,
    pub max_recent: u64,
}

impl StatsReport {
    pub fn total_plays(&self) -> u64 {
        self.games.iter().map(|g| g.total_plays).sum()
    }

    pub fn played_games(&self) -> usize {
        self.games.iter().filter(|g| g.total_plays > 0).count()
    }
}

pub fn stats_report(conn: &Connection, sort_key: SortKey) -> Result<StatsReport, VaultError> {
    stats_report_at(conn, sort_key, now_local())
}

pub fn stats_report_at(
    conn: &Connection,
    sort_key: SortKey,
    now: NaiveDateTime,
) -> Result<StatsReport, VaultError> {
    let games = compute_stats_at(conn, sort_key, now)?;
    let max_total = games.iter().map(|g| g.total_plays).max().unwrap_or(0);
    let max_recent = games.iter().map(|g| g.recent_plays).max().unwrap_or(0);
    Ok(StatsReport {
        sort_key,
        generated_at: now,
        recent_since: recent_cutoff(now),
        games,
        max_total,
        max_recent,
    })
}

/// Render `value` as up to ten stars, proportional to `max`.
///
/// Zero stars (including `max == 0`) renders as `-`.
pub fn star_bar(value: u64, max: u64) -> String {
    if max == 0 {
        return "-".to_string();
    }
    // Round half up without going through floats
    let stars = (value.min(max) * MAX_STARS * 2 + max) / (max * 2);
    if stars == 0 {
        "-".to_string()
    } else {
        "\u{2605}".repeat(stars as usize)
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
