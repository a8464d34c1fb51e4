//! Collection management and play statistics on top of the storage layer.
//!
//! Every operation takes the database connection as a parameter; there is
//! no shared global handle.

pub mod collection;
pub mod error;
pub mod settings;
pub mod stats;

pub use collection::{add_game, delete_game, list_games, log_play, log_play_at, open_collection};
pub use error::VaultError;
pub use stats::{
    RECENT_MONTHS, StatsReport, compute_stats, compute_stats_at, recent_cutoff, sort_stats,
    star_bar, stats_report, stats_report_at,
};
