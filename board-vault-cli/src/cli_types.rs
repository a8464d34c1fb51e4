//! CLI type definitions: flags and value enums.

use std::path::PathBuf;

use board_vault_catalog::SortKey;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "board-vault", version)]
#[command(about = "Track your board game collection and plays", long_about = None)]
pub(crate) struct Cli {
    /// List all games in your collection
    #[arg(long)]
    pub list_games: bool,

    /// Add a new game to your collection
    #[arg(long, value_name = "NAME")]
    pub add_new_game: Option<String>,

    /// Log a play of a game, timestamped now
    #[arg(long, value_name = "NAME")]
    pub play_game: Option<String>,

    /// Delete a game and its whole play history (asks for confirmation)
    #[arg(long, value_name = "NAME")]
    pub delete_game: Option<String>,

    /// Import plays from a CSV file (header row, then: name[,played_at])
    #[arg(long, value_name = "PATH")]
    pub import_csv: Option<PathBuf>,

    /// Show play statistics
    #[arg(long, visible_alias = "stats")]
    pub stat: bool,

    /// Ordering for --stat
    #[arg(long, value_enum, default_value_t = SortArg::Game, requires = "stat")]
    pub sort_by: SortArg,

    /// Print --stat output as JSON
    #[arg(long, requires = "stat")]
    pub json: bool,

    /// Skip the confirmation prompt for --delete-game
    #[arg(short, long)]
    pub yes: bool,

    /// Skip import rows with unrecognized dates instead of using the current time
    #[arg(long, requires = "import_csv")]
    pub strict_dates: bool,

    /// Path to the collection database (overrides settings.toml)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Show the settings file and the database path in use
    #[arg(long)]
    pub show_config: bool,

    /// Save a default database path to settings.toml
    #[arg(long, value_name = "PATH")]
    pub save_db_path: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    /// Whether any flag that needs the database was given.
    pub fn has_db_action(&self) -> bool {
        self.list_games
            || self.add_new_game.is_some()
            || self.play_game.is_some()
            || self.delete_game.is_some()
            || self.import_csv.is_some()
            || self.stat
    }
}

/// Sort keys accepted by `--sort-by`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    /// Game name, A to Z
    Game,
    /// Most played first
    Total,
    /// Most recently played first
    LastPlayed,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Game => SortKey::Game,
            SortArg::Total => SortKey::Total,
            SortArg::LastPlayed => SortKey::LastPlayed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stat_with_sort() {
        let cli = Cli::try_parse_from(["board-vault", "--stat", "--sort-by", "last-played"]).unwrap();
        assert!(cli.stat);
        assert_eq!(SortKey::from(cli.sort_by), SortKey::LastPlayed);
    }

    #[test]
    fn stats_alias_and_default_sort() {
        let cli = Cli::try_parse_from(["board-vault", "--stats"]).unwrap();
        assert!(cli.stat);
        assert_eq!(cli.sort_by, SortArg::Game);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["board-vault", "--stat", "--sort-by", "plays"]).is_err());
    }

    #[test]
    fn sort_by_requires_stat() {
        assert!(Cli::try_parse_from(["board-vault", "--sort-by", "total"]).is_err());
    }

    #[test]
    fn multiple_actions_allowed() {
        let cli = Cli::try_parse_from([
            "board-vault",
            "--add-new-game",
            "Catan",
            "--play-game",
            "Catan",
            "--stat",
        ])
        .unwrap();
        assert_eq!(cli.add_new_game.as_deref(), Some("Catan"));
        assert_eq!(cli.play_game.as_deref(), Some("Catan"));
        assert!(cli.has_db_action());
    }

    #[test]
    fn config_flags_need_no_database() {
        let cli = Cli::try_parse_from(["board-vault", "--show-config"]).unwrap();
        assert!(!cli.has_db_action());
    }

    #[test]
    fn sort_args_cover_every_key() {
        let keys: Vec<SortKey> = SortArg::value_variants().iter().map(|a| (*a).into()).collect();
        assert_eq!(keys, SortKey::ALL.to_vec());
    }
}
