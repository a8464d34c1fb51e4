use board_vault_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{format_played_at, handle_vault_error};

pub(crate) fn run_play_game(conn: &Connection, name: &str) -> Result<(), CliError> {
    match board_vault_lib::log_play(conn, name) {
        Ok(play) => {
            log::info!(
                "{} Logged a play of '{}' at {}.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                name.trim().if_supports_color(Stdout, |t| t.bold()),
                format_played_at(&play.played_at),
            );
            Ok(())
        }
        Err(e) => handle_vault_error(e),
    }
}
