use board_vault_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::handle_vault_error;

pub(crate) fn run_add_game(conn: &Connection, name: &str) -> Result<(), CliError> {
    match board_vault_lib::add_game(conn, name) {
        Ok(game) => {
            log::info!(
                "{} Game '{}' added to your collection.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                game.name.if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }
        Err(e) => handle_vault_error(e),
    }
}
