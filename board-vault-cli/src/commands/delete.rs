use std::io::{BufRead, Write};

use board_vault_db::{Connection, queries};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::handle_vault_error;

/// Delete a game after confirming with the user (unless `assume_yes`).
pub(crate) fn run_delete_game(conn: &Connection, name: &str, assume_yes: bool) -> Result<(), CliError> {
    let game = board_vault_db::find_game_by_name(conn, name.trim())
        .map_err(|e| CliError::database(format!("Failed to look up '{}': {}", name, e)))?;

    // Unknown game: let the collection layer produce the usual warning
    let Some(game) = game else {
        return match board_vault_lib::delete_game(conn, name) {
            Ok(_) => Ok(()),
            Err(e) => handle_vault_error(e),
        };
    };

    let plays = queries::plays_for_game(conn, game.id)
        .map_err(|e| CliError::database(format!("Failed to read play history: {}", e)))?
        .len();

    if !assume_yes {
        print!(
            "{} Delete '{}' and all {} recorded plays? [Y/n] ",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            game.name,
            plays,
        );
        std::io::stdout().flush()?;

        if !read_confirmation(std::io::stdin().lock())? {
            log::info!(
                "{} Deletion cancelled.",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            );
            return Ok(());
        }
    }

    match board_vault_lib::delete_game(conn, &game.name) {
        Ok(removed) => {
            log::info!(
                "{} Game '{}' deleted ({} plays removed).",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                game.name.if_supports_color(Stdout, |t| t.bold()),
                removed,
            );
            Ok(())
        }
        Err(e) => handle_vault_error(e),
    }
}

/// Read one answer line. End of input cancels.
fn read_confirmation(mut reader: impl BufRead) -> std::io::Result<bool> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(is_confirmation(&input))
}

/// `y`, `yes` or just Enter confirm; anything else cancels.
fn is_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
