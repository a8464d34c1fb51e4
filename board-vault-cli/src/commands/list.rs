use board_vault_db::Connection;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_list_games(conn: &Connection) -> Result<(), CliError> {
    let games = board_vault_lib::list_games(conn)
        .map_err(|e| CliError::database(format!("Failed to list games: {}", e)))?;

    if games.is_empty() {
        log::info!("No games in your collection yet.");
        log::info!("Add one with 'board-vault --add-new-game NAME'.");
        return Ok(());
    }

    log::info!(
        "{}",
        "Your game collection:".if_supports_color(Stdout, |t| t.bold()),
    );
    for game in &games {
        log::info!(
            "  {:>4}  {}",
            game.id,
            game.name.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    crate::log_blank();
    log::info!("  {} games", games.len());

    Ok(())
}
