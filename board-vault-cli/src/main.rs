//! board-vault CLI
//!
//! Command-line interface for tracking a board game collection and its plays.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::{CommandFactory, Parser};

use board_vault_lib::settings;

use cli_types::Cli;
pub(crate) use error::CliError;
pub(crate) use logger::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

/// Run every requested action in a fixed order against one connection.
fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(path) = &cli.save_db_path {
        commands::config::run_save_db_path(path)?;
    }

    let db_path = settings::resolve_database_path(cli.db.clone());

    if cli.show_config {
        commands::config::run_show_config(&db_path);
    }

    if !cli.has_db_action() {
        if !cli.show_config && cli.save_db_path.is_none() {
            Cli::command().print_help()?;
        }
        return Ok(());
    }

    let conn = board_vault_lib::open_collection(&db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })?;

    if cli.list_games {
        commands::list::run_list_games(&conn)?;
    }
    if let Some(name) = &cli.add_new_game {
        commands::add::run_add_game(&conn, name)?;
    }
    if let Some(name) = &cli.play_game {
        commands::play::run_play_game(&conn, name)?;
    }
    if let Some(name) = &cli.delete_game {
        commands::delete::run_delete_game(&conn, name, cli.yes)?;
    }
    if let Some(path) = &cli.import_csv {
        commands::import::run_import_csv(&conn, path, cli.strict_dates)?;
    }
    if cli.stat {
        commands::stats::run_stats(&conn, cli.sort_by.into(), cli.json)?;
    }

    Ok(())
}
