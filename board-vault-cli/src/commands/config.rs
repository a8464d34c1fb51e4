use std::path::Path;

use board_vault_lib::settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Print the settings file path, its contents, and the database in use.
pub(crate) fn run_show_config(db_path: &Path) {
    let settings_path = settings::settings_path();
    log::info!(
        "{}",
        "Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Settings file: {}", settings_path.display());
    log::info!(
        "  Database:      {}{}",
        db_path.display(),
        if db_path.exists() { "" } else { " (not created yet)" },
    );

    match settings::load_settings_string() {
        Some(contents) if !contents.trim().is_empty() => {
            crate::log_blank();
            for line in contents.lines() {
                log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
            }
        }
        _ => log::info!("  (no settings saved)"),
    }
}

/// Persist a default database path in the settings file.
pub(crate) fn run_save_db_path(path: &Path) -> Result<(), CliError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    settings::save_database_path(Some(&absolute)).map_err(|e| {
        CliError::config(format!(
            "Failed to write {}: {}",
            settings::settings_path().display(),
            e
        ))
    })?;

    log::info!(
        "{} Default database set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        absolute.display(),
    );
    Ok(())
}
