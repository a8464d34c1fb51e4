//! Application settings: settings file location and database path resolution.
//!
//! The settings file is `~/.config/board-vault/settings.toml` (platform
//! config dir). The only key read today is `database.path`.

use std::io;
use std::path::{Path, PathBuf};

/// File name used when no database path is configured.
pub const DEFAULT_DB_NAME: &str = "board_vault.db";

/// Canonical path to the settings file: `~/.config/board-vault/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("board-vault").join("settings.toml")
}

/// Database location when neither the CLI nor the settings file names one.
pub fn default_database_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("board-vault").join(DEFAULT_DB_NAME),
        None => PathBuf::from(DEFAULT_DB_NAME),
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. `default_database_path()`
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_database_path_in(cli_override, &settings_path())
}

/// Same as [`resolve_database_path`] against an explicit settings file.
pub fn resolve_database_path_in(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path(settings) {
        log::debug!("Using database path from {}", settings.display());
        return p;
    }
    default_database_path()
}

/// Read `database.path` from a settings file, if set.
fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring unreadable settings file {}: {}", settings.display(), e);
            return None;
        }
    };
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    save_database_path_in(path, &settings_path())
}

/// Save (or clear) `database.path` in an explicit settings file.
///
/// Uses `toml::Value` for a surgical update so other keys are preserved.
pub fn save_database_path_in(path: Option<&Path>, settings: &Path) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [database] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
