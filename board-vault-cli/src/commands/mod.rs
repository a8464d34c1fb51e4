pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod play;
pub(crate) mod stats;

use board_vault_lib::VaultError;
use chrono::NaiveDateTime;

use crate::CliError;

/// Report a failed collection operation.
///
/// Duplicate names, unknown games and blank names are the user's problem:
/// warn and carry on. Anything else is a storage failure and ends the run.
pub(crate) fn handle_vault_error(err: VaultError) -> Result<(), CliError> {
    if err.is_user_error() {
        log::warn!("{}", err);
        Ok(())
    } else {
        Err(CliError::database(err.to_string()))
    }
}

/// Format a play timestamp for display (minute precision).
pub(crate) fn format_played_at(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Pad `s` with spaces to `width` display columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
