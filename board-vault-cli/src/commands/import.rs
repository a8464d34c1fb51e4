use std::path::Path;

use board_vault_db::Connection;
use board_vault_import::{ImportOptions, TimestampPolicy, import_rows, read_play_file};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Import plays from a CSV file and report the summary.
pub(crate) fn run_import_csv(conn: &Connection, path: &Path, strict_dates: bool) -> Result<(), CliError> {
    log::info!(
        "{} {}",
        "Importing".if_supports_color(Stdout, |t| t.bold()),
        path.display(),
    );

    let rows = read_play_file(path).map_err(|e| CliError::import(e.to_string()))?;

    let options = ImportOptions {
        timestamp_policy: if strict_dates {
            TimestampPolicy::Strict
        } else {
            TimestampPolicy::FallbackToNow
        },
    };

    let summary = import_rows(conn, &rows, &options)
        .map_err(|e| CliError::import(format!("{} (nothing was imported)", e)))?;

    log::info!(
        "{} Imported {} plays from '{}'.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.imported,
        path.display(),
    );
    log::info!("  Rows read:          {:>6}", rows.len());
    log::info!("  Plays imported:     {:>6}", summary.imported);
    log::info!("  New games:          {:>6}", summary.games_created);
    if summary.defaulted_timestamps > 0 {
        log::info!(
            "  Dated now:          {:>6} (unrecognized date/time)",
            summary.defaulted_timestamps,
        );
    }
    log::info!("  Skipped:            {:>6}", summary.skipped.len());

    if !summary.skipped.is_empty() {
        crate::log_blank();
        log::info!(
            "{}",
            "Skipped rows:".if_supports_color(Stdout, |t| t.yellow()),
        );
        for skipped in &summary.skipped {
            log::info!(
                "  line {:>4}: {} ({}{})",
                skipped.line,
                skipped.reason,
                skipped.row.game_name,
                skipped
                    .row
                    .played_at
                    .as_deref()
                    .map(|ts| format!(", {}", ts))
                    .unwrap_or_default(),
            );
        }
    }

    Ok(())
}
