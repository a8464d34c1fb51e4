use board_vault_catalog::SortKey;
use board_vault_db::Connection;
use board_vault_lib::{RECENT_MONTHS, StatsReport, star_bar, stats_report};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{format_played_at, pad};

/// Show play statistics as a table, or as JSON on stdout.
pub(crate) fn run_stats(conn: &Connection, sort_key: SortKey, json: bool) -> Result<(), CliError> {
    let report = stats_report(conn, sort_key)
        .map_err(|e| CliError::database(format!("Failed to compute statistics: {}", e)))?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::other(format!("Failed to serialize statistics: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if report.games.is_empty() {
        log::info!("No games in your collection yet.");
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &StatsReport) {
    let recent_header = format!("Last {} Months", RECENT_MONTHS);
    let rows: Vec<[String; 4]> = report
        .games
        .iter()
        .map(|g| {
            [
                g.name.clone(),
                bar_cell(g.total_plays, report.max_total),
                bar_cell(g.recent_plays, report.max_recent),
                g.last_played
                    .as_ref()
                    .map(format_played_at)
                    .unwrap_or_else(|| "Never".to_string()),
            ]
        })
        .collect();

    let headers = ["Game", "Total Played", recent_header.as_str(), "Last Played"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    log::info!(
        "{} (sorted by {})",
        "Board Game Stats".if_supports_color(Stdout, |t| t.bold()),
        report.sort_key,
    );
    crate::log_blank();
    let header_line = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect::<Vec<_>>()
        .join("  ");
    let rule_line = widths
        .iter()
        .map(|w| "\u{2500}".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    log::info!("  {}", header_line.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  {}", rule_line);

    for [name, total, recent, last] in &rows {
        log::info!(
            "  {}  {}  {}  {}",
            pad(name, widths[0]).if_supports_color(Stdout, |t| t.cyan()),
            pad(total, widths[1]).if_supports_color(Stdout, |t| t.green()),
            pad(recent, widths[2]).if_supports_color(Stdout, |t| t.yellow()),
            pad(last, widths[3]).if_supports_color(Stdout, |t| t.magenta()),
        );
    }

    crate::log_blank();
    log::info!(
        "  {} games, {} played, {} plays in total",
        report.games.len(),
        report.played_games(),
        report.total_plays(),
    );
}

/// Star bar followed by the raw count, e.g. `★★★★★ 4`.
fn bar_cell(value: u64, max: u64) -> String {
    format!("{} {}", star_bar(value, max), value)
}
