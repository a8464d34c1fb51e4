use super::*;

use board_vault_catalog::parse_timestamp;
use board_vault_db::open_memory;

use crate::collection::{add_game, delete_game, log_play_at};

fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

fn now() -> NaiveDateTime {
    ts("2024-06-15 12:00:00")
}

fn names(stats: &[GameStats]) -> Vec<&str> {
    stats.iter().map(|s| s.name.as_str()).collect()
}

/// Azul: 1 old play. Catan: 3 plays, 2 recent. Risk: never played.
/// Wingspan: 1 recent play, newest overall. Brass: 3 plays, 1 recent.
fn setup() -> Connection {
    let conn = open_memory().unwrap();
    for name in ["Risk", "Catan", "Azul", "Wingspan", "Brass"] {
        add_game(&conn, name).unwrap();
    }
    log_play_at(&conn, "Azul", ts("2023-12-24 15:00:00")).unwrap();
    log_play_at(&conn, "Catan", ts("2023-06-01 19:00:00")).unwrap();
    log_play_at(&conn, "Catan", ts("2024-04-10 20:00:00")).unwrap();
    log_play_at(&conn, "Catan", ts("2024-05-01 18:30:00")).unwrap();
    log_play_at(&conn, "Wingspan", ts("2024-06-14 21:00:00")).unwrap();
    log_play_at(&conn, "Brass", ts("2022-01-01 10:00:00")).unwrap();
    log_play_at(&conn, "Brass", ts("2023-01-01 10:00:00")).unwrap();
    log_play_at(&conn, "Brass", ts("2024-03-20 10:00:00")).unwrap();
    conn
}

#[test]
fn empty_collection_yields_empty_report() {
    let conn = open_memory().unwrap();
    for key in SortKey::ALL {
        assert!(compute_stats_at(&conn, key, now()).unwrap().is_empty());
    }
}

#[test]
fn unplayed_games_have_zero_and_no_date() {
    let conn = setup();
    let stats = compute_stats_at(&conn, SortKey::Game, now()).unwrap();
    let risk = stats.iter().find(|s| s.name == "Risk").unwrap();
    assert_eq!(risk.total_plays, 0);
    assert_eq!(risk.recent_plays, 0);
    assert_eq!(risk.last_played, None);
}

#[test]
fn sort_by_game_is_name_ascending() {
    let conn = setup();
    let stats = compute_stats_at(&conn, SortKey::Game, now()).unwrap();
    assert_eq!(names(&stats), vec!["Azul", "Brass", "Catan", "Risk", "Wingspan"]);
}

#[test]
fn sort_by_total_breaks_ties_by_name() {
    let conn = setup();
    let stats = compute_stats_at(&conn, SortKey::Total, now()).unwrap();
    assert_eq!(names(&stats), vec!["Brass", "Catan", "Azul", "Wingspan", "Risk"]);
}

#[test]
fn sort_by_last_played_puts_never_played_last() {
    let conn = setup();
    add_game(&conn, "Agricola").unwrap();
    let stats = compute_stats_at(&conn, SortKey::LastPlayed, now()).unwrap();
    assert_eq!(
        names(&stats),
        vec!["Wingspan", "Catan", "Brass", "Azul", "Agricola", "Risk"]
    );
}

#[test]
fn recent_plays_use_three_month_window() {
    let conn = setup();
    let stats = compute_stats_at(&conn, SortKey::Game, now()).unwrap();
    let recent = |name: &str| stats.iter().find(|s| s.name == name).unwrap().recent_plays;

    // Window starts 2024-03-15 12:00:00
    assert_eq!(recent("Catan"), 2);
    assert_eq!(recent("Brass"), 1);
    assert_eq!(recent("Wingspan"), 1);
    assert_eq!(recent("Azul"), 0);
}

#[test]
fn recent_cutoff_is_calendar_months() {
    assert_eq!(recent_cutoff(now()), ts("2024-03-15 12:00:00"));
    assert_eq!(
        recent_cutoff(ts("2024-05-31 08:00:00")),
        ts("2024-02-29 08:00:00")
    );
}

#[test]
fn two_plays_scenario() {
    let conn = open_memory().unwrap();
    add_game(&conn, "Catan").unwrap();
    log_play_at(&conn, "Catan", ts("2024-06-01 19:00:00")).unwrap();
    log_play_at(&conn, "Catan", ts("2024-06-02 19:00:00")).unwrap();

    let stats = compute_stats_at(&conn, SortKey::Total, now()).unwrap();
    assert_eq!(
        stats,
        vec![GameStats {
            name: "Catan".to_string(),
            total_plays: 2,
            recent_plays: 2,
            last_played: Some(ts("2024-06-02 19:00:00")),
        }]
    );
}

#[test]
fn deleted_game_disappears_from_stats() {
    let conn = setup();
    delete_game(&conn, "Catan").unwrap();
    let stats = compute_stats_at(&conn, SortKey::Total, now()).unwrap();
    assert!(stats.iter().all(|s| s.name != "Catan"));
    assert_eq!(stats.len(), 4);
}

#[test]
fn stats_read_t_separated_history() {
    let conn = open_memory().unwrap();
    add_game(&conn, "Chess").unwrap();
    conn.execute(
        "INSERT INTO game_flow (game_id, played_at)
         SELECT id, '2024-03-15T08:00:00' FROM games WHERE name = 'Chess'",
        [],
    )
    .unwrap();
    log_play_at(&conn, "Chess", ts("2024-03-15 20:00:00")).unwrap();

    let stats = compute_stats_at(&conn, SortKey::Game, now()).unwrap();
    assert_eq!(stats[0].total_plays, 2);
    assert_eq!(stats[0].recent_plays, 1);
    assert_eq!(stats[0].last_played, Some(ts("2024-03-15 20:00:00")));
}

#[test]
fn report_carries_maxima() {
    let conn = setup();
    let report = stats_report_at(&conn, SortKey::Total, now()).unwrap();
    assert_eq!(report.max_total, 3);
    assert_eq!(report.max_recent, 2);
    assert_eq!(report.total_plays(), 8);
    assert_eq!(report.played_games(), 4);
    assert_eq!(report.recent_since, ts("2024-03-15 12:00:00"));
}

#[test]
fn sort_stats_in_place() {
    let mut stats = vec![
        GameStats {
            name: "b".to_string(),
            total_plays: 1,
            recent_plays: 0,
            last_played: None,
        },
        GameStats {
            name: "a".to_string(),
            total_plays: 1,
            recent_plays: 0,
            last_played: None,
        },
    ];
    sort_stats(&mut stats, SortKey::Total);
    assert_eq!(names(&stats), vec!["a", "b"]);
    sort_stats(&mut stats, SortKey::LastPlayed);
    assert_eq!(names(&stats), vec!["a", "b"]);
}

#[test]
fn star_bar_scales_to_ten() {
    assert_eq!(star_bar(0, 0), "-");
    assert_eq!(star_bar(0, 5), "-");
    assert_eq!(star_bar(5, 5).chars().count(), 10);
    assert_eq!(star_bar(1, 3).chars().count(), 3);
    assert_eq!(star_bar(1, 4).chars().count(), 3);
    assert_eq!(star_bar(1, 40), "-");
    assert_eq!(star_bar(1, 100), "-");
}
