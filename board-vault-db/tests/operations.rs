use board_vault_catalog::parse_timestamp;
use board_vault_db::*;

#[test]
fn insert_and_find_game() {
    let conn = open_memory().unwrap();
    let game = insert_game(&conn, "Catan").unwrap();
    assert_eq!(game.name, "Catan");

    let found = find_game_by_name(&conn, "Catan").unwrap().unwrap();
    assert_eq!(found, game);
}

#[test]
fn find_is_case_sensitive() {
    let conn = open_memory().unwrap();
    insert_game(&conn, "Catan").unwrap();
    assert_eq!(find_game_by_name(&conn, "catan").unwrap(), None);
}

#[test]
fn duplicate_name_rejected() {
    let conn = open_memory().unwrap();
    insert_game(&conn, "Catan").unwrap();

    let err = insert_game(&conn, "Catan").unwrap_err();
    assert!(matches!(err, OperationError::DuplicateGame(ref n) if n == "Catan"));
    assert_eq!(count_games(&conn).unwrap(), 1);
}

#[test]
fn insert_play_records_timestamp() {
    let conn = open_memory().unwrap();
    let game = insert_game(&conn, "Azul").unwrap();
    let at = parse_timestamp("2024-05-01 20:15:00").unwrap();

    let play = insert_play(&conn, game.id, &at).unwrap();
    assert_eq!(play.game_id, game.id);

    let plays = plays_for_game(&conn, game.id).unwrap();
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].played_at, at);
}

#[test]
fn insert_play_for_missing_game_fails() {
    let conn = open_memory().unwrap();
    let at = parse_timestamp("2024-05-01").unwrap();
    assert!(insert_play(&conn, 42, &at).is_err());
    assert_eq!(count_plays(&conn).unwrap(), 0);
}

#[test]
fn play_exists_matches_exact_moment() {
    let conn = open_memory().unwrap();
    let game = insert_game(&conn, "Azul").unwrap();
    let at = parse_timestamp("2024-05-01 20:15:00").unwrap();
    insert_play(&conn, game.id, &at).unwrap();

    assert!(play_exists(&conn, game.id, &at).unwrap());
    let later = parse_timestamp("2024-05-01 20:15:01").unwrap();
    assert!(!play_exists(&conn, game.id, &later).unwrap());
}

#[test]
fn play_exists_matches_t_separated_rows() {
    let conn = open_memory().unwrap();
    let game = insert_game(&conn, "Azul").unwrap();
    conn.execute(
        "INSERT INTO game_flow (game_id, played_at) VALUES (?1, '2024-03-15T08:00:00')",
        [game.id],
    )
    .unwrap();

    let at = parse_timestamp("2024-03-15 08:00:00").unwrap();
    assert!(play_exists(&conn, game.id, &at).unwrap());
}

#[test]
fn delete_game_cascades_plays() {
    let conn = open_memory().unwrap();
    let catan = insert_game(&conn, "Catan").unwrap();
    let risk = insert_game(&conn, "Risk").unwrap();
    let at = parse_timestamp("2024-01-01").unwrap();
    insert_play(&conn, catan.id, &at).unwrap();
    insert_play(&conn, catan.id, &at).unwrap();
    insert_play(&conn, risk.id, &at).unwrap();

    let removed = delete_game(&conn, "Catan").unwrap();
    assert_eq!(removed, 2);
    assert_eq!(find_game_by_name(&conn, "Catan").unwrap(), None);
    assert_eq!(count_plays(&conn).unwrap(), 1);
    assert_eq!(plays_for_game(&conn, risk.id).unwrap().len(), 1);
}

#[test]
fn delete_missing_game_is_not_found() {
    let conn = open_memory().unwrap();
    let err = delete_game(&conn, "Nope").unwrap_err();
    assert!(matches!(err, OperationError::NotFound(ref n) if n == "Nope"));
}
