use board_vault_db::open_memory;
use board_vault_db::schema::{CURRENT_VERSION, create_schema};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "games", "game_flow"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn open_database_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("vault.db");
    {
        let conn = board_vault_db::open_database(&path).unwrap();
        board_vault_db::insert_game(&conn, "Catan").unwrap();
    }
    assert!(path.exists());

    // Reopening keeps the data and does not re-run creation
    let conn = board_vault_db::open_database(&path).unwrap();
    assert_eq!(board_vault_db::count_games(&conn).unwrap(), 1);
}

#[test]
fn adopts_tables_without_version_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE games (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT UNIQUE NOT NULL);
             CREATE TABLE game_flow (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 game_id INTEGER NOT NULL,
                 played_at DATETIME NOT NULL,
                 FOREIGN KEY (game_id) REFERENCES games(id)
             );
             INSERT INTO games (name) VALUES ('Risk');",
        )
        .unwrap();
    }

    let conn = board_vault_db::open_database(&path).unwrap();
    assert!(board_vault_db::find_game_by_name(&conn, "Risk").unwrap().is_some());
    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
    drop(conn);

    // Adopted once, then reopened like any current database
    assert!(board_vault_db::open_database(&path).is_ok());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = board_vault_db::open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    let err = board_vault_db::open_database(&path).unwrap_err();
    assert!(matches!(
        err,
        board_vault_db::SchemaError::VersionMismatch { found, .. } if found == CURRENT_VERSION + 1
    ));
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.db");
    std::fs::write(&path, vec![b'x'; 4096]).unwrap();

    assert!(board_vault_db::open_database(&path).is_err());
}
