use chrono::Utc;
use reconquista_core::db::open_db_in_memory;
use reconquista_core::{AppState, RepoError, SqliteStateRepository, StateRepository};

#[test]
fn first_load_creates_default_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let state = repo.load_state().unwrap();
    assert_eq!(state, AppState::default());

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM app_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn save_and_load_roundtrip_preserves_everything() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let mut state = repo.load_state().unwrap();
    state.consideration_points = 7;
    state.add_stars(12);
    assert!(state.mark_card_read(3));
    assert!(state.mark_song_listened(2));
    assert!(state.add_unlocked_reason(1));
    state.record_claim(4, Utc::now());
    repo.save_state(&state).unwrap();

    let loaded = repo.load_state().unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.claimed_rewards.len(), 1);
    assert_eq!(loaded.claimed_rewards[0].reward_id, 4);
}

#[test]
fn repeated_loads_reuse_the_singleton_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.load_state().unwrap();
    repo.load_state().unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM app_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn save_without_prior_load_creates_the_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let mut state = AppState::default();
    state.add_stars(3);
    repo.save_state(&state).unwrap();

    let loaded = repo.load_state().unwrap();
    assert_eq!(loaded.stars, 3);
}

#[test]
fn corrupt_json_column_surfaces_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.load_state().unwrap();
    conn.execute("UPDATE app_state SET read_card_ids = 'not json';", [])
        .unwrap();

    let err = repo.load_state().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
