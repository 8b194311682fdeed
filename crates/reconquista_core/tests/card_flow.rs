use reconquista_core::db::open_db_in_memory;
use reconquista_core::{
    CardService, Catalog, ServiceError, SqliteStateRepository, StateRepository,
};

fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "title": "Carta uno", "content": "texto uno", "star_reward": 5},
            {"id": 2, "title": "Carta dos", "content": "texto dos", "star_reward": 10}
        ]"#,
        "[]",
        "[]",
        "[]",
        "[]",
    )
    .unwrap()
}

#[test]
fn first_read_awards_the_card_star_reward() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = CardService::new(SqliteStateRepository::new(&conn), &catalog);

    let outcome = service.read_card(1).unwrap();
    assert!(!outcome.already_read);
    assert_eq!(outcome.stars_awarded, 5);
    assert_eq!(outcome.state.stars, 5);
    assert_eq!(outcome.state.read_card_ids, vec![1]);
}

#[test]
fn repeat_read_is_a_noop_with_already_read_flag() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = CardService::new(SqliteStateRepository::new(&conn), &catalog);

    service.read_card(1).unwrap();
    let repeat = service.read_card(1).unwrap();

    assert!(repeat.already_read);
    assert_eq!(repeat.stars_awarded, 0);
    assert_eq!(repeat.state.stars, 5);
    assert_eq!(repeat.state.read_card_ids, vec![1]);
}

#[test]
fn unknown_card_is_not_found_and_leaves_state_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let repo = SqliteStateRepository::new(&conn);
    let service = CardService::new(SqliteStateRepository::new(&conn), &catalog);

    let err = service.read_card(99).unwrap_err();
    assert!(matches!(err, ServiceError::CardNotFound(99)));

    let state = repo.load_state().unwrap();
    assert_eq!(state.stars, 0);
    assert!(state.read_card_ids.is_empty());
}

#[test]
fn listing_returns_full_content_with_read_flags() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = CardService::new(SqliteStateRepository::new(&conn), &catalog);

    service.read_card(2).unwrap();
    let cards = service.list_cards().unwrap();

    assert_eq!(cards.len(), 2);
    assert!(!cards[0].read);
    assert!(cards[1].read);
    // Unread cards still expose their full content.
    assert_eq!(cards[0].content, "texto uno");
}
