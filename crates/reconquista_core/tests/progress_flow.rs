use reconquista_core::db::open_db_in_memory;
use reconquista_core::service::state_service::GAME_COMPLETION_BONUS;
use reconquista_core::{Catalog, SqliteStateRepository, StateService};

fn test_catalog() -> Catalog {
    Catalog::from_json(
        "[]",
        r#"[
            {"id": 1, "category": "recuerdos", "text": "desde siempre", "emoji": "📖", "unlock_threshold": 0},
            {"id": 2, "category": "recuerdos", "text": "primer punto", "emoji": "☕", "unlock_threshold": 1},
            {"id": 3, "category": "futuro", "text": "tercer punto", "emoji": "✈️", "unlock_threshold": 3},
            {"id": 4, "category": "promesas", "text": "quinto punto", "emoji": "💍", "unlock_threshold": 5}
        ]"#,
        "[]",
        "[]",
        "[]",
    )
    .unwrap()
}

#[test]
fn zero_threshold_reasons_are_visible_from_the_start() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    let visible = service.unlocked_reasons().unwrap();
    let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn give_point_increments_and_reports_newly_crossed_reasons() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    let first = service.give_point().unwrap();
    assert_eq!(first.state.consideration_points, 1);
    // The zero-threshold reason and the threshold-1 reason both cross here.
    let ids: Vec<_> = first.newly_unlocked_reasons.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let second = service.give_point().unwrap();
    assert_eq!(second.state.consideration_points, 2);
    assert!(second.newly_unlocked_reasons.is_empty());
}

#[test]
fn boundary_equal_threshold_unlocks_exactly_at_the_threshold() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    service.give_point().unwrap();
    let at_two = service.give_point().unwrap();
    assert_eq!(at_two.state.consideration_points, 2);
    let visible: Vec<_> = service
        .unlocked_reasons()
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(visible, vec![1, 2]);

    let at_three = service.give_point().unwrap();
    let ids: Vec<_> = at_three
        .newly_unlocked_reasons
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![3]);
    let visible: Vec<_> = service
        .unlocked_reasons()
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(visible, vec![1, 2, 3]);
}

#[test]
fn unlocked_reasons_match_threshold_filter_for_every_point_total() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    for _ in 0..6 {
        let outcome = service.give_point().unwrap();
        let points = outcome.state.consideration_points;

        let expected: Vec<_> = catalog
            .reasons()
            .iter()
            .filter(|r| r.unlock_threshold <= points)
            .map(|r| r.id)
            .collect();
        let visible: Vec<_> = service
            .unlocked_reasons()
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(visible, expected, "mismatch at {points} points");
    }
}

#[test]
fn stored_unlocks_accumulate_without_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    for _ in 0..5 {
        service.give_point().unwrap();
    }

    let state = service.state().unwrap();
    assert_eq!(state.consideration_points, 5);
    assert_eq!(state.unlocked_reason_ids, vec![1, 2, 3, 4]);
}

#[test]
fn complete_game_credits_the_fixed_bonus_unconditionally() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = StateService::new(SqliteStateRepository::new(&conn), &catalog);

    let first = service.complete_game().unwrap();
    assert_eq!(first.stars, GAME_COMPLETION_BONUS);

    let second = service.complete_game().unwrap();
    assert_eq!(second.stars, GAME_COMPLETION_BONUS * 2);
}
