use reconquista_core::db::open_db_in_memory;
use reconquista_core::{
    CardService, Catalog, RewardService, ServiceError, SqliteStateRepository,
};

fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id": 1, "title": "Carta uno", "content": "uno", "star_reward": 5},
            {"id": 2, "title": "Carta dos", "content": "dos", "star_reward": 5},
            {"id": 3, "title": "Carta tres", "content": "tres", "star_reward": 5}
        ]"#,
        "[]",
        r#"[
            {"id": 2, "name": "Noche de película", "emoji": "🎬", "star_cost": 10},
            {"id": 1, "name": "Desayuno", "emoji": "🥐", "star_cost": 5}
        ]"#,
        "[]",
        "[]",
    )
    .unwrap()
}

#[test]
fn claim_with_insufficient_stars_fails_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let cards = CardService::new(SqliteStateRepository::new(&conn), &catalog);
    let rewards = RewardService::new(SqliteStateRepository::new(&conn), &catalog);

    cards.read_card(1).unwrap(); // stars = 5

    let err = rewards.claim_reward(2).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InsufficientStars {
            required: 10,
            available: 5
        }
    ));

    let listed = rewards.list_rewards().unwrap();
    assert!(listed.iter().all(|reward| !reward.claimed));
}

#[test]
fn claim_succeeds_once_stars_cover_the_cost() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let cards = CardService::new(SqliteStateRepository::new(&conn), &catalog);
    let rewards = RewardService::new(SqliteStateRepository::new(&conn), &catalog);

    cards.read_card(1).unwrap();
    assert!(matches!(
        rewards.claim_reward(2),
        Err(ServiceError::InsufficientStars { .. })
    ));

    cards.read_card(2).unwrap();
    cards.read_card(3).unwrap(); // stars = 15

    let outcome = rewards.claim_reward(2).unwrap();
    assert_eq!(outcome.reward.id, 2);
    assert_eq!(outcome.state.stars, 5);
    assert_eq!(outcome.state.claimed_rewards.len(), 1);
    assert_eq!(outcome.state.claimed_rewards[0].reward_id, 2);
}

#[test]
fn second_claim_of_the_same_reward_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let cards = CardService::new(SqliteStateRepository::new(&conn), &catalog);
    let rewards = RewardService::new(SqliteStateRepository::new(&conn), &catalog);

    cards.read_card(1).unwrap();
    cards.read_card(2).unwrap();
    cards.read_card(3).unwrap(); // stars = 15

    rewards.claim_reward(1).unwrap();
    let err = rewards.claim_reward(1).unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyClaimed(1)));

    let listed = rewards.list_rewards().unwrap();
    assert!(listed.iter().any(|reward| reward.id == 1 && reward.claimed));
}

#[test]
fn unknown_reward_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let rewards = RewardService::new(SqliteStateRepository::new(&conn), &catalog);

    let err = rewards.claim_reward(42).unwrap_err();
    assert!(matches!(err, ServiceError::RewardNotFound(42)));
}

#[test]
fn listing_is_ordered_by_cost_with_claimed_flags() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let cards = CardService::new(SqliteStateRepository::new(&conn), &catalog);
    let rewards = RewardService::new(SqliteStateRepository::new(&conn), &catalog);

    cards.read_card(1).unwrap(); // stars = 5
    rewards.claim_reward(1).unwrap();

    let listed = rewards.list_rewards().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, 1);
    assert_eq!(listed[0].star_cost, 5);
    assert!(listed[0].claimed);
    assert_eq!(listed[1].id, 2);
    assert!(!listed[1].claimed);
}
