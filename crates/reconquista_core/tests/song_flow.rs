use reconquista_core::db::open_db_in_memory;
use reconquista_core::service::song_service::SONG_LISTEN_REWARD;
use reconquista_core::{Catalog, ServiceError, SongService, SqliteStateRepository};

fn test_catalog() -> Catalog {
    Catalog::from_json(
        "[]",
        "[]",
        "[]",
        r#"[
            {"id": 1, "title": "Primer baile", "artist": "Los Recuerdos", "url": "https://music.example.com/1"},
            {"id": 2, "title": "Domingo lento", "artist": "Café Frío", "url": "https://music.example.com/2"}
        ]"#,
        "[]",
    )
    .unwrap()
}

#[test]
fn first_listen_awards_the_bonus_once() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = SongService::new(SqliteStateRepository::new(&conn), &catalog);

    let first = service.listen_song(1).unwrap();
    assert!(!first.already_listened);
    assert_eq!(first.stars_awarded, SONG_LISTEN_REWARD);
    assert_eq!(first.state.stars, SONG_LISTEN_REWARD);

    let repeat = service.listen_song(1).unwrap();
    assert!(repeat.already_listened);
    assert_eq!(repeat.stars_awarded, 0);
    assert_eq!(repeat.state.stars, SONG_LISTEN_REWARD);
}

#[test]
fn unknown_song_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = SongService::new(SqliteStateRepository::new(&conn), &catalog);

    let err = service.listen_song(9).unwrap_err();
    assert!(matches!(err, ServiceError::SongNotFound(9)));
}

#[test]
fn listing_joins_listened_flags() {
    let conn = open_db_in_memory().unwrap();
    let catalog = test_catalog();
    let service = SongService::new(SqliteStateRepository::new(&conn), &catalog);

    service.listen_song(2).unwrap();
    let songs = service.list_songs().unwrap();

    assert_eq!(songs.len(), 2);
    assert!(!songs[0].listened);
    assert!(songs[1].listened);
}
