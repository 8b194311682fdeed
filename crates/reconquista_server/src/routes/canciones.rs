//! Song endpoints: listing and the first-listen bonus.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::{Path, State};
use axum::Json;
use reconquista_core::{
    CatalogId, ListenSongOutcome, SongService, SongView, SqliteStateRepository,
};

/// `GET /api/canciones`: every song with its listened flag.
pub async fn list_canciones(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<Vec<SongView>>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = SongService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let songs = service.list_songs()?;
    let message = format!("Se encontraron {} canciones", songs.len());
    Ok(Json(ApiResponse::new(songs, message)))
}

/// `POST /api/escuchar-cancion/{cancion_id}`: mark a song as listened.
pub async fn escuchar_cancion(
    State(ctx): State<AppContext>,
    Path(cancion_id): Path<CatalogId>,
) -> Result<Json<ApiResponse<ListenSongOutcome>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = SongService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let outcome = service.listen_song(cancion_id)?;
    let message = if outcome.already_listened {
        "Esta canción ya fue escuchada anteriormente".to_string()
    } else {
        format!("Ganaste {} estrella", outcome.stars_awarded)
    };
    Ok(Json(ApiResponse::new(outcome, message)))
}
