//! Game endpoint: the unconditional completion bonus.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::State;
use axum::Json;
use reconquista_core::service::state_service::GAME_COMPLETION_BONUS;
use reconquista_core::{AppState, SqliteStateRepository, StateService};

/// `POST /api/completar-juego`: credit the fixed star bonus.
pub async fn completar_juego(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<AppState>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = StateService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let state = service.complete_game()?;
    let message = format!("Ganaste {GAME_COMPLETION_BONUS} estrellas por jugar");
    Ok(Json(ApiResponse::new(state, message)))
}
