//! State endpoints: snapshot and consideration points.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::State;
use axum::Json;
use reconquista_core::{AppState, GivePointOutcome, SqliteStateRepository, StateService};

/// `GET /api/estado`: full application state.
pub async fn get_estado(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<AppState>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = StateService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let state = service.state()?;
    Ok(Json(ApiResponse::new(state, "Estado obtenido exitosamente")))
}

/// `POST /api/dar-punto`: add one consideration point.
pub async fn dar_punto(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<GivePointOutcome>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = StateService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let outcome = service.give_point()?;
    Ok(Json(ApiResponse::new(
        outcome,
        "Punto de consideración agregado exitosamente",
    )))
}
