//! Reason endpoint: only the unlocked ones are served.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::State;
use axum::Json;
use reconquista_core::{Reason, SqliteStateRepository, StateService};

/// `GET /api/razones`: reasons unlocked by the current points total.
pub async fn list_razones(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<Vec<Reason>>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = StateService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let reasons = service.unlocked_reasons()?;
    let message = if reasons.is_empty() {
        "No hay razones desbloqueadas aún".to_string()
    } else {
        format!("Se encontraron {} razones desbloqueadas", reasons.len())
    };
    Ok(Json(ApiResponse::new(reasons, message)))
}
