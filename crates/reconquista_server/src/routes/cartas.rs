//! Card endpoints: listing and the one-time read bonus.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::{Path, State};
use axum::Json;
use reconquista_core::{CardService, CardView, CatalogId, ReadCardOutcome, SqliteStateRepository};

/// `GET /api/cartas`: every card with its read flag.
pub async fn list_cartas(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<Vec<CardView>>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = CardService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let cards = service.list_cards()?;
    let message = format!("Se encontraron {} cartas", cards.len());
    Ok(Json(ApiResponse::new(cards, message)))
}

/// `POST /api/leer-carta/{carta_id}`: mark a card as read.
pub async fn leer_carta(
    State(ctx): State<AppContext>,
    Path(carta_id): Path<CatalogId>,
) -> Result<Json<ApiResponse<ReadCardOutcome>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = CardService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let outcome = service.read_card(carta_id)?;
    let message = if outcome.already_read {
        "Esta carta ya fue leída anteriormente".to_string()
    } else {
        format!("Ganaste {} estrellas", outcome.stars_awarded)
    };
    Ok(Json(ApiResponse::new(outcome, message)))
}
