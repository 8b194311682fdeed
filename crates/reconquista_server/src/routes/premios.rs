//! Reward endpoints: listing and the star-funded claim.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::State;
use axum::Json;
use reconquista_core::{
    CatalogId, ClaimRewardOutcome, RewardService, RewardView, SqliteStateRepository,
};
use serde::Deserialize;

/// Body for `POST /api/reclamar-premio`.
#[derive(Debug, Deserialize)]
pub struct ReclamarPremioRequest {
    pub reward_id: CatalogId,
}

/// `GET /api/premios`: every reward with its claimed flag, cheapest first.
pub async fn list_premios(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<Vec<RewardView>>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = RewardService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let rewards = service.list_rewards()?;
    let message = format!("Se encontraron {} premios", rewards.len());
    Ok(Json(ApiResponse::new(rewards, message)))
}

/// `POST /api/reclamar-premio`: spend stars on a reward, once.
pub async fn reclamar_premio(
    State(ctx): State<AppContext>,
    Json(request): Json<ReclamarPremioRequest>,
) -> Result<Json<ApiResponse<ClaimRewardOutcome>>, ApiError> {
    let conn = ctx.db.lock().await;
    let service = RewardService::new(SqliteStateRepository::new(&conn), ctx.catalog.as_ref());
    let outcome = service.claim_reward(request.reward_id)?;
    let message = format!("¡Premio '{}' reclamado exitosamente!", outcome.reward.name);
    Ok(Json(ApiResponse::new(outcome, message)))
}
