//! Phrase endpoints. Stateless: these read the catalog only and never
//! touch the store.

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::extract::{Path, Query, State};
use axum::Json;
use rand::seq::SliceRandom;
use reconquista_core::{CatalogId, Phrase};
use serde::Deserialize;

/// Optional category filter shared by the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct FraseQuery {
    pub categoria: Option<String>,
}

fn filtered_phrases<'cat>(
    ctx: &'cat AppContext,
    categoria: Option<&str>,
) -> Vec<&'cat Phrase> {
    ctx.catalog
        .phrases()
        .iter()
        .filter(|phrase| categoria.map_or(true, |wanted| phrase.category == wanted))
        .collect()
}

/// `GET /api/frases`: all phrases, optionally filtered by category.
pub async fn list_frases(
    State(ctx): State<AppContext>,
    Query(query): Query<FraseQuery>,
) -> Result<Json<ApiResponse<Vec<Phrase>>>, ApiError> {
    let phrases: Vec<Phrase> = filtered_phrases(&ctx, query.categoria.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let message = format!("Se encontraron {} frases", phrases.len());
    Ok(Json(ApiResponse::new(phrases, message)))
}

/// `GET /api/frases/aleatoria`: one random phrase.
pub async fn frase_aleatoria(
    State(ctx): State<AppContext>,
    Query(query): Query<FraseQuery>,
) -> Result<Json<ApiResponse<Phrase>>, ApiError> {
    let candidates = filtered_phrases(&ctx, query.categoria.as_deref());
    let phrase = candidates
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| match &query.categoria {
            Some(categoria) => ApiError::not_found(format!(
                "No hay frases disponibles en la categoría '{categoria}'"
            )),
            None => ApiError::not_found("No hay frases disponibles"),
        })?;
    Ok(Json(ApiResponse::new((*phrase).clone(), "Frase aleatoria")))
}

/// `GET /api/frases/{frase_id}`: one phrase by id.
pub async fn get_frase(
    State(ctx): State<AppContext>,
    Path(frase_id): Path<CatalogId>,
) -> Result<Json<ApiResponse<Phrase>>, ApiError> {
    let phrase = ctx
        .catalog
        .phrase(frase_id)
        .ok_or_else(|| ApiError::not_found(format!("Frase con ID {frase_id} no encontrada")))?;
    Ok(Json(ApiResponse::new(phrase.clone(), "Frase obtenida")))
}
