//! Route table and service-level endpoints.
//!
//! One module per resource, mirroring the accessor services; this module
//! wires them together and serves the banner and health probes.

use crate::context::AppContext;
use crate::response::ApiResponse;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use reconquista_core::{SqliteStateRepository, StateRepository};
use serde::Serialize;
use serde_json::json;

pub mod canciones;
pub mod cartas;
pub mod estado;
pub mod frases;
pub mod juegos;
pub mod premios;
pub mod razones;

/// Builds the full application router.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(service_banner))
        .route("/health", get(health_check))
        .route("/api/estado", get(estado::get_estado))
        .route("/api/dar-punto", post(estado::dar_punto))
        .route("/api/cartas", get(cartas::list_cartas))
        .route("/api/leer-carta/{carta_id}", post(cartas::leer_carta))
        .route("/api/razones", get(razones::list_razones))
        .route("/api/premios", get(premios::list_premios))
        .route("/api/reclamar-premio", post(premios::reclamar_premio))
        .route("/api/completar-juego", post(juegos::completar_juego))
        .route("/api/canciones", get(canciones::list_canciones))
        .route(
            "/api/escuchar-cancion/{cancion_id}",
            post(canciones::escuchar_cancion),
        )
        .route("/api/frases", get(frases::list_frases))
        .route("/api/frases/aleatoria", get(frases::frase_aleatoria))
        .route("/api/frases/{frase_id}", get(frases::get_frase))
        .with_state(ctx)
}

async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Reconquista Romántica API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "endpoints": {
            "estado": "/api/estado",
            "dar_punto": "/api/dar-punto",
            "cartas": "/api/cartas",
            "leer_carta": "/api/leer-carta/{carta_id}",
            "razones": "/api/razones",
            "premios": "/api/premios",
            "reclamar_premio": "/api/reclamar-premio",
            "completar_juego": "/api/completar-juego",
            "canciones": "/api/canciones",
            "escuchar_cancion": "/api/escuchar-cancion/{cancion_id}",
            "frases": "/api/frases",
            "frase_aleatoria": "/api/frases/aleatoria"
        }
    }))
}

#[derive(Debug, Serialize)]
struct CatalogCounts {
    cards: usize,
    reasons: usize,
    rewards: usize,
    songs: usize,
    phrases: usize,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    database: &'static str,
    catalog: CatalogCounts,
}

async fn health_check(
    State(ctx): State<AppContext>,
) -> (StatusCode, Json<ApiResponse<HealthData>>) {
    let database_ok = {
        let conn = ctx.db.lock().await;
        SqliteStateRepository::new(&conn).load_state().is_ok()
    };

    let data = HealthData {
        status: if database_ok { "healthy" } else { "unhealthy" },
        database: if database_ok { "connected" } else { "error" },
        catalog: CatalogCounts {
            cards: ctx.catalog.cards().len(),
            reasons: ctx.catalog.reasons().len(),
            rewards: ctx.catalog.rewards().len(),
            songs: ctx.catalog.songs().len(),
            phrases: ctx.catalog.phrases().len(),
        },
    };

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let message = if database_ok {
        "Servicio operativo"
    } else {
        "Base de datos inaccesible"
    };
    (status, Json(ApiResponse::new(data, message)))
}
