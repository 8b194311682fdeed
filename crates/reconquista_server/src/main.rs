//! Server entry point.
//!
//! Startup order matters: configuration, then logging, then catalog
//! (fatal on corruption), then database (migrations applied on open),
//! then the listener.

use log::{error, info};
use reconquista_core::db::open_db;
use reconquista_core::{init_logging, Catalog, SqliteStateRepository, StateRepository};
use reconquista_server::{build_router, AppContext, ServerConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("logging setup failed: {err}");
        return ExitCode::FAILURE;
    }

    let catalog = match Catalog::load_bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("event=startup module=server status=error error_code=catalog_corrupt error={err}");
            return ExitCode::FAILURE;
        }
    };

    let conn = match open_db(&config.database_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=startup module=server status=error error_code=db_unavailable error={err}");
            return ExitCode::FAILURE;
        }
    };

    // Materialize the singleton row up front so the first request never
    // pays for it, and log the resumed progress.
    match SqliteStateRepository::new(&conn).load_state() {
        Ok(state) => info!(
            "event=startup module=server status=ok points={} stars={} claimed_rewards={}",
            state.consideration_points,
            state.stars,
            state.claimed_rewards.len()
        ),
        Err(err) => {
            error!("event=startup module=server status=error error_code=state_load_failed error={err}");
            return ExitCode::FAILURE;
        }
    }

    let router = build_router(AppContext::new(conn, catalog));

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("event=startup module=server status=error error_code=bind_failed addr={addr} error={err}");
            return ExitCode::FAILURE;
        }
    };

    info!("event=server_start module=server status=ok addr={addr}");
    if let Err(err) = axum::serve(listener, router).await {
        error!("event=server_stop module=server status=error error={err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
