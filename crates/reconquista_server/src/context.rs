//! Shared per-process state handed to every handler.

use reconquista_core::Catalog;
use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Application context cloned into each request handler.
///
/// The single SQLite connection sits behind an async mutex: a handler holds
/// the lock for its whole read-modify-write cycle, which serializes
/// concurrent mutations of the singleton state row.
#[derive(Clone)]
pub struct AppContext {
    pub db: Arc<Mutex<Connection>>,
    pub catalog: Arc<Catalog>,
}

impl AppContext {
    pub fn new(conn: Connection, catalog: Catalog) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            catalog: Arc::new(catalog),
        }
    }
}
