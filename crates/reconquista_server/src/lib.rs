//! HTTP delivery layer for the Reconquista progress API.
//!
//! Exposes the core use-case services as a JSON REST surface. Kept as a
//! library so integration tests can drive the router directly.

pub mod config;
pub mod context;
pub mod error;
pub mod response;
pub mod routes;

pub use config::ServerConfig;
pub use context::AppContext;
pub use routes::build_router;
