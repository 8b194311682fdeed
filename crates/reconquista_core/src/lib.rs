//! Core domain logic for the Reconquista progress API.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use catalog::{Card, Catalog, CatalogError, CatalogId, Phrase, Reason, Reward, Song};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::state::{AppState, ClaimedReward};
pub use repo::state_repo::{RepoError, RepoResult, SqliteStateRepository, StateRepository};
pub use service::card_service::{CardService, CardView, ReadCardOutcome};
pub use service::reward_service::{ClaimRewardOutcome, RewardService, RewardView};
pub use service::song_service::{ListenSongOutcome, SongService, SongView};
pub use service::state_service::{GivePointOutcome, StateService};
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
