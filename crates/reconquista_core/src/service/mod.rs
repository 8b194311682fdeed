//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog lookups and whole-state read-modify-write cycles
//!   into the accessor operations the HTTP layer exposes.
//! - Keep the delivery layer decoupled from storage details.

use crate::catalog::CatalogId;
use crate::repo::state_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod card_service;
pub mod reward_service;
pub mod song_service;
pub mod state_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business-rule failures for accessor operations.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    CardNotFound(CatalogId),
    RewardNotFound(CatalogId),
    SongNotFound(CatalogId),
    AlreadyClaimed(CatalogId),
    InsufficientStars { required: i64, available: i64 },
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::CardNotFound(id) => write!(f, "card not found: {id}"),
            Self::RewardNotFound(id) => write!(f, "reward not found: {id}"),
            Self::SongNotFound(id) => write!(f, "song not found: {id}"),
            Self::AlreadyClaimed(id) => write!(f, "reward already claimed: {id}"),
            Self::InsufficientStars {
                required,
                available,
            } => write!(
                f,
                "insufficient stars: need {required}, have {available}"
            ),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
