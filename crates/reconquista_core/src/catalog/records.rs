//! Catalog record shapes as stored in the bundled fixtures.

use super::CatalogId;
use serde::{Deserialize, Serialize};

/// One romantic letter. Reading it the first time pays `star_reward`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CatalogId,
    pub title: String,
    pub content: String,
    pub star_reward: i64,
}

/// Persuasive text unlocked once `consideration_points` reaches
/// `unlock_threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub id: CatalogId,
    pub category: String,
    pub text: String,
    pub emoji: String,
    pub unlock_threshold: i64,
}

/// Redeemable item; claiming deducts `star_cost` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: CatalogId,
    pub name: String,
    pub emoji: String,
    pub star_cost: i64,
}

/// Shared song; the first listen pays a fixed star bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: CatalogId,
    pub title: String,
    pub artist: String,
    pub url: String,
}

/// Short phrase served stateless, optionally filtered by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: CatalogId,
    pub category: String,
    pub text: String,
    pub emoji: String,
}
