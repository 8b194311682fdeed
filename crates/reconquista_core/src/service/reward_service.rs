//! Reward use-case service.
//!
//! # Invariants
//! - A reward can be claimed at most once.
//! - Claiming requires `stars >= star_cost` at claim time; failed claims
//!   leave the state untouched.
//! - Claim records are append-only and timestamped.

use crate::catalog::{Catalog, CatalogId, Reward};
use crate::model::state::AppState;
use crate::repo::state_repo::StateRepository;
use crate::service::{ServiceError, ServiceResult};
use chrono::Utc;
use log::info;
use serde::Serialize;

/// Reward joined with its claimed flag for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardView {
    pub id: CatalogId,
    pub name: String,
    pub emoji: String,
    pub star_cost: i64,
    pub claimed: bool,
}

/// Outcome of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRewardOutcome {
    pub reward: Reward,
    pub state: AppState,
}

/// Use-case service for reward listings and claims.
pub struct RewardService<'cat, R: StateRepository> {
    repo: R,
    catalog: &'cat Catalog,
}

impl<'cat, R: StateRepository> RewardService<'cat, R> {
    pub fn new(repo: R, catalog: &'cat Catalog) -> Self {
        Self { repo, catalog }
    }

    /// Every reward ordered by cost, joined with the claimed flag.
    pub fn list_rewards(&self) -> ServiceResult<Vec<RewardView>> {
        let state = self.repo.load_state()?;
        Ok(self
            .catalog
            .rewards()
            .iter()
            .map(|reward| RewardView {
                id: reward.id,
                name: reward.name.clone(),
                emoji: reward.emoji.clone(),
                star_cost: reward.star_cost,
                claimed: state.is_reward_claimed(reward.id),
            })
            .collect())
    }

    /// Claims a reward, deducting its cost and appending a claim record.
    ///
    /// # Contract
    /// - Unknown ids fail with `ServiceError::RewardNotFound`.
    /// - A second claim fails with `ServiceError::AlreadyClaimed`.
    /// - `stars < star_cost` fails with `ServiceError::InsufficientStars`.
    pub fn claim_reward(&self, reward_id: CatalogId) -> ServiceResult<ClaimRewardOutcome> {
        let reward = self
            .catalog
            .reward(reward_id)
            .ok_or(ServiceError::RewardNotFound(reward_id))?;

        let mut state = self.repo.load_state()?;
        if state.is_reward_claimed(reward_id) {
            return Err(ServiceError::AlreadyClaimed(reward_id));
        }
        if !state.spend_stars(reward.star_cost) {
            return Err(ServiceError::InsufficientStars {
                required: reward.star_cost,
                available: state.stars,
            });
        }

        state.record_claim(reward_id, Utc::now());
        self.repo.save_state(&state)?;
        info!(
            "event=claim_reward module=service status=ok reward_id={} star_cost={} stars={}",
            reward_id, reward.star_cost, state.stars
        );

        Ok(ClaimRewardOutcome {
            reward: reward.clone(),
            state,
        })
    }
}
