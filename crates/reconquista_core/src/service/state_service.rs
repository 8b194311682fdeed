//! Progress use-case service: points, reason unlocks and game bonuses.
//!
//! # Responsibility
//! - Run the point/star counters through whole-state read-modify-write.
//! - Derive reason visibility from the points counter and the catalog.
//!
//! # Invariants
//! - Listing unlocked reasons is a pure function of
//!   `consideration_points` vs each reason's threshold.
//! - `unlocked_reason_ids` only ever grows, and records each threshold
//!   crossing exactly once.

use crate::catalog::{Catalog, Reason};
use crate::model::state::AppState;
use crate::repo::state_repo::StateRepository;
use crate::service::ServiceResult;
use log::info;
use serde::Serialize;

/// Points granted per `give_point` call.
pub const POINT_INCREMENT: i64 = 1;
/// Stars granted for completing any interactive game.
pub const GAME_COMPLETION_BONUS: i64 = 15;

/// Outcome of a `give_point` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GivePointOutcome {
    pub state: AppState,
    /// Reasons whose threshold was crossed by this increment.
    pub newly_unlocked_reasons: Vec<Reason>,
}

/// Use-case service for the shared progress counters.
pub struct StateService<'cat, R: StateRepository> {
    repo: R,
    catalog: &'cat Catalog,
}

impl<'cat, R: StateRepository> StateService<'cat, R> {
    pub fn new(repo: R, catalog: &'cat Catalog) -> Self {
        Self { repo, catalog }
    }

    /// Returns the current application state.
    pub fn state(&self) -> ServiceResult<AppState> {
        Ok(self.repo.load_state()?)
    }

    /// Adds one consideration point and reconciles reason unlocks.
    ///
    /// # Contract
    /// - Returns the updated state plus the reasons newly unlocked by this
    ///   call, ordered by threshold.
    pub fn give_point(&self) -> ServiceResult<GivePointOutcome> {
        let mut state = self.repo.load_state()?;
        state.consideration_points += POINT_INCREMENT;

        let mut newly_unlocked_reasons = Vec::new();
        for reason in self.catalog.reasons() {
            if reason.unlock_threshold <= state.consideration_points
                && state.add_unlocked_reason(reason.id)
            {
                newly_unlocked_reasons.push(reason.clone());
            }
        }

        self.repo.save_state(&state)?;
        info!(
            "event=give_point module=service status=ok points={} newly_unlocked={}",
            state.consideration_points,
            newly_unlocked_reasons.len()
        );

        Ok(GivePointOutcome {
            state,
            newly_unlocked_reasons,
        })
    }

    /// Credits the unconditional game-completion star bonus.
    pub fn complete_game(&self) -> ServiceResult<AppState> {
        let mut state = self.repo.load_state()?;
        state.add_stars(GAME_COMPLETION_BONUS);
        self.repo.save_state(&state)?;
        info!(
            "event=complete_game module=service status=ok stars={}",
            state.stars
        );
        Ok(state)
    }

    /// Reasons visible at the current points total, ordered by threshold.
    pub fn unlocked_reasons(&self) -> ServiceResult<Vec<Reason>> {
        let state = self.repo.load_state()?;
        Ok(self
            .catalog
            .reasons()
            .iter()
            .filter(|reason| reason.unlock_threshold <= state.consideration_points)
            .cloned()
            .collect())
    }
}
