//! Application state record and its transition helpers.
//!
//! # Invariants
//! - `consideration_points` and `stars` are non-negative.
//! - The id membership lists never contain duplicates.
//! - `claimed_rewards` is append-only and keeps claim order.

use crate::catalog::CatalogId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One claimed reward with the moment it was redeemed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimedReward {
    pub reward_id: CatalogId,
    pub claimed_at: DateTime<Utc>,
}

/// Singleton progress record for the whole application.
///
/// Every accessor loads this record, applies one transition and writes the
/// whole record back. There are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Primary progress counter; gates reason unlocks.
    pub consideration_points: i64,
    /// Spendable currency earned via cards, songs and game bonuses.
    pub stars: i64,
    /// Reasons whose threshold was crossed at least once.
    pub unlocked_reason_ids: Vec<CatalogId>,
    /// Cards that have been opened; membership is permanent.
    pub read_card_ids: Vec<CatalogId>,
    /// Songs that have been played at least once.
    pub listened_song_ids: Vec<CatalogId>,
    /// Redeemed rewards in claim order.
    pub claimed_rewards: Vec<ClaimedReward>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            consideration_points: 0,
            stars: 0,
            unlocked_reason_ids: Vec::new(),
            read_card_ids: Vec::new(),
            listened_song_ids: Vec::new(),
            claimed_rewards: Vec::new(),
        }
    }
}

impl AppState {
    /// Adds stars to the current balance.
    pub fn add_stars(&mut self, amount: i64) {
        self.stars += amount;
    }

    /// Spends stars if the balance covers `amount`.
    ///
    /// Returns `false` and leaves the balance untouched when it does not.
    pub fn spend_stars(&mut self, amount: i64) -> bool {
        if self.stars < amount {
            return false;
        }
        self.stars -= amount;
        true
    }

    pub fn is_card_read(&self, card_id: CatalogId) -> bool {
        self.read_card_ids.contains(&card_id)
    }

    /// Marks a card as read. Returns `false` when it already was.
    pub fn mark_card_read(&mut self, card_id: CatalogId) -> bool {
        if self.is_card_read(card_id) {
            return false;
        }
        self.read_card_ids.push(card_id);
        true
    }

    pub fn is_song_listened(&self, song_id: CatalogId) -> bool {
        self.listened_song_ids.contains(&song_id)
    }

    /// Marks a song as listened. Returns `false` when it already was.
    pub fn mark_song_listened(&mut self, song_id: CatalogId) -> bool {
        if self.is_song_listened(song_id) {
            return false;
        }
        self.listened_song_ids.push(song_id);
        true
    }

    /// Records a reason as unlocked. Returns `false` when it already was.
    pub fn add_unlocked_reason(&mut self, reason_id: CatalogId) -> bool {
        if self.unlocked_reason_ids.contains(&reason_id) {
            return false;
        }
        self.unlocked_reason_ids.push(reason_id);
        true
    }

    pub fn is_reward_claimed(&self, reward_id: CatalogId) -> bool {
        self.claimed_rewards
            .iter()
            .any(|claim| claim.reward_id == reward_id)
    }

    /// Appends a claim record for `reward_id` at `claimed_at`.
    pub fn record_claim(&mut self, reward_id: CatalogId, claimed_at: DateTime<Utc>) {
        self.claimed_rewards.push(ClaimedReward {
            reward_id,
            claimed_at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use chrono::Utc;

    #[test]
    fn spend_stars_refuses_overdraft() {
        let mut state = AppState::default();
        state.add_stars(3);

        assert!(!state.spend_stars(5));
        assert_eq!(state.stars, 3);
        assert!(state.spend_stars(3));
        assert_eq!(state.stars, 0);
    }

    #[test]
    fn card_membership_is_idempotent() {
        let mut state = AppState::default();

        assert!(state.mark_card_read(7));
        assert!(!state.mark_card_read(7));
        assert_eq!(state.read_card_ids, vec![7]);
    }

    #[test]
    fn claim_records_keep_order_and_membership() {
        let mut state = AppState::default();
        let now = Utc::now();

        state.record_claim(2, now);
        state.record_claim(5, now);

        assert!(state.is_reward_claimed(2));
        assert!(!state.is_reward_claimed(4));
        let ids: Vec<_> = state.claimed_rewards.iter().map(|c| c.reward_id).collect();
        assert_eq!(ids, vec![2, 5]);
    }
}
