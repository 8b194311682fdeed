//! Catalog construction from bundled fixtures.
//!
//! # Responsibility
//! - Parse fixture JSON into validated record lists.
//! - Keep reasons ordered by threshold and rewards by cost so listings
//!   come out stable without per-request sorting.

use super::records::{Card, Phrase, Reason, Reward, Song};
use super::{CatalogError, CatalogId, CatalogKind, CatalogResult};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

const CARDS_JSON: &str = include_str!("../../data/cards.json");
const REASONS_JSON: &str = include_str!("../../data/reasons.json");
const REWARDS_JSON: &str = include_str!("../../data/rewards.json");
const SONGS_JSON: &str = include_str!("../../data/songs.json");
const PHRASES_JSON: &str = include_str!("../../data/phrases.json");

/// Immutable reference data shared by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    reasons: Vec<Reason>,
    rewards: Vec<Reward>,
    songs: Vec<Song>,
    phrases: Vec<Phrase>,
}

impl Catalog {
    /// Parses the fixtures compiled into this binary.
    ///
    /// # Side effects
    /// - Emits a `catalog_load` event with per-kind record counts.
    pub fn load_bundled() -> CatalogResult<Self> {
        let catalog = Self::from_json(
            CARDS_JSON,
            REASONS_JSON,
            REWARDS_JSON,
            SONGS_JSON,
            PHRASES_JSON,
        )?;
        info!(
            "event=catalog_load module=catalog status=ok cards={} reasons={} rewards={} songs={} phrases={}",
            catalog.cards.len(),
            catalog.reasons.len(),
            catalog.rewards.len(),
            catalog.songs.len(),
            catalog.phrases.len()
        );
        Ok(catalog)
    }

    /// Parses catalog data from raw JSON documents.
    ///
    /// Exposed so tests can build small catalogs without touching the
    /// bundled fixtures.
    pub fn from_json(
        cards: &str,
        reasons: &str,
        rewards: &str,
        songs: &str,
        phrases: &str,
    ) -> CatalogResult<Self> {
        let cards: Vec<Card> = parse_fixture(CatalogKind::Cards, cards)?;
        let mut reasons: Vec<Reason> = parse_fixture(CatalogKind::Reasons, reasons)?;
        let mut rewards: Vec<Reward> = parse_fixture(CatalogKind::Rewards, rewards)?;
        let songs: Vec<Song> = parse_fixture(CatalogKind::Songs, songs)?;
        let phrases: Vec<Phrase> = parse_fixture(CatalogKind::Phrases, phrases)?;

        check_unique_ids(CatalogKind::Cards, cards.iter().map(|c| c.id))?;
        check_unique_ids(CatalogKind::Reasons, reasons.iter().map(|r| r.id))?;
        check_unique_ids(CatalogKind::Rewards, rewards.iter().map(|r| r.id))?;
        check_unique_ids(CatalogKind::Songs, songs.iter().map(|s| s.id))?;
        check_unique_ids(CatalogKind::Phrases, phrases.iter().map(|p| p.id))?;

        for card in &cards {
            if card.star_reward < 0 {
                return Err(invalid(CatalogKind::Cards, card.id, "negative star_reward"));
            }
        }
        for reason in &reasons {
            if reason.unlock_threshold < 0 {
                return Err(invalid(
                    CatalogKind::Reasons,
                    reason.id,
                    "negative unlock_threshold",
                ));
            }
        }
        for reward in &rewards {
            if reward.star_cost < 0 {
                return Err(invalid(CatalogKind::Rewards, reward.id, "negative star_cost"));
            }
        }

        reasons.sort_by_key(|reason| (reason.unlock_threshold, reason.id));
        rewards.sort_by_key(|reward| (reward.star_cost, reward.id));

        Ok(Self {
            cards,
            reasons,
            rewards,
            songs,
            phrases,
        })
    }

    /// Cards in fixture order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Reasons ordered by unlock threshold.
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Rewards ordered by star cost.
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn card(&self, id: CatalogId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn reason(&self, id: CatalogId) -> Option<&Reason> {
        self.reasons.iter().find(|reason| reason.id == id)
    }

    pub fn reward(&self, id: CatalogId) -> Option<&Reward> {
        self.rewards.iter().find(|reward| reward.id == id)
    }

    pub fn song(&self, id: CatalogId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    pub fn phrase(&self, id: CatalogId) -> Option<&Phrase> {
        self.phrases.iter().find(|phrase| phrase.id == id)
    }
}

fn parse_fixture<T: DeserializeOwned>(kind: CatalogKind, raw: &str) -> CatalogResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { kind, source })
}

fn check_unique_ids(
    kind: CatalogKind,
    ids: impl Iterator<Item = CatalogId>,
) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

fn invalid(kind: CatalogKind, id: CatalogId, message: &str) -> CatalogError {
    CatalogError::InvalidRecord {
        kind,
        id,
        message: message.to_string(),
    }
}
