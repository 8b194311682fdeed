//! Card use-case service.
//!
//! # Invariants
//! - A card pays its `star_reward` exactly once; repeat reads are no-ops.
//! - Full card content is always returned; `read` is a flag only.

use crate::catalog::{Catalog, CatalogId};
use crate::model::state::AppState;
use crate::repo::state_repo::StateRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;
use serde::Serialize;

/// Card joined with its read flag for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CatalogId,
    pub title: String,
    pub content: String,
    pub star_reward: i64,
    pub read: bool,
}

/// Outcome of a `read_card` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadCardOutcome {
    pub already_read: bool,
    pub stars_awarded: i64,
    pub state: AppState,
}

/// Use-case service for the card collection.
pub struct CardService<'cat, R: StateRepository> {
    repo: R,
    catalog: &'cat Catalog,
}

impl<'cat, R: StateRepository> CardService<'cat, R> {
    pub fn new(repo: R, catalog: &'cat Catalog) -> Self {
        Self { repo, catalog }
    }

    /// Every card in fixture order, joined with the read flag.
    pub fn list_cards(&self) -> ServiceResult<Vec<CardView>> {
        let state = self.repo.load_state()?;
        Ok(self
            .catalog
            .cards()
            .iter()
            .map(|card| CardView {
                id: card.id,
                title: card.title.clone(),
                content: card.content.clone(),
                star_reward: card.star_reward,
                read: state.is_card_read(card.id),
            })
            .collect())
    }

    /// Marks a card as read, crediting its star reward on first read.
    ///
    /// # Contract
    /// - Unknown ids fail with `ServiceError::CardNotFound`.
    /// - Repeat reads report `already_read = true` and award nothing.
    pub fn read_card(&self, card_id: CatalogId) -> ServiceResult<ReadCardOutcome> {
        let card = self
            .catalog
            .card(card_id)
            .ok_or(ServiceError::CardNotFound(card_id))?;

        let mut state = self.repo.load_state()?;
        if !state.mark_card_read(card_id) {
            return Ok(ReadCardOutcome {
                already_read: true,
                stars_awarded: 0,
                state,
            });
        }

        state.add_stars(card.star_reward);
        self.repo.save_state(&state)?;
        info!(
            "event=read_card module=service status=ok card_id={} stars_awarded={} stars={}",
            card_id, card.star_reward, state.stars
        );

        Ok(ReadCardOutcome {
            already_read: false,
            stars_awarded: card.star_reward,
            state,
        })
    }
}
