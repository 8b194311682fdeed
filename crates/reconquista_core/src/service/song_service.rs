//! Song use-case service.
//!
//! # Invariants
//! - The first listen of a song pays a fixed 1-star bonus; repeats are
//!   no-ops.

use crate::catalog::{Catalog, CatalogId};
use crate::model::state::AppState;
use crate::repo::state_repo::StateRepository;
use crate::service::{ServiceError, ServiceResult};
use log::info;
use serde::Serialize;

/// Stars granted the first time a song is played.
pub const SONG_LISTEN_REWARD: i64 = 1;

/// Song joined with its listened flag for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongView {
    pub id: CatalogId,
    pub title: String,
    pub artist: String,
    pub url: String,
    pub listened: bool,
}

/// Outcome of a `listen_song` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenSongOutcome {
    pub already_listened: bool,
    pub stars_awarded: i64,
    pub state: AppState,
}

/// Use-case service for the shared song list.
pub struct SongService<'cat, R: StateRepository> {
    repo: R,
    catalog: &'cat Catalog,
}

impl<'cat, R: StateRepository> SongService<'cat, R> {
    pub fn new(repo: R, catalog: &'cat Catalog) -> Self {
        Self { repo, catalog }
    }

    /// Every song in fixture order, joined with the listened flag.
    pub fn list_songs(&self) -> ServiceResult<Vec<SongView>> {
        let state = self.repo.load_state()?;
        Ok(self
            .catalog
            .songs()
            .iter()
            .map(|song| SongView {
                id: song.id,
                title: song.title.clone(),
                artist: song.artist.clone(),
                url: song.url.clone(),
                listened: state.is_song_listened(song.id),
            })
            .collect())
    }

    /// Marks a song as listened, crediting the bonus on first listen.
    pub fn listen_song(&self, song_id: CatalogId) -> ServiceResult<ListenSongOutcome> {
        if self.catalog.song(song_id).is_none() {
            return Err(ServiceError::SongNotFound(song_id));
        }

        let mut state = self.repo.load_state()?;
        if !state.mark_song_listened(song_id) {
            return Ok(ListenSongOutcome {
                already_listened: true,
                stars_awarded: 0,
                state,
            });
        }

        state.add_stars(SONG_LISTEN_REWARD);
        self.repo.save_state(&state)?;
        info!(
            "event=listen_song module=service status=ok song_id={} stars={}",
            song_id, state.stars
        );

        Ok(ListenSongOutcome {
            already_listened: false,
            stars_awarded: SONG_LISTEN_REWARD,
            state,
        })
    }
}
