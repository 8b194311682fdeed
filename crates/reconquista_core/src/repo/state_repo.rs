//! State repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide whole-row read/write access to the singleton `app_state` row.
//! - Keep SQL and JSON-column codecs inside the persistence boundary.
//!
//! # Invariants
//! - There is never more than one state row (enforced by schema CHECK).
//! - Callers read-modify-write the whole state; no partial updates exist.

use crate::catalog::CatalogId;
use crate::db::DbError;
use crate::model::state::{AppState, ClaimedReward};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STATE_ROW_ID: i64 = 1;

const STATE_SELECT_SQL: &str = "SELECT
    consideration_points,
    stars,
    unlocked_reason_ids,
    read_card_ids,
    listened_song_ids,
    claimed_rewards
FROM app_state
WHERE id = ?1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence errors for the singleton state row.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted state data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-state access contract used by every service.
pub trait StateRepository {
    /// Loads the singleton state, creating the default row on first use.
    fn load_state(&self) -> RepoResult<AppState>;
    /// Replaces the singleton row with `state`.
    fn save_state(&self, state: &AppState) -> RepoResult<()>;
}

/// SQLite-backed state repository.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert_default(&self) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (id) VALUES (?1);",
            params![STATE_ROW_ID],
        )?;
        Ok(())
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_state(&self) -> RepoResult<AppState> {
        let existing = self
            .conn
            .query_row(STATE_SELECT_SQL, params![STATE_ROW_ID], raw_state_row)
            .optional()?;

        match existing {
            Some(raw) => parse_state_row(raw),
            None => {
                self.insert_default()?;
                Ok(AppState::default())
            }
        }
    }

    fn save_state(&self, state: &AppState) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE app_state
             SET
                consideration_points = ?1,
                stars = ?2,
                unlocked_reason_ids = ?3,
                read_card_ids = ?4,
                listened_song_ids = ?5,
                claimed_rewards = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                state.consideration_points,
                state.stars,
                encode_ids(&state.unlocked_reason_ids)?,
                encode_ids(&state.read_card_ids)?,
                encode_ids(&state.listened_song_ids)?,
                encode_claims(&state.claimed_rewards)?,
                STATE_ROW_ID,
            ],
        )?;

        if changed == 0 {
            // First save on a fresh database where load_state was skipped.
            self.insert_default()?;
            return self.save_state(state);
        }

        Ok(())
    }
}

/// Raw column values before JSON decoding, extracted inside the rusqlite
/// row callback (which can only fail with `rusqlite::Error`).
struct RawStateRow {
    consideration_points: i64,
    stars: i64,
    unlocked_reason_ids: String,
    read_card_ids: String,
    listened_song_ids: String,
    claimed_rewards: String,
}

fn raw_state_row(row: &Row<'_>) -> Result<RawStateRow, rusqlite::Error> {
    Ok(RawStateRow {
        consideration_points: row.get("consideration_points")?,
        stars: row.get("stars")?,
        unlocked_reason_ids: row.get("unlocked_reason_ids")?,
        read_card_ids: row.get("read_card_ids")?,
        listened_song_ids: row.get("listened_song_ids")?,
        claimed_rewards: row.get("claimed_rewards")?,
    })
}

fn parse_state_row(raw: RawStateRow) -> RepoResult<AppState> {
    Ok(AppState {
        consideration_points: raw.consideration_points,
        stars: raw.stars,
        unlocked_reason_ids: decode_ids("unlocked_reason_ids", &raw.unlocked_reason_ids)?,
        read_card_ids: decode_ids("read_card_ids", &raw.read_card_ids)?,
        listened_song_ids: decode_ids("listened_song_ids", &raw.listened_song_ids)?,
        claimed_rewards: decode_claims(&raw.claimed_rewards)?,
    })
}

fn decode_ids(column: &str, raw: &str) -> RepoResult<Vec<CatalogId>> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("bad JSON in app_state.{column}: {err}"))
    })
}

fn decode_claims(raw: &str) -> RepoResult<Vec<ClaimedReward>> {
    serde_json::from_str(raw).map_err(|err| {
        RepoError::InvalidData(format!("bad JSON in app_state.claimed_rewards: {err}"))
    })
}

fn encode_ids(ids: &[CatalogId]) -> RepoResult<String> {
    serde_json::to_string(ids)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode id list: {err}")))
}

fn encode_claims(claims: &[ClaimedReward]) -> RepoResult<String> {
    serde_json::to_string(claims)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode claim list: {err}")))
}
