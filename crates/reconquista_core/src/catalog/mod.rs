//! Static reference catalogs bundled with the binary.
//!
//! # Responsibility
//! - Parse and validate the bundled JSON fixtures exactly once at startup.
//! - Expose an immutable, id-addressable view of cards, reasons, rewards,
//!   songs and phrases.
//!
//! # Invariants
//! - A constructed `Catalog` contains no duplicate ids within a kind.
//! - Costs, thresholds and star rewards are non-negative.
//! - Catalog data never changes after construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod load;
mod records;

pub use load::Catalog;
pub use records::{Card, Phrase, Reason, Reward, Song};

/// Stable identifier for catalog records.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CatalogId = i64;

/// Which fixture a catalog error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Cards,
    Reasons,
    Rewards,
    Songs,
    Phrases,
}

impl CatalogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Reasons => "reasons",
            Self::Rewards => "rewards",
            Self::Songs => "songs",
            Self::Phrases => "phrases",
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Fatal fixture problems. Any of these aborts startup.
#[derive(Debug)]
pub enum CatalogError {
    Parse {
        kind: CatalogKind,
        source: serde_json::Error,
    },
    DuplicateId {
        kind: CatalogKind,
        id: CatalogId,
    },
    InvalidRecord {
        kind: CatalogKind,
        id: CatalogId,
        message: String,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { kind, source } => {
                write!(f, "malformed {} fixture: {source}", kind.as_str())
            }
            Self::DuplicateId { kind, id } => {
                write!(f, "duplicate id {id} in {} fixture", kind.as_str())
            }
            Self::InvalidRecord { kind, id, message } => {
                write!(f, "invalid record {id} in {} fixture: {message}", kind.as_str())
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::DuplicateId { .. } | Self::InvalidRecord { .. } => None,
        }
    }
}
