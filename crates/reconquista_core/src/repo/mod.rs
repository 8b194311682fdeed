//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-state load/save contract services depend on.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - `load_state` always yields a state row, creating the default one on
//!   first use.
//! - Corrupt persisted columns surface as semantic errors instead of being
//!   masked.

pub mod state_repo;
