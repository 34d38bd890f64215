//! # Storage Layer
//!
//! The [`DataStore`] trait is the durable home of the single [`StatsRecord`],
//! plus the [`GuessedNames`] of the current puzzle. It knows nothing about
//! puzzles or days: it loads and saves what it is given.
//! [`StatsStore`] sits on top and owns the game rules for that record
//! (day-boundary reconciliation, applying guess transitions, imports).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a pretty-printed `state.json`
//!   and `guesses.json` in the data directory, replaced atomically on every save.
//! - [`memory::InMemoryStore`]: for tests; no persistence, optional write
//!   failure simulation.
//!
//! ## Write-through
//!
//! `StatsStore` never holds changes the backend has not accepted: every
//! mutation is built on a draft, saved, and only then made visible.

use crate::error::Result;
use crate::model::{GuessedNames, StatsRecord};
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod stats_store;

pub use stats_store::{Reconciliation, StatsStore};

/// Abstract interface for record storage.
pub trait DataStore {
    /// Load the stored record, or `None` if nothing was ever saved.
    fn load_record(&self) -> Result<Option<StatsRecord>>;

    /// Durably replace the stored record.
    fn save_record(&mut self, record: &StatsRecord) -> Result<()>;

    /// Where the record lives (virtual for non-file stores).
    fn record_path(&self) -> PathBuf;

    /// Load the names guessed on the current puzzle, or `None` if none were saved.
    fn load_guessed(&self) -> Result<Option<GuessedNames>>;

    /// Durably replace the guessed names.
    fn save_guessed(&mut self, guessed: &GuessedNames) -> Result<()>;
}
