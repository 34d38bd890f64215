use super::DataStore;
use crate::error::{FossleError, Result};
use crate::model::{GuessedNames, StatsRecord};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    record: Option<StatsRecord>,
    guessed: Option<GuessedNames>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `record`, as if saved by an earlier session.
    pub fn with_record(record: StatsRecord) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }

    /// Make every following save fail, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// The durable copy, as a later session would see it.
    pub fn stored(&self) -> Option<&StatsRecord> {
        self.record.as_ref()
    }

    pub fn stored_guessed(&self) -> Option<&GuessedNames> {
        self.guessed.as_ref()
    }

    /// Number of successful record saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_record(&self) -> Result<Option<StatsRecord>> {
        Ok(self.record.clone())
    }

    fn save_record(&mut self, record: &StatsRecord) -> Result<()> {
        if self.simulate_write_error {
            return Err(FossleError::Store("simulated write failure".to_string()));
        }
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }

    fn record_path(&self) -> PathBuf {
        PathBuf::from("memory://state.json")
    }

    fn load_guessed(&self) -> Result<Option<GuessedNames>> {
        Ok(self.guessed.clone())
    }

    fn save_guessed(&mut self, guessed: &GuessedNames) -> Result<()> {
        if self.simulate_write_error {
            return Err(FossleError::Store("simulated write failure".to_string()));
        }
        self.guessed = Some(guessed.clone());
        Ok(())
    }
}
