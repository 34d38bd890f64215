//! Today's game: the selected puzzle, its engine and the player's record.
//!
//! A [`Session`] is what the commands operate on. It is opened once per
//! process (loading and reconciling the record), and re-synced before every
//! operation so a session that outlives midnight moves on to the next puzzle.
//!
//! The names guessed today are saved beside the record, keyed by puzzle day,
//! so a repeat is rejected even when every guess runs in a new process.

use crate::catalog::{Catalog, CatalogItem};
use crate::engine::{Attempt, GuessEngine};
use crate::error::{FossleError, Result};
use crate::model::{GuessedNames, StatsRecord};
use crate::puzzle::PuzzleSelector;
use crate::store::{DataStore, Reconciliation, StatsStore};
use chrono::{DateTime, NaiveDate, TimeZone};
use log::{debug, info, warn};

pub struct Session<S: DataStore> {
    stats: StatsStore<S>,
    engine: GuessEngine,
    catalog: Catalog,
    selector: PuzzleSelector,
    /// Days since the epoch of the puzzle the engine is playing.
    day: i64,
    target: CatalogItem,
}

impl<S: DataStore> Session<S> {
    pub fn open<Tz: TimeZone>(
        store: S,
        catalog: Catalog,
        epoch: NaiveDate,
        now: &DateTime<Tz>,
    ) -> Result<Self> {
        let selector = PuzzleSelector::new(epoch, catalog.len());
        let (mut stats, reconciliation) = StatsStore::load(store, now)?;
        let day = selector.elapsed_days(now);
        let target = Self::pick(&catalog, &selector, now)?;
        let tried = Self::tried_on(&mut stats, day, reconciliation.puzzle_reset)?;
        let engine = GuessEngine::resume(target.name.clone(), stats.record(), tried);

        debug!(
            "opened puzzle #{} ({} attempts used, reconciled {:?})",
            day + 1,
            engine.attempts_used(),
            reconciliation
        );
        Ok(Self {
            stats,
            engine,
            catalog,
            selector,
            day,
            target,
        })
    }

    /// Moves to the current puzzle if the calendar day changed since the last call.
    pub fn sync<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<Option<Reconciliation>> {
        if self.selector.elapsed_days(now) == self.day {
            return Ok(None);
        }
        info!("day changed, loading the next puzzle");
        self.reload(now).map(Some)
    }

    /// Re-reads the day's rules against the current record and rebuilds the engine.
    pub fn reload<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<Reconciliation> {
        let reconciliation = self.stats.reconcile(now)?;
        self.day = self.selector.elapsed_days(now);
        self.target = Self::pick(&self.catalog, &self.selector, now)?;
        let tried = Self::tried_on(&mut self.stats, self.day, reconciliation.puzzle_reset)?;
        self.engine = GuessEngine::resume(self.target.name.clone(), self.stats.record(), tried);
        Ok(reconciliation)
    }

    /// Names saved for puzzle `day`. A reset puzzle starts with none, and the
    /// saved list is cleared to match.
    fn tried_on(stats: &mut StatsStore<S>, day: i64, reset: bool) -> Result<Vec<String>> {
        if reset {
            stats.store_mut().save_guessed(&GuessedNames::new(day, Vec::new()))?;
            return Ok(Vec::new());
        }
        Ok(match stats.store().load_guessed()? {
            Some(guessed) if guessed.day == day => guessed.names,
            _ => Vec::new(),
        })
    }

    fn pick<Tz: TimeZone>(
        catalog: &Catalog,
        selector: &PuzzleSelector,
        now: &DateTime<Tz>,
    ) -> Result<CatalogItem> {
        catalog
            .get(selector.index_at(now))
            .cloned()
            .ok_or_else(|| FossleError::Catalog("catalog is empty".to_string()))
    }

    /// Submits a guess that has already been resolved to a catalog name.
    pub fn submit<Tz: TimeZone>(&mut self, candidate: &str, now: &DateTime<Tz>) -> Result<Attempt> {
        self.sync(now)?;
        if !self.catalog.contains(candidate) {
            return Err(FossleError::InvalidState(format!(
                "{} is not a guessable project",
                candidate
            )));
        }
        let attempt = self.stats.submit(&mut self.engine, candidate, now)?;

        // The guess itself is saved; losing the name only weakens repeat checks.
        let guessed = GuessedNames::new(self.day, self.engine.tried());
        if let Err(e) = self.stats.store_mut().save_guessed(&guessed) {
            warn!("could not save today's guessed names: {}", e);
        }
        Ok(attempt)
    }

    /// Swaps in an imported record, reconciled against `now`, and rebuilds the
    /// engine as if the process had restarted. Nothing is written unless the
    /// whole import can be applied.
    pub fn replace<Tz: TimeZone>(
        &mut self,
        record: StatsRecord,
        now: &DateTime<Tz>,
    ) -> Result<Reconciliation> {
        let day = self.selector.elapsed_days(now);
        let target = Self::pick(&self.catalog, &self.selector, now)?;

        // Names guessed before the import do not belong to the imported board.
        self.stats
            .store_mut()
            .save_guessed(&GuessedNames::new(day, Vec::new()))?;
        let reconciliation = self.stats.replace(record, now)?;

        self.engine = GuessEngine::resume(target.name.clone(), self.stats.record(), Vec::new());
        self.day = day;
        self.target = target;
        Ok(reconciliation)
    }

    pub fn target(&self) -> &CatalogItem {
        &self.target
    }

    pub fn day_number(&self) -> u64 {
        self.day.unsigned_abs() + 1
    }

    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    pub fn stats(&self) -> &StatsStore<S> {
        &self.stats
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        self.stats.store_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameState;
    use crate::model::board;
    use crate::puzzle::DEFAULT_EPOCH;
    use crate::store::memory::InMemoryStore;
    use chrono::{Duration, Utc};

    fn noon() -> DateTime<Utc> {
        "2024-06-15T12:00:00Z".parse().unwrap()
    }

    fn open(now: &DateTime<Utc>) -> Session<InMemoryStore> {
        Session::open(
            InMemoryStore::new(),
            Catalog::builtin().clone(),
            DEFAULT_EPOCH,
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_target_matches_selector() {
        let now = noon();
        let session = open(&now);
        let selector = PuzzleSelector::new(DEFAULT_EPOCH, Catalog::builtin().len());
        assert_eq!(
            session.target(),
            Catalog::builtin().get(selector.index_at(&now)).unwrap()
        );
        assert_eq!(session.day_number(), selector.day_number(&now));
    }

    #[test]
    fn test_unknown_candidate_is_invalid_state() {
        let now = noon();
        let mut session = open(&now);
        let res = session.submit("nobody/nothing", &now);
        assert!(matches!(res, Err(FossleError::InvalidState(_))));
        assert_eq!(session.stats().record(), &StatsRecord::new());
    }

    #[test]
    fn test_winning_guess() {
        let now = noon();
        let mut session = open(&now);
        let answer = session.target().name.clone();
        let attempt = session.submit(&answer, &now).unwrap();
        assert_eq!(attempt.state, GameState::Won);
        assert_eq!(session.stats().record().streak, 1);
    }

    #[test]
    fn test_sync_moves_to_next_day() {
        let now = noon();
        let mut session = open(&now);
        let answer = session.target().name.clone();
        session.submit(&answer, &now).unwrap();
        assert!(session.engine().is_finished());

        assert!(session.sync(&now).unwrap().is_none());

        let tomorrow = now + Duration::days(1);
        let rec = session.sync(&tomorrow).unwrap().unwrap();
        assert!(rec.puzzle_reset);
        assert!(!session.engine().is_finished());
        assert_ne!(session.target().name, answer);
        assert_eq!(session.stats().record().streak, 1);
    }

    #[test]
    fn test_replace_rebuilds_engine() {
        let now = noon();
        let mut session = open(&now);

        let mut imported = StatsRecord::new();
        imported.guess_state = board("xx.....");
        imported.date_last_played = now.timestamp_millis();
        imported.streak = 3;
        session.replace(imported, &now).unwrap();

        assert_eq!(session.engine().attempts_used(), 2);
        assert_eq!(session.stats().record().streak, 3);
        assert_eq!(session.stats().store().stored().unwrap().streak, 3);
    }

    #[test]
    fn test_replace_with_stale_record_is_reconciled() {
        let now = noon();
        let mut session = open(&now);

        let mut imported = StatsRecord::new();
        imported.guess_state = board("xxx....");
        imported.date_last_played = (now - Duration::days(3)).timestamp_millis();
        imported.streak = 5;
        imported.highest_streak = 5;
        let rec = session.replace(imported, &now).unwrap();

        assert!(rec.streak_reset);
        assert_eq!(session.engine().attempts_used(), 0);
        assert_eq!(session.stats().record().streak, 0);
        assert_eq!(session.stats().record().highest_streak, 5);
    }

    /// Opens a new session on what `session` left in storage, like a second run.
    fn reopen(session: &Session<InMemoryStore>, now: &DateTime<Utc>) -> Session<InMemoryStore> {
        let stored = session.stats().store();
        let mut store = InMemoryStore::with_record(stored.stored().unwrap().clone());
        if let Some(guessed) = stored.stored_guessed() {
            store.save_guessed(guessed).unwrap();
        }
        Session::open(store, Catalog::builtin().clone(), DEFAULT_EPOCH, now).unwrap()
    }

    fn wrong(session: &Session<InMemoryStore>) -> String {
        session
            .catalog()
            .iter()
            .find(|item| item.name != session.target().name)
            .map(|item| item.name.clone())
            .unwrap()
    }

    #[test]
    fn test_repeat_is_rejected_after_reopen() {
        let now = noon();
        let mut session = open(&now);
        let name = wrong(&session);
        session.submit(&name, &now).unwrap();
        assert_eq!(
            session.stats().store().stored_guessed(),
            Some(&GuessedNames::new(session.day, vec![name.clone()]))
        );

        let mut again = reopen(&session, &(now + Duration::hours(2)));
        assert!(again.engine().has_tried(&name));
        let res = again.submit(&name, &now);
        assert!(matches!(res, Err(FossleError::InvalidState(_))));
        assert_eq!(again.engine().attempts_used(), 1);
    }

    #[test]
    fn test_next_day_clears_guessed_names() {
        let now = noon();
        let mut session = open(&now);
        let name = wrong(&session);
        session.submit(&name, &now).unwrap();

        let tomorrow = now + Duration::days(1);
        let next = reopen(&session, &tomorrow);
        assert!(!next.engine().has_tried(&name));
        assert_eq!(
            next.stats().store().stored_guessed(),
            Some(&GuessedNames::new(next.day, Vec::new()))
        );
    }

    #[test]
    fn test_replace_forgets_guessed_names() {
        let now = noon();
        let mut session = open(&now);
        let name = wrong(&session);
        session.submit(&name, &now).unwrap();

        let mut imported = StatsRecord::new();
        imported.guess_state = board("xx.....");
        imported.date_last_played = now.timestamp_millis();
        session.replace(imported, &now).unwrap();

        assert!(!session.engine().has_tried(&name));
        assert!(session.stats().store().stored_guessed().unwrap().names.is_empty());
        session.submit(&name, &now).unwrap();
        assert_eq!(session.engine().attempts_used(), 3);
    }

    #[test]
    fn test_failed_replace_changes_nothing() {
        let now = noon();
        let mut session = open(&now);
        let name = wrong(&session);
        session.submit(&name, &now).unwrap();
        let before = session.stats().record().clone();

        session.store_mut().set_simulate_write_error(true);
        let mut imported = StatsRecord::new();
        imported.streak = 9;
        assert!(session.replace(imported, &now).is_err());

        assert_eq!(session.stats().record(), &before);
        assert_eq!(session.stats().store().stored(), Some(&before));
        assert!(session.engine().has_tried(&name));
        assert_eq!(session.engine().attempts_used(), 1);
    }

    #[test]
    fn test_submit_rolls_over_first() {
        let now = noon();
        let mut session = open(&now);
        let answer = session.target().name.clone();
        session.submit(&answer, &now).unwrap();

        // The next day a guess goes to the new puzzle, not the finished one.
        let tomorrow = now + Duration::days(1);
        let attempt = session.submit(&answer, &tomorrow).unwrap();
        assert_eq!(attempt.slot, 0);
    }
}
