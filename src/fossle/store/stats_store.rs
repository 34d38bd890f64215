use super::DataStore;
use crate::engine::{Attempt, GameState, GuessEngine};
use crate::error::Result;
use crate::model::StatsRecord;
use chrono::{DateTime, TimeZone};
use log::{debug, info};

/// What day-boundary reconciliation did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Calendar days since the last accepted guess (0 when the clock went backwards).
    pub elapsed_days: i64,
    /// The board and terminal flags were cleared for a new puzzle.
    pub puzzle_reset: bool,
    /// The streak was broken by a missed day.
    pub streak_reset: bool,
}

/// Owns the player's [`StatsRecord`] on top of a [`DataStore`].
///
/// Every change is persisted before it becomes visible through [`record`](Self::record);
/// when the backend refuses a write the in-memory record stays as it was.
pub struct StatsStore<S: DataStore> {
    store: S,
    record: StatsRecord,
}

impl<S: DataStore> StatsStore<S> {
    /// Loads the record (creating an empty one on first run) and reconciles it
    /// against `now` before anything else can see it.
    pub fn load<Tz: TimeZone>(mut store: S, now: &DateTime<Tz>) -> Result<(Self, Reconciliation)> {
        let record = match store.load_record()? {
            Some(record) => record,
            None => {
                let record = StatsRecord::new();
                store.save_record(&record)?;
                info!("created empty record at {}", store.record_path().display());
                record
            }
        };

        let mut stats = Self { store, record };
        let reconciliation = stats.reconcile(now)?;
        Ok((stats, reconciliation))
    }

    /// Applies the day-boundary rules for `now` and writes the result through.
    pub fn reconcile<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<Reconciliation> {
        let elapsed = elapsed_days(self.record.date_last_played, now);
        let mut draft = self.record.clone();
        let reconciliation = reconcile_record(&mut draft, elapsed);

        if draft != self.record {
            self.commit(draft)?;
            info!(
                "new puzzle after {} day(s){}",
                elapsed,
                if reconciliation.streak_reset {
                    ", streak reset"
                } else {
                    ""
                }
            );
        } else {
            debug!("record is current ({} day(s) since last guess)", elapsed);
        }
        Ok(reconciliation)
    }

    /// Runs `candidate` through `engine` and records the transition.
    ///
    /// Either the guess, its aggregate updates and the write all happen, or
    /// nothing does: engine and record are only advanced after the save.
    pub fn submit<Tz: TimeZone>(
        &mut self,
        engine: &mut GuessEngine,
        candidate: &str,
        now: &DateTime<Tz>,
    ) -> Result<Attempt> {
        let mut draft = self.record.clone();
        let mut next = engine.clone();

        let attempt = next.submit(&mut draft.guess_state, candidate)?;
        apply_attempt(&mut draft, &attempt, now.timestamp_millis());
        self.commit(draft)?;
        *engine = next;

        debug!(
            "guess {} scored {:?}, state {:?}",
            attempt.number(),
            attempt.verdict,
            attempt.state
        );
        Ok(attempt)
    }

    /// Replaces the whole record, as an import does. The incoming record is
    /// reconciled against `now` first, so it is written exactly once.
    pub fn replace<Tz: TimeZone>(
        &mut self,
        mut record: StatsRecord,
        now: &DateTime<Tz>,
    ) -> Result<Reconciliation> {
        let elapsed = elapsed_days(record.date_last_played, now);
        let reconciliation = reconcile_record(&mut record, elapsed);
        self.commit(record)?;
        Ok(reconciliation)
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn commit(&mut self, draft: StatsRecord) -> Result<()> {
        self.store.save_record(&draft)?;
        self.record = draft;
        Ok(())
    }
}

/// Calendar days between the date of `last_played_ms` and the date of `now`,
/// both taken in `now`'s time zone. Never negative.
pub fn elapsed_days<Tz: TimeZone>(last_played_ms: i64, now: &DateTime<Tz>) -> i64 {
    match now.timezone().timestamp_millis_opt(last_played_ms).earliest() {
        Some(last) => now
            .date_naive()
            .signed_duration_since(last.date_naive())
            .num_days()
            .max(0),
        None => i64::MAX,
    }
}

/// Day-boundary rules: one elapsed day starts a new puzzle, two break the streak.
pub fn reconcile_record(record: &mut StatsRecord, elapsed_days: i64) -> Reconciliation {
    let mut result = Reconciliation {
        elapsed_days,
        ..Default::default()
    };
    if elapsed_days >= 1 {
        record.completed = false;
        record.won = false;
        record.guess_state.clear();
        result.puzzle_reset = true;

        if elapsed_days >= 2 {
            record.streak = 0;
            result.streak_reset = true;
        }
    }
    result
}

/// Folds one accepted guess into the aggregates.
pub fn apply_attempt(record: &mut StatsRecord, attempt: &Attempt, now_ms: i64) {
    record.date_last_played = now_ms;
    match attempt.state {
        GameState::Pending => {}
        GameState::Won => {
            record.completed = true;
            record.won = true;
            record.date_last_finished = now_ms;
            record.streak = record.streak.saturating_add(1);
            record.highest_streak = record.highest_streak.max(record.streak);
            record.stats.record_win(attempt.number());
            info!("won in {} (streak {})", attempt.number(), record.streak);
        }
        GameState::Lost => {
            record.completed = true;
            record.won = false;
            record.date_last_finished = now_ms;
            record.highest_streak = record.highest_streak.max(record.streak);
            record.streak = 0;
            record.stats.record_loss();
            info!("lost after {} guesses", attempt.number());
        }
    }
}
