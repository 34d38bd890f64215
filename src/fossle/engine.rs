//! The guess state machine for the active puzzle.
//!
//! ```text
//!            wrong, attempts < 7
//!              ┌─────┐
//!              ▼     │
//!  ──────▶  Pending ─┘ ──correct──▶ Won
//!              │
//!              └──7th wrong──▶ Lost
//! ```
//!
//! The engine writes each verdict into the caller's [`GuessRecord`] at slot
//! `attempts_used` and nowhere else. Rejections leave both the engine and the
//! record untouched.

use crate::error::{FossleError, Result};
use crate::model::{GuessRecord, Outcome, StatsRecord, MAX_GUESSES};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Pending,
    Won,
    Lost,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        self != GameState::Pending
    }
}

/// One accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Zero-based slot the verdict was written to.
    pub slot: usize,
    pub verdict: Outcome,
    /// Engine state after this guess.
    pub state: GameState,
}

impl Attempt {
    /// One-based attempt number.
    pub fn number(&self) -> usize {
        self.slot + 1
    }
}

#[derive(Debug, Clone)]
pub struct GuessEngine {
    target: String,
    attempts_used: usize,
    state: GameState,
    tried: HashSet<String>,
}

impl GuessEngine {
    /// A fresh puzzle with no guesses.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            attempts_used: 0,
            state: GameState::Pending,
            tried: HashSet::new(),
        }
    }

    /// Rebuilds the engine for a puzzle already in progress today, with the
    /// names guessed on it so far. `tried` is ignored on an empty board.
    ///
    /// A record flagged `completed` is terminal even with fewer than seven
    /// verdicts on the board; older saves did not store the final wrong guess.
    pub fn resume(
        target: impl Into<String>,
        record: &StatsRecord,
        tried: impl IntoIterator<Item = String>,
    ) -> Self {
        let board = &record.guess_state;
        let attempted = board.attempted();
        let (attempts_used, state) = if board.last_attempted() == Some(Outcome::Correct)
            || (record.completed && record.won)
        {
            (attempted, GameState::Won)
        } else if attempted >= MAX_GUESSES || record.completed {
            (MAX_GUESSES, GameState::Lost)
        } else {
            (attempted, GameState::Pending)
        };
        let tried = if attempted == 0 {
            HashSet::new()
        } else {
            tried.into_iter().collect()
        };
        Self {
            target: target.into(),
            attempts_used,
            state,
            tried,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    pub fn attempts_left(&self) -> usize {
        if self.state.is_finished() {
            return 0;
        }
        MAX_GUESSES - self.attempts_used
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Candidates already submitted on this puzzle.
    pub fn has_tried(&self, candidate: &str) -> bool {
        self.tried.contains(candidate.trim())
    }

    /// The submitted candidates, sorted.
    pub fn tried(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tried.iter().cloned().collect();
        names.sort();
        names
    }

    /// Scores `candidate` against the target and records the verdict.
    pub fn submit(&mut self, guesses: &mut GuessRecord, candidate: &str) -> Result<Attempt> {
        let candidate = candidate.trim();
        if self.state.is_finished() || self.attempts_used >= MAX_GUESSES {
            return Err(FossleError::InvalidState(
                "today's puzzle is already finished".to_string(),
            ));
        }
        if candidate.is_empty() {
            return Err(FossleError::InvalidState("empty guess".to_string()));
        }
        if self.tried.contains(candidate) {
            return Err(FossleError::InvalidState(format!(
                "{} was already guessed",
                candidate
            )));
        }

        let slot = self.attempts_used;
        if guesses.get(slot) != Some(Outcome::Unattempted) {
            return Err(FossleError::InvalidState(format!(
                "guess slot {} is already filled",
                slot + 1
            )));
        }

        let verdict = if candidate == self.target {
            Outcome::Correct
        } else {
            Outcome::Wrong
        };
        guesses.set(slot, verdict);
        self.attempts_used += 1;
        self.tried.insert(candidate.to_string());

        self.state = if verdict == Outcome::Correct {
            GameState::Won
        } else if self.attempts_used == MAX_GUESSES {
            GameState::Lost
        } else {
            GameState::Pending
        };

        Ok(Attempt {
            slot,
            verdict,
            state: self.state,
        })
    }
}
