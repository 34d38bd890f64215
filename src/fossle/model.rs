//! Core data types: attempt outcomes, the per-day guess record, the win
//! histogram and the persisted [`StatsRecord`].
//!
//! The serde shape of [`StatsRecord`] is the on-disk and export format, so
//! field names and value encodings here are fixed:
//!
//! ```text
//! {
//!   "guessState": [-1, 1, 0, 0, 0, 0, 0],
//!   "completed": true, "won": true,
//!   "dateLastFinished": 1700000000000,
//!   "dateLastPlayed": 1700000000000,
//!   "streak": 3, "highestStreak": 5,
//!   "stats": { "1": 0, "2": 4, "3": 1, "4": 0, "5": 0, "6": 0, "7": 0, "lost": 2 }
//! }
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Number of guesses allowed per puzzle.
pub const MAX_GUESSES: usize = 7;

/// Result of a single attempt slot.
///
/// Persisted as an integer code: `-1` wrong, `0` unattempted, `1` correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Outcome {
    Wrong,
    #[default]
    Unattempted,
    Correct,
}

impl Outcome {
    pub fn is_attempted(self) -> bool {
        self != Outcome::Unattempted
    }
}

impl From<Outcome> for i64 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Wrong => -1,
            Outcome::Unattempted => 0,
            Outcome::Correct => 1,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Outcome::Wrong),
            0 => Ok(Outcome::Unattempted),
            1 => Ok(Outcome::Correct),
            other => Err(format!("invalid guess outcome code {}", other)),
        }
    }
}

/// The seven attempt slots of the active puzzle, filled left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessRecord([Outcome; MAX_GUESSES]);

impl GuessRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [Outcome; MAX_GUESSES]) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[Outcome; MAX_GUESSES] {
        &self.0
    }

    pub fn get(&self, slot: usize) -> Option<Outcome> {
        self.0.get(slot).copied()
    }

    /// Number of slots holding a guess.
    pub fn attempted(&self) -> usize {
        self.0.iter().filter(|o| o.is_attempted()).count()
    }

    pub fn has_correct(&self) -> bool {
        self.0.contains(&Outcome::Correct)
    }

    /// The last slot holding a guess, if any.
    pub fn last_attempted(&self) -> Option<Outcome> {
        self.0.iter().rev().copied().find(|o| o.is_attempted())
    }

    pub fn clear(&mut self) {
        self.0 = [Outcome::Unattempted; MAX_GUESSES];
    }

    pub(crate) fn set(&mut self, slot: usize, outcome: Outcome) {
        self.0[slot] = outcome;
    }

    /// Checks the fill-order invariants: attempted slots form a prefix and a
    /// `Correct`, if present, closes it.
    pub fn check_structure(&self) -> Result<(), String> {
        let attempted = self.attempted();
        if let Some(slot) = self.0[..attempted].iter().position(|o| !o.is_attempted()) {
            return Err(format!("guess slot {} is empty but later slots are not", slot + 1));
        }
        match self.0.iter().filter(|o| **o == Outcome::Correct).count() {
            0 => Ok(()),
            1 if self.last_attempted() == Some(Outcome::Correct) => Ok(()),
            1 => Err("a guess follows the correct one".to_string()),
            n => Err(format!("{} guesses are marked correct", n)),
        }
    }
}

/// Lifetime wins keyed by the attempt they happened on, plus losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "HistogramRepr", into = "HistogramRepr")]
pub struct Histogram {
    wins: [u32; MAX_GUESSES],
    lost: u32,
}

impl Histogram {
    pub fn new(wins: [u32; MAX_GUESSES], lost: u32) -> Self {
        Self { wins, lost }
    }

    /// Wins that took exactly `attempt` guesses (1-based). Zero outside 1..=7.
    pub fn wins_at(&self, attempt: usize) -> u32 {
        attempt
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }

    /// `(attempt, wins)` pairs for attempts 1..=7.
    pub fn wins(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.wins.iter().enumerate().map(|(i, n)| (i + 1, *n))
    }

    pub fn games_won(&self) -> u32 {
        self.wins.iter().fold(0u32, |total, n| total.saturating_add(*n))
    }

    pub fn games_played(&self) -> u32 {
        self.games_won().saturating_add(self.lost)
    }

    /// Rounded percentage of games won, 0 when nothing has been played.
    pub fn win_percentage(&self) -> u32 {
        let played = self.games_played();
        if played == 0 {
            return 0;
        }
        (f64::from(self.games_won()) / f64::from(played) * 100.0).round() as u32
    }

    pub(crate) fn record_win(&mut self, attempt: usize) {
        if let Some(count) = attempt.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
            *count = count.saturating_add(1);
        }
    }

    pub(crate) fn record_loss(&mut self) {
        self.lost = self.lost.saturating_add(1);
    }
}

#[derive(Serialize, Deserialize)]
struct HistogramRepr {
    #[serde(rename = "1")]
    one: u32,
    #[serde(rename = "2")]
    two: u32,
    #[serde(rename = "3")]
    three: u32,
    #[serde(rename = "4")]
    four: u32,
    #[serde(rename = "5")]
    five: u32,
    #[serde(rename = "6")]
    six: u32,
    #[serde(rename = "7")]
    seven: u32,
    lost: u32,
}

impl From<HistogramRepr> for Histogram {
    fn from(r: HistogramRepr) -> Self {
        Self {
            wins: [r.one, r.two, r.three, r.four, r.five, r.six, r.seven],
            lost: r.lost,
        }
    }
}

impl From<Histogram> for HistogramRepr {
    fn from(h: Histogram) -> Self {
        let [one, two, three, four, five, six, seven] = h.wins;
        Self {
            one,
            two,
            three,
            four,
            five,
            six,
            seven,
            lost: h.lost,
        }
    }
}

/// The single persisted record of a player: today's board plus lifetime stats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub guess_state: GuessRecord,
    pub completed: bool,
    pub won: bool,
    /// Epoch milliseconds of the last finished puzzle.
    pub date_last_finished: i64,
    /// Epoch milliseconds of the last accepted guess.
    pub date_last_played: i64,
    pub streak: u32,
    pub highest_streak: u32,
    pub stats: Histogram,
}

impl StatsRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_played_at(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.date_last_played)
    }

    pub fn last_finished_at(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.date_last_finished)
    }
}

/// Names guessed on one puzzle day, kept beside the record so repeats are
/// caught across restarts. Not part of the export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuessedNames {
    /// Days since the epoch of the puzzle these names belong to.
    pub day: i64,
    pub names: Vec<String>,
}

impl GuessedNames {
    pub fn new(day: i64, names: Vec<String>) -> Self {
        Self { day, names }
    }
}

/// Builds a board from a pattern: `x` wrong, `o` correct, `.` unattempted.
#[cfg(test)]
pub(crate) fn board(pattern: &str) -> GuessRecord {
    let mut record = GuessRecord::new();
    for (slot, c) in pattern.chars().take(MAX_GUESSES).enumerate() {
        let outcome = match c {
            'x' => Outcome::Wrong,
            'o' => Outcome::Correct,
            _ => Outcome::Unattempted,
        };
        record.set(slot, outcome);
    }
    record
}

// Zero is the "never" sentinel of a fresh record.
fn millis_to_utc(ms: i64) -> Option<DateTime<Utc>> {
    if ms == 0 {
        return None;
    }
    Utc.timestamp_millis_opt(ms).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_codes() {
        assert_eq!(i64::from(Outcome::Wrong), -1);
        assert_eq!(i64::from(Outcome::Unattempted), 0);
        assert_eq!(i64::from(Outcome::Correct), 1);
        assert!(Outcome::try_from(2).is_err());
    }

    #[test]
    fn test_empty_record_serializes_to_fixed_shape() {
        let json = serde_json::to_value(StatsRecord::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "guessState": [0, 0, 0, 0, 0, 0, 0],
                "completed": false,
                "won": false,
                "dateLastFinished": 0,
                "dateLastPlayed": 0,
                "streak": 0,
                "highestStreak": 0,
                "stats": {"1": 0, "2": 0, "3": 0, "4": 0, "5": 0, "6": 0, "7": 0, "lost": 0}
            })
        );
    }

    #[test]
    fn test_guess_record_rejects_wrong_length() {
        let res: Result<GuessRecord, _> = serde_json::from_str("[0, 0, 0]");
        assert!(res.is_err());
    }

    #[test]
    fn test_check_structure() {
        assert!(board("xxo....").check_structure().is_ok());
        assert!(board(".......").check_structure().is_ok());
        assert!(board("xxxxxxx").check_structure().is_ok());

        assert!(board("x.x....").check_structure().is_err());
        assert!(board("ox.....").check_structure().is_err());
        assert!(board("oo.....").check_structure().is_err());
    }

    #[test]
    fn test_histogram_totals() {
        let mut h = Histogram::default();
        h.record_win(1);
        h.record_win(3);
        h.record_win(3);
        h.record_loss();
        h.record_win(0); // ignored
        h.record_win(8); // ignored

        assert_eq!(h.wins_at(3), 2);
        assert_eq!(h.wins_at(0), 0);
        assert_eq!(h.games_played(), 4);
        assert_eq!(h.win_percentage(), 75);
    }

    #[test]
    fn test_histogram_counters_saturate() {
        let mut h = Histogram::new([0, u32::MAX, 0, 0, 0, 0, 0], u32::MAX);
        h.record_win(2);
        h.record_loss();

        assert_eq!(h.wins_at(2), u32::MAX);
        assert_eq!(h.lost(), u32::MAX);
        assert_eq!(h.games_played(), u32::MAX);
    }

    #[test]
    fn test_win_percentage_rounds() {
        let h = Histogram::new([1, 0, 0, 0, 0, 0, 0], 2);
        assert_eq!(h.win_percentage(), 33);
        assert_eq!(Histogram::default().win_percentage(), 0);
    }

    #[test]
    fn test_zero_timestamp_means_never() {
        assert!(StatsRecord::new().last_played_at().is_none());
    }
}
