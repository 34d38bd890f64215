//! Daily puzzle selection.
//!
//! Every calendar day maps to one catalog position: the number of whole days
//! since a fixed epoch, modulo the catalog size. Nothing here reads the clock;
//! callers pass `now` in, so the same date always gives the same puzzle.

use chrono::{DateTime, NaiveDate, TimeZone};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// The day the first puzzle went out.
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2022, 3, 9) {
    Some(date) => date,
    None => panic!("invalid default epoch"),
};

/// Catalog index for `now`: whole days between `now` and `epoch` (both epoch
/// milliseconds), wrapped to the catalog length. An empty catalog yields 0.
pub fn index(now_ms: i64, epoch_ms: i64, catalog_len: usize) -> usize {
    if catalog_len == 0 {
        return 0;
    }
    let days = (i128::from(now_ms) - i128::from(epoch_ms)).unsigned_abs() / DAY_MS as u128;
    (days % catalog_len as u128) as usize
}

/// Selects the puzzle for a calendar date.
///
/// Works on the date of `now` in its own time zone, so any two instants of the
/// same local day select the same puzzle regardless of DST shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSelector {
    epoch: NaiveDate,
    catalog_len: usize,
}

impl PuzzleSelector {
    pub fn new(epoch: NaiveDate, catalog_len: usize) -> Self {
        Self { epoch, catalog_len }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Signed calendar days from the epoch to the date of `now`.
    pub fn elapsed_days<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        now.date_naive().signed_duration_since(self.epoch).num_days()
    }

    pub fn index_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> usize {
        index(self.elapsed_days(now) * DAY_MS, 0, self.catalog_len)
    }

    /// Public, 1-based puzzle number.
    pub fn day_number<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> u64 {
        self.elapsed_days(now).unsigned_abs() + 1
    }
}
