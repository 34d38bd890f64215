//! The spoiler-free result card players paste into chats.
//!
//! ```text
//! Fossle 312 3/7
//!
//! 🟨🟨🟩⬛⬛⬛⬛
//! ```

use crate::model::{Outcome, StatsRecord, MAX_GUESSES};

const CORRECT_SQUARE: &str = "🟩";
const WRONG_SQUARE: &str = "🟨";
const EMPTY_SQUARE: &str = "⬛";

pub fn square(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => CORRECT_SQUARE,
        Outcome::Wrong => WRONG_SQUARE,
        Outcome::Unattempted => EMPTY_SQUARE,
    }
}

/// Renders the card for a finished puzzle, `None` while it is still open.
pub fn share_text(day_number: u64, record: &StatsRecord) -> Option<String> {
    if !record.completed {
        return None;
    }
    let score = if record.won {
        record.guess_state.attempted().to_string()
    } else {
        "X".to_string()
    };
    let squares: String = record
        .guess_state
        .slots()
        .iter()
        .map(|outcome| square(*outcome))
        .collect();
    Some(format!(
        "Fossle {} {}/{}\n\n{}",
        day_number, score, MAX_GUESSES, squares
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::board;

    #[test]
    fn test_won_card() {
        let record = StatsRecord {
            guess_state: board("xxo...."),
            completed: true,
            won: true,
            ..Default::default()
        };
        assert_eq!(
            share_text(312, &record).unwrap(),
            "Fossle 312 3/7\n\n🟨🟨🟩⬛⬛⬛⬛"
        );
    }

    #[test]
    fn test_lost_card() {
        let record = StatsRecord {
            guess_state: board("xxxxxxx"),
            completed: true,
            won: false,
            ..Default::default()
        };
        assert_eq!(
            share_text(5, &record).unwrap(),
            "Fossle 5 X/7\n\n🟨🟨🟨🟨🟨🟨🟨"
        );
    }

    #[test]
    fn test_unfinished_has_no_card() {
        let record = StatsRecord {
            guess_state: board("xx....."),
            ..Default::default()
        };
        assert!(share_text(1, &record).is_none());
    }
}
