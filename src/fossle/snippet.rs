//! How much of today's code snippet to show.
//!
//! The visible window grows with every guess: with `a` attempts used the
//! first `L / (MAX_GUESSES - a + 1)` lines are shown, and the whole snippet
//! once a single attempt remains.

use crate::model::MAX_GUESSES;

/// Number of leading lines to reveal out of `total_lines`.
pub fn reveal_len(total_lines: usize, attempts_used: usize) -> usize {
    let attempts_used = attempts_used.min(MAX_GUESSES);
    if attempts_used + 1 >= MAX_GUESSES {
        return total_lines;
    }
    total_lines / (MAX_GUESSES - attempts_used + 1)
}

/// The revealed prefix of `content`, split and rejoined on `\n`.
pub fn reveal(content: &str, attempts_used: usize) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let shown = reveal_len(lines.len(), attempts_used);
    lines[..shown].join("\n")
}

/// Line count as seen by [`reveal`].
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}
