use chrono::{DateTime, Utc};
use colored::Colorize;
use fossle::api::{CmdMessage, MessageLevel, PuzzleView};
use fossle::catalog::CatalogItem;
use fossle::config::FossleConfig;
use fossle::engine::GameState;
use fossle::model::{StatsRecord, MAX_GUESSES};
use fossle::share::square;
use std::fmt::Write;
use timeago::Formatter;

const BAR_WIDTH: usize = 30;
const LINE_NUMBER_WIDTH: usize = 4;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_puzzle(view: &PuzzleView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Fossle #{}", view.day_number).bold());
    out.push('\n');

    if let Some(snippet) = &view.snippet {
        if snippet.shown_lines > 0 {
            for (n, line) in snippet.text.split('\n').enumerate() {
                let _ = writeln!(
                    out,
                    "{} {}",
                    format!("{:>width$}", n + 1, width = LINE_NUMBER_WIDTH).dimmed(),
                    line
                );
            }
        }
        let hidden = snippet.total_lines - snippet.shown_lines;
        if hidden > 0 {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "{:>width$} … {} more lines hidden",
                    "",
                    hidden,
                    width = LINE_NUMBER_WIDTH
                )
                .dimmed()
            );
        }
        out.push('\n');
    }

    let board: String = view.board.slots().iter().map(|o| square(*o)).collect();
    let status = match view.state {
        GameState::Pending => format!("{} of {} guesses left", view.attempts_left, MAX_GUESSES),
        GameState::Won => format!("Solved in {}/{}", view.attempts_used, MAX_GUESSES),
        GameState::Lost => format!("X/{}", MAX_GUESSES),
    };
    let _ = writeln!(out, "{}  {}", board, status);

    if let Some(answer) = &view.answer {
        let _ = writeln!(out, "The answer was {}", answer.bold());
    }
    out
}

pub(super) fn render_stats(record: &StatsRecord, now: DateTime<Utc>) -> String {
    let stats = &record.stats;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8} {:>8} {:>8} {:>8}",
        "Played", "Win %", "Streak", "Best"
    );
    let _ = writeln!(
        out,
        "{:>8} {:>8} {:>8} {:>8}",
        stats.games_played(),
        stats.win_percentage(),
        record.streak,
        record.highest_streak
    );
    out.push('\n');

    let max = stats.wins().map(|(_, n)| n).max().unwrap_or(0).max(stats.lost());
    for (attempt, count) in stats.wins() {
        let _ = writeln!(
            out,
            "{} {} {}",
            attempt,
            "█".repeat(bar_width(count, max)).green(),
            count
        );
    }
    let _ = writeln!(
        out,
        "X {} {}",
        "█".repeat(bar_width(stats.lost(), max)).red(),
        stats.lost()
    );

    if let Some(finished) = record.last_finished_at() {
        let elapsed = now.signed_duration_since(finished);
        let ago = Formatter::new().convert(elapsed.to_std().unwrap_or_default());
        out.push('\n');
        let _ = writeln!(out, "{}", format!("Last finished {}", ago).dimmed());
    }
    out
}

pub(super) fn render_catalog(projects: &[CatalogItem]) -> String {
    let mut out = String::new();
    for project in projects {
        let _ = writeln!(out, "{}", project.name);
    }
    out
}

pub(super) fn render_config(config: &FossleConfig) -> String {
    let mut out = String::new();
    for key in FossleConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        let _ = writeln!(out, "{} = {}", key, value);
    }
    out
}

/// Bar length for `count` scaled against the largest bucket; any non-zero
/// count gets at least one block.
fn bar_width(count: u32, max: u32) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let scaled = (count as usize * BAR_WIDTH) / max as usize;
    scaled.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fossle::model::{GuessRecord, Histogram, Outcome};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0, 10), 0);
        assert_eq!(bar_width(10, 10), BAR_WIDTH);
        assert_eq!(bar_width(1, 1000), 1);
        assert_eq!(bar_width(5, 10), BAR_WIDTH / 2);
    }

    #[test]
    fn test_render_pending_puzzle() {
        plain();
        let mut slots = [Outcome::Unattempted; MAX_GUESSES];
        slots[0] = Outcome::Wrong;
        let view = PuzzleView {
            day_number: 42,
            board: GuessRecord::from_slots(slots),
            state: GameState::Pending,
            attempts_used: 1,
            attempts_left: 6,
            snippet: Some(fossle::api::SnippetView {
                text: "fn main() {".to_string(),
                shown_lines: 1,
                total_lines: 10,
            }),
            answer: None,
        };
        let out = render_puzzle(&view);
        assert!(out.starts_with("Fossle #42"));
        assert!(out.contains("   1 fn main() {"));
        assert!(out.contains("9 more lines hidden"));
        assert!(out.contains("🟨⬛⬛⬛⬛⬛⬛  6 of 7 guesses left"));
        assert!(!out.contains("answer"));
    }

    #[test]
    fn test_render_stats() {
        plain();
        let record = StatsRecord {
            streak: 2,
            highest_streak: 5,
            stats: Histogram::new([0, 2, 1, 0, 0, 0, 0], 1),
            ..Default::default()
        };
        let out = render_stats(&record, Utc::now());
        assert!(out.contains("       4       75        2        5"));
        assert!(out.contains(&format!("2 {} 2", "█".repeat(BAR_WIDTH))));
        assert!(out.contains("1  0"));
        assert!(!out.contains("Last finished"));
    }

    #[test]
    fn test_render_config() {
        let out = render_config(&FossleConfig::default());
        assert_eq!(out, "epoch = 2022-03-09\nsnippets-dir = code_snippets\n");
    }
}
