use crate::commands::{CmdMessage, CmdResult, PuzzleView, SnippetView};
use crate::content::ContentSource;
use crate::error::Result;
use crate::session::Session;
use crate::snippet;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};

pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    content: &dyn ContentSource,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    session.sync(now)?;
    let view = puzzle_view(session, content)?;

    let mut result = CmdResult::default();
    if view.snippet.is_none() {
        result.add_message(CmdMessage::warning(format!(
            "No snippet found for today's project (looked for '{}').",
            session.target().snippet
        )));
    }
    Ok(result.with_puzzle(view))
}

/// Snapshot of the current puzzle. Once the game is over the whole snippet
/// and the answer are shown.
pub(crate) fn puzzle_view<S: DataStore>(
    session: &Session<S>,
    content: &dyn ContentSource,
) -> Result<PuzzleView> {
    let engine = session.engine();
    let finished = engine.is_finished();

    let snippet = content.fetch(session.target())?.map(|text| {
        let total_lines = snippet::line_count(&text);
        if finished {
            SnippetView {
                text,
                shown_lines: total_lines,
                total_lines,
            }
        } else {
            SnippetView {
                text: snippet::reveal(&text, engine.attempts_used()),
                shown_lines: snippet::reveal_len(total_lines, engine.attempts_used()),
                total_lines,
            }
        }
    });

    Ok(PuzzleView {
        day_number: session.day_number(),
        board: session.stats().record().guess_state.clone(),
        state: engine.state(),
        attempts_used: engine.attempts_used(),
        attempts_left: engine.attempts_left(),
        snippet,
        answer: finished.then(|| engine.target().to_string()),
    })
}
