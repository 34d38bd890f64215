use crate::catalog::{Catalog, CatalogItem};
use crate::commands::status::puzzle_view;
use crate::commands::{CmdMessage, CmdResult};
use crate::content::ContentSource;
use crate::engine::GameState;
use crate::error::{FossleError, Result};
use crate::model::MAX_GUESSES;
use crate::session::Session;
use crate::store::DataStore;
use chrono::{DateTime, TimeZone};
use log::info;

/// How a typed guess maps onto the catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a CatalogItem),
    Ambiguous(Vec<&'a CatalogItem>),
    Unknown,
}

/// Matches `input` against project names: exactly, then ignoring case, then
/// by the repository part after the `/` when that is unique.
pub fn resolve<'a>(catalog: &'a Catalog, input: &str) -> Resolution<'a> {
    let input = input.trim();
    if let Some(item) = catalog.find(input) {
        return Resolution::Found(item);
    }
    if let Some(item) = catalog
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(input))
    {
        return Resolution::Found(item);
    }

    let mut by_repo: Vec<&CatalogItem> = catalog
        .iter()
        .filter(|item| {
            item.name
                .rsplit('/')
                .next()
                .is_some_and(|repo| repo.eq_ignore_ascii_case(input))
        })
        .collect();
    match by_repo.len() {
        0 => Resolution::Unknown,
        1 => Resolution::Found(by_repo.remove(0)),
        _ => Resolution::Ambiguous(by_repo),
    }
}

pub fn run<S: DataStore, Tz: TimeZone>(
    session: &mut Session<S>,
    content: &dyn ContentSource,
    input: &str,
    now: &DateTime<Tz>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let candidate = match resolve(session.catalog(), input) {
        Resolution::Found(item) => item.name.clone(),
        Resolution::Ambiguous(items) => {
            let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
            result.add_message(CmdMessage::warning(format!(
                "'{}' matches several projects: {}",
                input.trim(),
                names.join(", ")
            )));
            return Ok(result);
        }
        // Let the session reject it so unknown names and stale games fail the same way.
        Resolution::Unknown => input.trim().to_string(),
    };

    match session.submit(&candidate, now) {
        Ok(attempt) => match attempt.state {
            GameState::Won => result.add_message(CmdMessage::success(format!(
                "Correct! {} in {}/{}.",
                candidate,
                attempt.number(),
                MAX_GUESSES
            ))),
            GameState::Lost => result.add_message(CmdMessage::error(format!(
                "Out of guesses. The answer was {}.",
                session.engine().target()
            ))),
            GameState::Pending => result.add_message(CmdMessage::info(format!(
                "Not {}. {} guesses left.",
                candidate,
                session.engine().attempts_left()
            ))),
        },
        Err(FossleError::InvalidState(reason)) => {
            info!("guess rejected: {}", reason);
            result.add_message(CmdMessage::warning(rejection_message(
                session, &candidate, &reason,
            )));
        }
        Err(e) => return Err(e),
    }

    Ok(result.with_puzzle(puzzle_view(session, content)?))
}

fn rejection_message<S: DataStore>(session: &Session<S>, candidate: &str, reason: &str) -> String {
    if candidate.is_empty() {
        "Type a project name to guess.".to_string()
    } else if session.engine().is_finished() {
        "Today's puzzle is over. Come back tomorrow!".to_string()
    } else if session.engine().has_tried(candidate) {
        format!("You already guessed {}.", candidate)
    } else if !session.catalog().contains(candidate) {
        format!(
            "Unknown project: {}. Run `fossle catalog` to see the choices.",
            candidate
        )
    } else {
        reason.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{no_snippets, noon, session, wrong_name, wrong_names};
    use crate::commands::MessageLevel;
    use crate::model::{Outcome, StatsRecord};

    #[test]
    fn test_resolve() {
        let catalog = Catalog::builtin();
        assert_eq!(
            resolve(catalog, "rust-lang/rust"),
            Resolution::Found(catalog.find("rust-lang/rust").unwrap())
        );
        assert_eq!(
            resolve(catalog, "  Rust-Lang/Rust "),
            Resolution::Found(catalog.find("rust-lang/rust").unwrap())
        );
        assert_eq!(
            resolve(catalog, "chart.js"),
            Resolution::Found(catalog.find("chartjs/Chart.js").unwrap())
        );
        assert_eq!(resolve(catalog, "nobody/nothing"), Resolution::Unknown);
    }

    #[test]
    fn test_resolve_ambiguous_repo() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("a/tool", "a"),
            CatalogItem::new("b/tool", "b"),
        ])
        .unwrap();
        match resolve(&catalog, "tool") {
            Resolution::Ambiguous(items) => assert_eq!(items.len(), 2),
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_guess() {
        let now = noon();
        let mut s = session(&now);
        let wrong = wrong_name(&s);

        let result = run(&mut s, &no_snippets(), &wrong, &now).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("6 guesses left"));
        let view = result.puzzle.unwrap();
        assert_eq!(view.board.get(0), Some(Outcome::Wrong));
    }

    #[test]
    fn test_correct_guess() {
        let now = noon();
        let mut s = session(&now);
        let answer = s.target().name.to_uppercase();

        let result = run(&mut s, &no_snippets(), &answer, &now).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("1/7"));
        assert!(s.stats().record().won);
    }

    #[test]
    fn test_seventh_wrong_guess_loses() {
        let now = noon();
        let mut s = session(&now);
        let answer = s.target().name.clone();
        let wrong = wrong_names(&s, 7);

        let mut last = CmdResult::default();
        for name in &wrong {
            last = run(&mut s, &no_snippets(), name, &now).unwrap();
        }
        assert_eq!(last.messages[0].level, MessageLevel::Error);
        assert!(last.messages[0].content.contains(&answer));
        assert_eq!(last.puzzle.unwrap().answer, Some(answer));
        assert_eq!(s.stats().record().stats.lost(), 1);
    }

    #[test]
    fn test_unknown_name_is_absorbed() {
        let now = noon();
        let mut s = session(&now);

        let result = run(&mut s, &no_snippets(), "nobody/nothing", &now).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("Unknown project"));
        assert_eq!(s.stats().record(), &StatsRecord::new());
    }

    #[test]
    fn test_repeat_and_finished_are_absorbed() {
        let now = noon();
        let mut s = session(&now);
        let wrong = wrong_name(&s);
        run(&mut s, &no_snippets(), &wrong, &now).unwrap();

        let result = run(&mut s, &no_snippets(), &wrong, &now).unwrap();
        assert!(result.messages[0].content.contains("already guessed"));
        assert_eq!(s.engine().attempts_used(), 1);

        let answer = s.target().name.clone();
        run(&mut s, &no_snippets(), &answer, &now).unwrap();
        let before = s.stats().record().clone();
        let other = wrong_names(&s, 2).remove(1);
        let result = run(&mut s, &no_snippets(), &other, &now).unwrap();
        assert!(result.messages[0].content.contains("puzzle is over"));
        assert_eq!(s.stats().record(), &before);
    }

    #[test]
    fn test_storage_failure_surfaces() {
        let now = noon();
        let mut s = session(&now);
        let wrong = wrong_name(&s);
        s.store_mut().set_simulate_write_error(true);

        assert!(run(&mut s, &no_snippets(), &wrong, &now).is_err());
        assert_eq!(s.engine().attempts_used(), 0);
    }
}
