use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;

/// Lists guessable projects, optionally only those whose name contains `filter`.
pub fn run<S: DataStore>(session: &Session<S>, filter: Option<&str>) -> Result<CmdResult> {
    let needle = filter.map(|f| f.trim().to_lowercase());
    let projects: Vec<_> = session
        .catalog()
        .iter()
        .filter(|item| match &needle {
            Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if projects.is_empty() {
        result.add_message(CmdMessage::info("No matching projects."));
    }
    Ok(result.with_projects(projects))
}
