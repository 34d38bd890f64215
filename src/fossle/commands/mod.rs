use crate::catalog::CatalogItem;
use crate::config::FossleConfig;
use crate::engine::GameState;
use crate::model::{GuessRecord, StatsRecord};
use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod export;
pub mod guess;
pub mod import;
pub mod share;
pub mod stats;
pub mod status;

#[derive(Debug, Clone)]
pub struct FosslePaths {
    /// Holds `state.json` and `config.json`.
    pub data: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The lines of today's snippet the player has earned so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetView {
    pub text: String,
    pub shown_lines: usize,
    pub total_lines: usize,
}

/// Everything a UI needs to draw today's puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleView {
    pub day_number: u64,
    pub board: GuessRecord,
    pub state: GameState,
    pub attempts_used: usize,
    pub attempts_left: usize,
    /// `None` when the content source has nothing for today's project.
    pub snippet: Option<SnippetView>,
    /// Only disclosed once the puzzle is over.
    pub answer: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub puzzle: Option<PuzzleView>,
    pub record: Option<StatsRecord>,
    /// Text meant to be copied verbatim: a share card or an export token.
    pub output: Option<String>,
    pub projects: Vec<CatalogItem>,
    pub config: Option<FossleConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_puzzle(mut self, puzzle: PuzzleView) -> Self {
        self.puzzle = Some(puzzle);
        self
    }

    pub fn with_record(mut self, record: StatsRecord) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_projects(mut self, projects: Vec<CatalogItem>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_config(mut self, config: FossleConfig) -> Self {
        self.config = Some(config);
        self
    }
}
