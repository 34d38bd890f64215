//! # Fossle Architecture
//!
//! Fossle is a daily guessing game: every calendar day selects one open-source
//! project from a fixed catalog, shows a growing slice of its code, and gives
//! the player seven guesses to name it. Statistics (streaks and a win
//! histogram) persist between days and travel between machines as a base64
//! token.
//!
//! Like any game it is a **library that happens to have a CLI client**. The
//! rules never print, never read the clock on their own and never exit.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders results, copies to clipboard   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session, the content source and the clock       │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs)                  │
//! │  - Resolves guesses, absorbs rejected ones into messages    │
//! │  - Builds puzzle views, share cards and export tokens       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - puzzle: which project a date selects                     │
//! │  - engine: one day's guess state machine                    │
//! │  - store: the persisted record, day rollover, aggregates    │
//! │  - codec, snippet, share: pure transformations              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Days
//!
//! A "day" is always a calendar date in the time zone of the `now` being
//! passed around, never a count of 24 hour blocks. This keeps the daily
//! puzzle and the streak rules stable across DST changes.
//!
//! ## Persistence
//!
//! The only mutable shared state is the [`model::StatsRecord`]. Every change
//! goes through [`store::StatsStore`], which writes the new record before
//! exposing it; a failed write leaves both the record and the engine as they
//! were. The names guessed on the current puzzle are saved beside it so
//! repeats are caught across runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`session`]: Today's puzzle, engine and record, kept in step
//! - [`catalog`]: The guessable projects, sorted by name
//! - [`puzzle`]: Date to catalog index
//! - [`engine`]: Per-day guess state machine
//! - [`store`]: Storage abstraction, implementations and the stats rules
//! - [`model`]: The persisted record and its parts
//! - [`codec`]: Export/import tokens
//! - [`snippet`]: How much of the snippet each attempt reveals
//! - [`content`]: Where snippet text comes from
//! - [`share`]: The result card
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod codec;
pub mod commands;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod model;
pub mod puzzle;
pub mod session;
pub mod share;
pub mod snippet;
pub mod store;
