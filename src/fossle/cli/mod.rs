//! # CLI Layer
//!
//! One possible UI client for fossle. It is the **only** place that:
//! - Parses arguments
//! - Writes to stdout/stderr and decides exit codes
//! - Reads the environment (`FOSSLE_HOME`, `RUST_LOG`)
//! - Touches the clipboard
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions and the version string
//! - [`commands`]: `run()`, context setup and one `handle_*` per subcommand
//! - [`render`]: turns `CmdResult` data into terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
