use clap::{Parser, Subcommand};

/// Returns the version string, with git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("FOSSLE_GIT_HASH");
    const GIT_DATE: &str = env!("FOSSLE_GIT_DATE");
    const IS_RELEASE: &str = env!("FOSSLE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "fossle", bin_name = "fossle", version = get_version())]
#[command(about = "Guess the open-source project from its code, once a day", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log what the game is doing (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's puzzle (default)
    Status,

    /// Guess today's project, e.g. `fossle guess rust-lang/rust`
    #[command(alias = "g")]
    Guess {
        /// Project name; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show streaks and the win histogram
    Stats,

    /// Print and copy today's result card
    Share,

    /// Print and copy a token holding your statistics
    Export,

    /// Replace your statistics with ones from an exported token
    Import {
        /// Token printed by `fossle export`
        token: String,
    },

    /// List the projects you can guess
    #[command(alias = "ls")]
    Catalog {
        /// Only list projects whose name contains this text
        filter: Option<String>,
    },

    /// Show or set configuration
    Config {
        /// Setting to show or change (epoch, snippets-dir)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
