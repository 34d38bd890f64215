use super::render::{print_messages, render_catalog, render_config, render_puzzle, render_stats};
use super::setup::{Cli, Commands};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use fossle::api::{ConfigAction, FossleApi, FosslePaths};
use fossle::clipboard::copy_to_clipboard;
use fossle::config::FossleConfig;
use fossle::content::DirContentSource;
use fossle::error::{FossleError, Result};
use fossle::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: FossleApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Status) | None => handle_status(&mut ctx),
        Some(Commands::Guess { name }) => handle_guess(&mut ctx, name.join(" ")),
        Some(Commands::Stats) => handle_stats(&mut ctx),
        Some(Commands::Share) => handle_share(&mut ctx),
        Some(Commands::Export) => handle_export(&mut ctx),
        Some(Commands::Import { token }) => handle_import(&mut ctx, token),
        Some(Commands::Catalog { filter }) => handle_catalog(&ctx, filter),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("FOSSLE_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "fossle", "fossle")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FossleError::Config("Could not determine a data directory; set FOSSLE_HOME".into())
        })
}

fn init_context() -> Result<AppContext> {
    let data = data_dir()?;
    let config = FossleConfig::load(&data)?;
    let content = DirContentSource::new(config.snippets_path(&data));
    log::debug!(
        "data dir {}, snippets from {}",
        data.display(),
        content.root().display()
    );

    let store = FileStore::new(data.clone());
    let api = FossleApi::open(
        store,
        FosslePaths { data },
        Box::new(content),
        fossle::api::SystemClock,
    )?;
    Ok(AppContext { api })
}

fn handle_status(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(puzzle) = &result.puzzle {
        print!("{}", render_puzzle(puzzle));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_guess(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.guess(&name)?;
    if let Some(puzzle) = &result.puzzle {
        print!("{}", render_puzzle(puzzle));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(record) = &result.record {
        print!("{}", render_stats(record, Utc::now()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_share(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.share()?;
    if let Some(card) = &result.output {
        println!("{}", card);
        copy_output(card);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.export()?;
    if let Some(token) = &result.output {
        println!("{}", token);
        copy_output(token);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, token: String) -> Result<()> {
    let result = ctx.api.import(&token)?;
    print_messages(&result.messages);
    if let Some(record) = &result.record {
        print!("{}", render_stats(record, Utc::now()));
    }
    Ok(())
}

fn handle_catalog(ctx: &AppContext, filter: Option<String>) -> Result<()> {
    let result = ctx.api.catalog(filter.as_deref())?;
    print!("{}", render_catalog(&result.projects));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Clipboard copies are best-effort: a missing tool is a warning.
fn copy_output(text: &str) {
    match copy_to_clipboard(text) {
        Ok(()) => eprintln!("{}", "Copied to clipboard.".dimmed()),
        Err(e) => eprintln!(
            "{}",
            format!("Warning: Failed to copy to clipboard: {}", e).yellow()
        ),
    }
}
