//! Dispatch from parsed arguments to the API.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and output settings
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::logging;
use super::render::{render_entries, render_messages};
use super::setup::{get_command_help, get_grouped_help, Cli, Commands};
use clap::Parser;
use qcd::api::{CmdResult, QcdApi};
use qcd::config::QcdConfig;
use qcd::error::{QcdError, Result};
use qcd::store::fs_backend::FsBackend;
use qcd::store::resolve::home_dir;
use std::io::IsTerminal;
use tracing::debug;

struct AppContext {
    api: QcdApi<FsBackend>,
    verbose: bool,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = match &cli.command {
        None | Some(Commands::Help) => {
            eprint!("{}", get_grouped_help());
            return Ok(());
        }
        Some(command) => command,
    };

    if cli.help {
        if let Some(def) = command.def() {
            eprint!("{}", get_command_help(&def));
        }
        return Ok(());
    }

    let ctx = init_context(&cli);

    match command {
        Commands::Add { args } => handle_add(&ctx, args),
        Commands::Save { args } => handle_save(&ctx, args),
        Commands::Move { args } => handle_move(&ctx, args),
        Commands::Change { args } => handle_change(&ctx, args),
        Commands::Delete { args } => handle_delete(&ctx, args),
        Commands::List { args } => handle_list(&ctx, args),
        Commands::Get { args } => handle_get(&ctx, args),
        Commands::Help => Ok(()),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let config = QcdConfig::resolve(cli.file.clone(), cli.verbose);
    let store_path = config.store_path(home_dir().as_deref());
    debug!(configured = %config.store_file, resolved = %store_path.display(), "store file");

    AppContext {
        api: QcdApi::new(FsBackend::new(store_path)),
        verbose: config.verbose,
        color: std::io::stderr().is_terminal(),
    }
}

fn handle_add(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.add(args)?;
    report(ctx, &result);
    Ok(())
}

fn handle_save(ctx: &AppContext, args: &[String]) -> Result<()> {
    let cwd = std::env::current_dir().map_err(QcdError::Io)?;
    let result = ctx.api.save(args, &cwd)?;
    report(ctx, &result);
    Ok(())
}

fn handle_move(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.move_entry(args)?;
    report(ctx, &result);
    Ok(())
}

fn handle_change(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.change(args)?;
    report(ctx, &result);
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.delete(args)?;
    report(ctx, &result);
    Ok(())
}

// Listings go to stderr so stdout stays clean for `get`.
fn handle_list(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.list(args)?;
    if let Some(backend) = result.backend {
        debug!(%backend, entries = result.entries.len(), "listing");
    }
    eprint!("{}", render_entries(&result.entries, ctx.color));
    report(ctx, &result);
    Ok(())
}

fn handle_get(ctx: &AppContext, args: &[String]) -> Result<()> {
    let result = ctx.api.get(args)?;
    if let Some(path) = &result.value {
        println!("{}", path);
    }
    Ok(())
}

fn report(ctx: &AppContext, result: &CmdResult) {
    if ctx.verbose {
        eprint!("{}", render_messages(&result.messages, ctx.color));
    }
}
