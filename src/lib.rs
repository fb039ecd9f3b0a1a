//! fittracker library root.
//! Exposes the entry store, the CLI parser, and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Session) => cli::commands::session::handle(cfg),
        Some(Commands::Exercises) => cli::commands::exercises::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logging::enable_logging(cli.verbose)?;

    let config_path = utils::path::resolve_config_path(cli.config.as_deref());

    // a broken file must not lock the user out of `config --edit`
    let cfg = match Config::load(Some(&config_path)) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            ui::messages::warning(&e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    utils::colors::set_enabled(cfg.color && !cli.no_color);

    dispatch(&cli, &cfg, &config_path)
}
