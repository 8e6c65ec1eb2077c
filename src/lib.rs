//! rbiweekly library root.
//! Exposes the CLI parser, the high-level run() function and the period/pay core.

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
pub fn dispatch(cli: &Cli, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg_path),
        Commands::Session { .. } => {
            let cfg = Config::load_from(cfg_path)?;
            cli::commands::session::handle(&cli.command, &cfg)
        }
        Commands::Calc { .. } => {
            let cfg = Config::load_from(cfg_path)?;
            cli::commands::calc::handle(&cli.command, &cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `--config` wins over the default location
    let cfg_path = Config::resolve_path(cli.config.as_deref());

    dispatch(&cli, &cfg_path)
}
