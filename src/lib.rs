//! pixels2moodistory library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! conversion pipeline used by it.

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
use utils::time::validate_time;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Config { print_config, init }) => {
            cli::commands::config::handle(*print_config, *init, cli.config_file.as_deref(), cfg)
        }
        None => cli::commands::convert::handle(&cli.convert, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // A bad TIME must be reported before any file is touched, config included
    if cli.command.is_none()
        && let Some(t) = &cli.convert.time
    {
        validate_time(t)?;
    }

    let cfg = Config::load(cli.config_file.as_deref())?;
    dispatch(&cli, &cfg)
}
