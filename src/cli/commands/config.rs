use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(
    print_config: bool,
    init: bool,
    path: Option<&Path>,
    cfg: &Config,
) -> AppResult<()> {
    // ---- INIT CONFIG ----
    if init {
        Config::init(path)?;
    }

    // ---- PRINT CONFIG ----
    if print_config {
        info("Current configuration:");
        println!("{}", cfg.to_yaml()?);
    }

    if !init && !print_config {
        warning("Nothing to do: use --print or --init.");
    }

    Ok(())
}
