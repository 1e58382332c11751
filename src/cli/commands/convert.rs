use crate::cli::parser::ConvertArgs;
use crate::cli::prompt::ask_stdin;
use crate::config::Config;
use crate::core::convert::{ConvertLogic, ConvertRequest};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use crate::utils::time::validate_time;

/// Handle the default (conversion) command.
///
/// Missing values are asked for interactively: the file path first, then the
/// time. A time coming from the command line or the config file is validated
/// before any prompt or file access.
pub fn handle(args: &ConvertArgs, cfg: &Config) -> AppResult<()> {
    let given_time = match args.time.as_ref().or(cfg.default_time.as_ref()) {
        Some(t) => Some(validate_time(t)?),
        None => None,
    };

    let source = match &args.json_file_path {
        Some(p) => expand_tilde(p),
        None => expand_tilde(&ask_stdin("JSON file path")?),
    };

    let time = match given_time {
        Some(t) => t,
        None => validate_time(&ask_stdin("Default time (HH:MM:SS)")?)?,
    };

    let placeholder = args
        .placeholder
        .clone()
        .unwrap_or_else(|| cfg.notes_placeholder.clone());

    let req = ConvertRequest {
        source,
        time,
        placeholder,
        force: args.force,
        atomic: cfg.atomic_write,
    };

    ConvertLogic::convert(&req)?;
    Ok(())
}
