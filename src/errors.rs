//! Unified application error type.
//! Every layer (cli, config, core, export) returns AppError so that the
//! entry point can report any failure with a single message.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO (prompts, terminal)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Conversion
    // ---------------------------
    #[error("Unable to open or parse file {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    #[error("Unable to create file {}: {reason}", path.display())]
    Output { path: PathBuf, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn input(path: &Path, reason: impl ToString) -> Self {
        AppError::Input {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn output(path: &Path, reason: impl ToString) -> Self {
        AppError::Output {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
