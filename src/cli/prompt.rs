//! Interactive prompts for values missing from the command line.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

/// Ask `label` on `out` and read one line from `input`.
/// The answer is trimmed; an empty answer (or EOF) is a validation error.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> AppResult<String> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    if answer.is_empty() {
        return Err(AppError::Validation(format!("No value given for '{label}'")));
    }
    Ok(answer.to_string())
}

/// Prompt on the terminal.
pub fn ask_stdin(label: &str) -> AppResult<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(&mut input, &mut io::stdout(), label)
}
