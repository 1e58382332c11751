//! The conversion pipeline: load → extract → choose target → write.

use crate::core::extract::extract_rows;
use crate::core::import::load_days;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_rows;
use crate::export::target::{Delimiter, output_path_for};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::same_file;
use crate::utils::time::validate_time;
use std::path::{Path, PathBuf};

/// Everything one conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub source: PathBuf,
    pub time: String,
    pub placeholder: String,
    /// Allow the output to replace the source (`.csv` sources).
    pub force: bool,
    pub atomic: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub delimiter: Delimiter,
    pub days: usize,
    pub rows: usize,
}

impl ConversionSummary {
    /// Days dropped because they had no Mood entry.
    pub fn skipped(&self) -> usize {
        self.days - self.rows
    }
}

pub struct ConvertLogic;

impl ConvertLogic {
    /// Run the whole conversion.
    ///
    /// Nothing is written unless the source was read and decoded in full.
    pub fn convert(req: &ConvertRequest) -> AppResult<ConversionSummary> {
        let time = validate_time(&req.time)?;
        let source = req.source.as_path();

        info(format!("Reading {}", source.display()));
        let days = load_days(source)?;
        let rows = extract_rows(&days, &time, &req.placeholder);

        let delimiter = Delimiter::for_source(source);
        let destination = output_path_for(source);
        ensure_not_source(source, &destination, req.force)?;

        if rows.is_empty() {
            warning("No day with a recorded mood: only the header will be written.");
        }

        write_rows(&destination, delimiter, &rows, req.atomic)?;

        success(format!(
            "Successfully converted {} to {}",
            source.display(),
            destination.display()
        ));

        let summary = ConversionSummary {
            source: source.to_path_buf(),
            destination,
            delimiter,
            days: days.len(),
            rows: rows.len(),
        };
        info(format!(
            "{} rows written, {} days without mood skipped",
            summary.rows,
            summary.skipped()
        ));

        Ok(summary)
    }
}

/// A source that already ends in `.csv` maps onto itself.
fn ensure_not_source(source: &Path, destination: &Path, force: bool) -> AppResult<()> {
    if force || !same_file(source, destination) {
        return Ok(());
    }
    Err(AppError::output(
        destination,
        "would overwrite the source file (use --force to allow it)",
    ))
}
