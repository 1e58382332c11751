//! Loading of the Pixels JSON export.

use crate::errors::{AppError, AppResult};
use crate::models::DayRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and decode the whole export.
/// The file handle is released before returning, on success and on error.
pub fn load_days(path: &Path) -> AppResult<Vec<DayRecord>> {
    let file = File::open(path).map_err(|e| AppError::input(path, e))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| AppError::input(path, e))
}
