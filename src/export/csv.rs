// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::target::Delimiter;
use crate::models::{HEADERS, MoodRow};
use csv::{QuoteStyle, Writer, WriterBuilder};
use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

fn builder(delimiter: Delimiter) -> WriterBuilder {
    let mut b = WriterBuilder::new();
    b.delimiter(delimiter.as_byte())
        .quote(b'"')
        .double_quote(true)
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false);
    b
}

/// Header first, then one record per row.
fn write_records<W: Write>(wtr: &mut Writer<W>, rows: &[MoodRow]) -> csv::Result<()> {
    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write header and rows to `path`.
///
/// With `atomic`, records go to a temporary file next to `path` which is
/// renamed over it once everything is flushed; a failed run leaves `path`
/// untouched. Without it the file is written in place.
pub fn write_rows(
    path: &Path,
    delimiter: Delimiter,
    rows: &[MoodRow],
    atomic: bool,
) -> AppResult<()> {
    if atomic {
        write_atomic(path, delimiter, rows)
    } else {
        write_direct(path, delimiter, rows)
    }
}

fn write_direct(path: &Path, delimiter: Delimiter, rows: &[MoodRow]) -> AppResult<()> {
    let mut wtr = builder(delimiter)
        .from_path(path)
        .map_err(|e| AppError::output(path, e))?;
    write_records(&mut wtr, rows).map_err(|e| AppError::output(path, e))
}

fn write_atomic(path: &Path, delimiter: Delimiter, rows: &[MoodRow]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // A replaced file keeps its mode; a new one gets what a plain create would.
    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut tmp = temp_builder(existing.as_ref())
        .tempfile_in(dir)
        .map_err(|e| AppError::output(path, e))?;
    {
        let mut wtr = builder(delimiter).from_writer(&mut tmp);
        write_records(&mut wtr, rows).map_err(|e| AppError::output(path, e))?;
    }
    restore_mode(tmp.as_file(), existing).map_err(|e| AppError::output(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| AppError::output(path, e))?;

    // Dropping an unpersisted NamedTempFile removes it.
    tmp.persist(path)
        .map_err(|e| AppError::output(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn temp_builder(existing: Option<&Permissions>) -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut b = Builder::new();
    // The mode goes through open(2), so the umask applies to it.
    b.prefix(".pixels2moodistory-").suffix(".tmp").permissions(
        existing
            .cloned()
            .unwrap_or_else(|| Permissions::from_mode(0o666)),
    );
    b
}

/// The umask may have narrowed the mode given at creation.
#[cfg(unix)]
fn restore_mode(file: &fs::File, existing: Option<Permissions>) -> std::io::Result<()> {
    match existing {
        Some(perms) => file.set_permissions(perms),
        None => Ok(()),
    }
}

#[cfg(not(unix))]
fn restore_mode(_file: &fs::File, _existing: Option<Permissions>) -> std::io::Result<()> {
    Ok(())
}

#[cfg(not(unix))]
fn temp_builder(_existing: Option<&Permissions>) -> Builder<'static, 'static> {
    let mut b = Builder::new();
    b.prefix(".pixels2moodistory-").suffix(".tmp");
    b
}
