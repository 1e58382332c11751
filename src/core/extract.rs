//! Day → row extraction.
//!
//! Each day is folded over its entries in input order. The most recent Mood
//! value and the most recent notes text win, independently of each other.

use crate::core::notes::notes_or_placeholder;
use crate::models::{DayRecord, Entry, MoodRow, MoodValue};

/// Running state of the fold over one day's entries.
#[derive(Debug, Default)]
struct DayScan<'a> {
    mood: Option<String>,
    notes: Option<&'a str>,
}

impl<'a> DayScan<'a> {
    /// A Mood entry without a value (null or absent) clears the mood.
    fn push(mut self, entry: &'a Entry) -> Self {
        if entry.kind.is_mood() {
            self.mood = entry.value.as_ref().map(MoodValue::render);
        }
        if let Some(notes) = entry.notes.as_deref() {
            self.notes = Some(notes);
        }
        self
    }
}

/// Build the row for one day, or `None` when the day has no Mood entry
/// (or its last Mood entry carries no value).
///
/// Notes are empty when no entry carried any. Blank notes become
/// `placeholder`; this only happens for days that produce a row.
pub fn extract_day(day: &DayRecord, time: &str, placeholder: &str) -> Option<MoodRow> {
    let scan = day
        .entries
        .iter()
        .fold(DayScan::default(), DayScan::push);

    let mood = scan.mood?;

    let notes_and_thoughts = scan
        .notes
        .map(|raw| notes_or_placeholder(raw, placeholder))
        .unwrap_or_default();

    Some(MoodRow {
        date: day.date.clone(),
        time: time.to_string(),
        mood,
        notes_and_thoughts,
    })
}

/// Rows for every day that recorded a mood, in input order.
pub fn extract_rows(days: &[DayRecord], time: &str, placeholder: &str) -> Vec<MoodRow> {
    days.iter()
        .filter_map(|day| extract_day(day, time, placeholder))
        .collect()
}
