pub mod day_record;
pub mod mood_row;

pub use day_record::{DayRecord, Entry, EntryKind, MoodValue};
pub use mood_row::{HEADERS, MoodRow};
