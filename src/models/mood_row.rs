/// One output row of the Moodistory CSV.
/// Field order is the column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoodRow {
    pub date: String,
    pub time: String,
    pub mood: String,
    pub notes_and_thoughts: String,
}

/// Header row, always written first.
pub const HEADERS: [&str; 4] = ["date", "time", "mood", "notesAndThoughts"];

impl MoodRow {
    pub fn to_record(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.time.as_str(),
            self.mood.as_str(),
            self.notes_and_thoughts.as_str(),
        ]
    }
}
