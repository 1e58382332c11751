use serde::Deserialize;
use serde_json::Value;

/// One calendar day of the Pixels export.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DayRecord {
    pub date: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A single entry logged within a day.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub value: Option<MoodValue>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum EntryKind {
    Mood,
    Other(String),
}

impl From<String> for EntryKind {
    fn from(s: String) -> Self {
        if s == "Mood" {
            EntryKind::Mood
        } else {
            EntryKind::Other(s)
        }
    }
}

impl EntryKind {
    pub fn is_mood(&self) -> bool {
        matches!(self, EntryKind::Mood)
    }
}

/// Mood value as found in the export.
/// Pixels writes scores as numbers; hand-edited files often carry strings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MoodValue {
    Text(String),
    Number(serde_json::Number),
}

impl MoodValue {
    /// Text written to the `mood` column.
    pub fn render(&self) -> String {
        match self {
            MoodValue::Text(s) => s.clone(),
            MoodValue::Number(n) => Value::Number(n.clone()).to_string(),
        }
    }
}

impl From<&str> for MoodValue {
    fn from(s: &str) -> Self {
        MoodValue::Text(s.to_string())
    }
}
