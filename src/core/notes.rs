//! Free-text notes cleanup.

/// Placeholder written when a day's notes are blank.
pub const DEFAULT_PLACEHOLDER: &str = "Nothing noted";

/// Remove the indentation shared by every line, then trim the block.
pub fn clean_notes(raw: &str) -> String {
    textwrap::dedent(raw).trim().to_string()
}

/// Cleaned notes, or `placeholder` when nothing is left after cleaning.
pub fn notes_or_placeholder(raw: &str, placeholder: &str) -> String {
    let cleaned = clean_notes(raw);
    if cleaned.is_empty() {
        placeholder.to_string()
    } else {
        cleaned
    }
}
