#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pixels2moodistory::models::{DayRecord, Entry, EntryKind, MoodValue};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test with colors disabled.
pub fn p2m_bare() -> Command {
    let mut cmd = cargo_bin_cmd!("pixels2moodistory");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Binary under test using `config` as its configuration file.
pub fn p2m_with_config(config: &Path) -> Command {
    let mut cmd = p2m_bare();
    cmd.arg("--config").arg(config);
    cmd
}

/// Binary under test, isolated from the user's config file.
pub fn p2m(dir: &Path) -> Command {
    p2m_with_config(&dir.join("missing-config.yaml"))
}

/// Create a fresh, empty directory for one test inside the system temp dir
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("p2m_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write `content` to `dir/file_name` and return the full path
pub fn write_input(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("write input file");
    path
}

pub fn mood(value: &str) -> Entry {
    Entry {
        kind: EntryKind::Mood,
        value: Some(MoodValue::from(value)),
        notes: None,
    }
}

pub fn mood_with_notes(value: &str, notes: &str) -> Entry {
    Entry {
        notes: Some(notes.to_string()),
        ..mood(value)
    }
}

pub fn other(kind: &str, notes: Option<&str>) -> Entry {
    Entry {
        kind: EntryKind::Other(kind.to_string()),
        value: None,
        notes: notes.map(str::to_string),
    }
}

pub fn day(date: &str, entries: Vec<Entry>) -> DayRecord {
    DayRecord {
        date: date.to_string(),
        entries,
    }
}
