mod common;
use common::test_dir;
use pixels2moodistory::errors::AppError;
use pixels2moodistory::export::{Delimiter, output_path_for, write_rows};
use pixels2moodistory::models::MoodRow;
use std::fs;
use std::path::{Path, PathBuf};

fn row(date: &str, mood: &str, notes: &str) -> MoodRow {
    MoodRow {
        date: date.into(),
        time: "09:00:00".into(),
        mood: mood.into(),
        notes_and_thoughts: notes.into(),
    }
}

#[test]
fn test_delimiter_follows_source_extension() {
    assert_eq!(Delimiter::for_source(Path::new("export.json")), Delimiter::Comma);
    assert_eq!(Delimiter::for_source(Path::new("a/b.bar.json")), Delimiter::Comma);
    assert_eq!(Delimiter::for_source(Path::new("export.txt")), Delimiter::Semicolon);
    assert_eq!(Delimiter::for_source(Path::new("export.JSON")), Delimiter::Semicolon);
    assert_eq!(Delimiter::for_source(Path::new("readings.csv")), Delimiter::Semicolon);
    assert_eq!(Delimiter::for_source(Path::new("export")), Delimiter::Semicolon);
}

#[test]
fn test_output_path_replaces_extension() {
    assert_eq!(output_path_for(Path::new("foo.json")), PathBuf::from("foo.csv"));
    assert_eq!(output_path_for(Path::new("foo.bar.json")), PathBuf::from("foo.bar.csv"));
    assert_eq!(output_path_for(Path::new("dir/foo")), PathBuf::from("dir/foo.csv"));
    assert_eq!(output_path_for(Path::new("readings.csv")), PathBuf::from("readings.csv"));
}

#[test]
fn test_header_is_written_without_rows() {
    let dir = test_dir("export_header_only");
    for atomic in [true, false] {
        let out = dir.join(format!("empty_{atomic}.csv"));
        write_rows(&out, Delimiter::Comma, &[], atomic).expect("write");
        assert_eq!(
            fs::read_to_string(&out).expect("read"),
            "date,time,mood,notesAndThoughts\n"
        );
    }
}

#[test]
fn test_semicolon_output() {
    let dir = test_dir("export_semicolon");
    let out = dir.join("out.csv");
    write_rows(&out, Delimiter::Semicolon, &[row("2024-01-01", "3", "a, b")], true)
        .expect("write");
    assert_eq!(
        fs::read_to_string(&out).expect("read"),
        "date;time;mood;notesAndThoughts\n2024-01-01;09:00:00;3;a, b\n"
    );
}

#[test]
fn test_fields_are_quoted_only_when_needed() {
    let dir = test_dir("export_quoting");
    let out = dir.join("out.csv");
    let rows = [
        row("2024-01-01", "3", "plain"),
        row("2024-01-02", "4", "one, two"),
        row("2024-01-03", "5", "she said \"hi\""),
        row("2024-01-04", "2", "line1\nline2"),
    ];
    write_rows(&out, Delimiter::Comma, &rows, true).expect("write");

    let content = fs::read_to_string(&out).expect("read");
    assert!(content.contains("2024-01-01,09:00:00,3,plain\n"));
    assert!(content.contains("2024-01-02,09:00:00,4,\"one, two\"\n"));
    assert!(content.contains("2024-01-03,09:00:00,5,\"she said \"\"hi\"\"\"\n"));
    assert!(content.contains("2024-01-04,09:00:00,2,\"line1\nline2\"\n"));

    // Parsing back with the same delimiter yields the original notes.
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_path(&out)
        .expect("open csv");
    let notes: Vec<String> = rdr
        .records()
        .map(|r| r.expect("record")[3].to_string())
        .collect();
    let expected: Vec<String> = rows.iter().map(|r| r.notes_and_thoughts.clone()).collect();
    assert_eq!(notes, expected);
}

#[test]
fn test_existing_output_is_replaced() {
    let dir = test_dir("export_replace");
    let out = dir.join("out.csv");
    fs::write(&out, "OLD_CONTENT").expect("seed");

    write_rows(&out, Delimiter::Comma, &[row("2024-01-01", "3", "")], true).expect("write");

    let content = fs::read_to_string(&out).expect("read");
    assert_eq!(content, "date,time,mood,notesAndThoughts\n2024-01-01,09:00:00,3,\n");
}

#[test]
fn test_unwritable_destination_is_output_error() {
    let dir = test_dir("export_unwritable");
    let out = dir.join("no_such_dir").join("out.csv");

    for atomic in [true, false] {
        let err = write_rows(&out, Delimiter::Comma, &[], atomic).unwrap_err();
        assert!(matches!(err, AppError::Output { .. }));
        assert!(err.to_string().starts_with("Unable to create file"));
        assert!(!out.exists());
    }

    // No temporary leftovers in the directory that does exist.
    assert_eq!(fs::read_dir(&dir).expect("list").count(), 0);
}

#[cfg(unix)]
fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).expect("metadata").permissions().mode() & 0o777
}

#[cfg(unix)]
#[test]
fn test_atomic_output_mode_matches_direct_write() {
    let dir = test_dir("export_mode_new");
    let direct = dir.join("direct.csv");
    let atomic = dir.join("atomic.csv");

    write_rows(&direct, Delimiter::Comma, &[row("2024-01-01", "3", "")], false).expect("write");
    write_rows(&atomic, Delimiter::Comma, &[row("2024-01-01", "3", "")], true).expect("write");

    assert_eq!(mode(&atomic), mode(&direct));
}

#[cfg(unix)]
#[test]
fn test_atomic_replace_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = test_dir("export_mode_existing");
    let out = dir.join("out.csv");
    fs::write(&out, "OLD_CONTENT").expect("seed");
    fs::set_permissions(&out, fs::Permissions::from_mode(0o640)).expect("chmod");

    write_rows(&out, Delimiter::Comma, &[row("2024-01-01", "3", "")], true).expect("write");

    assert_eq!(mode(&out), 0o640);
    assert_ne!(fs::read_to_string(&out).expect("read"), "OLD_CONTENT");
}
