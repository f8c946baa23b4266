use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;
use workcal_ical::{load_path, IcalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ical(dates: &[&str]) -> String {
    let mut out = String::from("BEGIN:VCALENDAR\r\n");
    for d in dates {
        out.push_str("BEGIN:VEVENT\r\n");
        out.push_str(&format!("DTSTART;VALUE=DATE:{d}\r\n"));
        out.push_str("SUMMARY:holiday\r\n");
        out.push_str("END:VEVENT\r\n");
    }
    out.push_str("END:VCALENDAR\r\n");
    out
}

#[test]
fn loads_a_single_file() {
    let dir = tempdir().expect("create temp dir");
    let file = dir.path().join("uk.ics");
    fs::write(&file, ical(&["20240101", "20241225", "20241226"])).unwrap();

    let snapshot = load_path(&file).unwrap();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.contains(date(2024, 12, 25)));
    assert_eq!(snapshot.first(), Some(date(2024, 1, 1)));
}

#[test]
fn walks_directories_recursively() {
    let dir = tempdir().expect("create temp dir");
    let nested = dir.path().join("regional").join("extra");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("national.ics"), ical(&["20240101"])).unwrap();
    fs::write(nested.join("regional.ics"), ical(&["20240308", "20240501"])).unwrap();

    let snapshot = load_path(dir.path()).unwrap();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.contains(date(2024, 3, 8)));
    assert!(snapshot.contains(date(2024, 5, 1)));
}

#[test]
fn skips_files_without_ics_extension() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("holidays.ics"), ical(&["20240101"])).unwrap();
    fs::write(dir.path().join("notes.txt"), ical(&["20240704"])).unwrap();

    let snapshot = load_path(dir.path()).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(!snapshot.contains(date(2024, 7, 4)));
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("holidays.ICS"), ical(&["20240101"])).unwrap();

    let snapshot = load_path(dir.path()).unwrap();
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn duplicates_across_files_collapse() {
    let dir = tempdir().expect("create temp dir");
    fs::write(dir.path().join("a.ics"), ical(&["20240101", "20240501"])).unwrap();
    fs::write(dir.path().join("b.ics"), ical(&["20240501", "20241225"])).unwrap();

    let snapshot = load_path(dir.path()).unwrap();
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn empty_directory_yields_empty_snapshot() {
    let dir = tempdir().expect("create temp dir");
    let snapshot = load_path(dir.path()).unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn malformed_date_is_an_error() {
    let dir = tempdir().expect("create temp dir");
    let file = dir.path().join("bad.ics");
    fs::write(&file, "DTSTART;VALUE=DATE:20241332\n").unwrap();

    let err = load_path(&file).unwrap_err();
    assert!(matches!(err, IcalError::InvalidDate { value, .. } if value == "20241332"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("create temp dir");
    let err = load_path(dir.path().join("absent.ics")).unwrap_err();
    assert!(matches!(err, IcalError::Io { .. }));
}
