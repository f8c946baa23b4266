//! RFC 5545 holiday calendar reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};
use walkdir::WalkDir;
use workcal_holidays::HolidaySnapshot;

use crate::error::IcalError;

/// Property tag marking an all-day event start (RFC 5545 §3.8.2.4).
const DATE_TAG: &str = "DTSTART;VALUE=DATE:";

/// File extension recognised while crawling directories.
const ICS_EXTENSION: &str = ".ics";

/// Loads a [`HolidaySnapshot`] from a calendar file or a directory tree.
///
/// A directory is walked recursively (symlinks followed) and every file with
/// an `.ics` extension, matched case-insensitively, contributes its dates;
/// other files are skipped. A plain file is read as a calendar regardless of
/// its name. Duplicate dates across files collapse into one.
///
/// # Errors
///
/// Returns [`IcalError::Io`] on any read failure and
/// [`IcalError::InvalidDate`] when a `DTSTART` value does not parse.
pub fn load_path(path: impl AsRef<Path>) -> Result<HolidaySnapshot, IcalError> {
    let path = path.as_ref();
    let mut dates = Vec::new();
    let mut files = 0usize;

    if path.is_dir() {
        for entry in WalkDir::new(path).follow_links(true) {
            let entry = entry.map_err(|e| IcalError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() || !has_ics_extension(entry.path()) {
                continue;
            }
            read_file(entry.path(), &mut dates)?;
            files += 1;
        }
    } else {
        read_file(path, &mut dates)?;
        files = 1;
    }

    let snapshot = HolidaySnapshot::new(dates);
    info!(
        path = %path.display(),
        files,
        holidays = snapshot.len(),
        "loaded holiday calendar"
    );
    Ok(snapshot)
}

/// Reads the `DTSTART;VALUE=DATE` dates from any line-oriented byte source.
///
/// Lines without the tag are ignored; the tag may appear anywhere in the
/// line (some producers emit additional parameters before it). The result
/// preserves file order and duplicates; callers wanting a queryable set
/// build a [`HolidaySnapshot`] from it.
///
/// # Errors
///
/// Returns [`IcalError::Io`] on read failure and [`IcalError::InvalidDate`]
/// for a tagged value that is not a `yyyyMMdd` date. `origin` only labels
/// the errors.
pub fn read_dates(reader: impl BufRead, origin: &Path) -> Result<Vec<NaiveDate>, IcalError> {
    let mut dates = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| IcalError::Io {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;
        let Some(pos) = line.find(DATE_TAG) else {
            continue;
        };
        let value = line[pos + DATE_TAG.len()..].trim();
        let date = NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| {
            IcalError::InvalidDate {
                value: value.to_string(),
                path: origin.to_path_buf(),
            }
        })?;
        dates.push(date);
    }
    Ok(dates)
}

fn read_file(path: &Path, dates: &mut Vec<NaiveDate>) -> Result<(), IcalError> {
    debug!(path = %path.display(), "reading holiday calendar file");
    let file = File::open(path).map_err(|e| IcalError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut found = read_dates(BufReader::new(file), path)?;
    debug!(path = %path.display(), dates = found.len(), "calendar file read");
    dates.append(&mut found);
    Ok(())
}

fn has_ics_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| {
            n.len() > ICS_EXTENSION.len() && n.to_ascii_lowercase().ends_with(ICS_EXTENSION)
        })
}
