//! Error types for workcal-ical.

use std::path::PathBuf;

/// Error type for all fallible operations in the workcal-ical crate.
///
/// Covers I/O failures while reading calendar files or walking directories,
/// and malformed `DTSTART` date values.
#[derive(Debug, thiserror::Error)]
pub enum IcalError {
    /// Returned when a calendar file or directory cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a `DTSTART` value does not parse as a `yyyyMMdd` date.
    #[error("invalid DTSTART date '{value}' in {}", path.display())]
    InvalidDate {
        /// The unparseable date value.
        value: String,
        /// Path to the file holding the value.
        path: PathBuf,
    },
}
