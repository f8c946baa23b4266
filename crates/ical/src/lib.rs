//! # workcal-ical
//!
//! iCalendar (RFC 5545) holiday ingestion.
//!
//! Reads all-day `DTSTART;VALUE=DATE` entries from `.ics` files -- a single
//! file or a directory tree of them -- and produces the immutable
//! [`workcal_holidays::HolidaySnapshot`] the adjustment core queries. The
//! core places no constraint on where the bytes come from beyond "sorted,
//! deduplicated dates"; this crate is one such producer, and
//! [`read_dates`] accepts any buffered byte source for others.
//!
//! ## Quick start
//!
//! ```no_run
//! let holidays = workcal_ical::load_path("holidays/")?;
//! println!("{} holidays known", holidays.len());
//! # Ok::<(), workcal_ical::IcalError>(())
//! ```

mod error;
mod read;

pub use error::IcalError;
pub use read::{load_path, read_dates};
