//! # workcal-holidays
//!
//! Holiday snapshots and holiday-aware working-day adjustment.
//!
//! [`HolidaySnapshot`] is an immutable, sorted, deduplicated set of dates
//! with logarithmic membership and range-count queries. [`BusinessCalendar`]
//! composes a weekly pattern from workcal-workweek with an optional snapshot:
//! the pattern-only closed form produces a candidate, a single range query
//! counts the holidays the candidate window swallowed, and a per-day
//! fixed-point correction pushes the candidate one working day further for
//! each of them.
//!
//! ## Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use workcal_holidays::{BusinessCalendar, HolidaySnapshot};
//! use workcal_workweek::WorkWeek;
//!
//! let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//!
//! // 2024-01-05 is a Friday; skipping it pushes the landing past the
//! // following weekend.
//! let holidays = HolidaySnapshot::new([date(1, 5)]);
//! let calendar = BusinessCalendar::with_holidays(WorkWeek::MONDAY_FRIDAY, &holidays);
//! assert_eq!(calendar.days_after(date(1, 1), 5).unwrap(), date(1, 9));
//! ```

mod adjuster;
mod error;
mod snapshot;

pub use adjuster::BusinessCalendar;
pub use error::HolidayError;
pub use snapshot::HolidaySnapshot;
