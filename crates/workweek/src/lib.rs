//! # workcal-workweek
//!
//! Closed-form working-week date arithmetic.
//!
//! A [`WorkWeek`] names which days of the seven-day cycle are working days:
//! `work_len` consecutive working days starting on `first_day`, the rest of
//! the week off. Membership tests, interval counting, and shifting by a
//! number of working days are all constant-time; none of them iterate over
//! calendar days, so shifting by a million working days costs the same as
//! shifting by one.
//!
//! Holidays are deliberately out of scope here: this crate knows only about
//! the weekly cycle. The workcal-holidays crate layers holiday exclusion on
//! top of these primitives.
//!
//! ## Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use workcal_workweek::WorkWeek;
//!
//! let week = WorkWeek::MONDAY_FRIDAY;
//! let mon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! assert!(week.is_working_day(mon));
//! assert_eq!(week.workdays_between(mon, mon + chrono::TimeDelta::days(7)), 5);
//! assert_eq!(
//!     week.days_after(mon, 5).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
//! );
//! ```

mod error;
mod pattern;

pub use error::WorkWeekError;
pub use pattern::WorkWeek;
