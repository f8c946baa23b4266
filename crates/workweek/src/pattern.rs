//! Working-week pattern value type and closed-form day arithmetic.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

use crate::error::WorkWeekError;

/// A weekly work/rest pattern: `work_len` consecutive working days starting
/// on `first_day`, followed by `7 - work_len` rest days.
///
/// Values are cheap to copy and immutable; the canonical configurations ship
/// as associated constants and arbitrary patterns can be built with
/// [`WorkWeek::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkWeek {
    first_day: Weekday,
    work_len: u8,
}

impl WorkWeek {
    /// Traditional five-day week, Monday through Friday.
    pub const MONDAY_FRIDAY: WorkWeek = WorkWeek {
        first_day: Weekday::Mon,
        work_len: 5,
    };

    /// Six-day week with Sunday as the only rest day.
    pub const MONDAY_SATURDAY: WorkWeek = WorkWeek {
        first_day: Weekday::Mon,
        work_len: 6,
    };

    /// Five-day week with Friday and Saturday rest days (Israel and most
    /// Muslim countries).
    pub const SUNDAY_THURSDAY: WorkWeek = WorkWeek {
        first_day: Weekday::Sun,
        work_len: 5,
    };

    /// Six-day week with Friday as the only rest day (Iran and a few others).
    pub const SATURDAY_THURSDAY: WorkWeek = WorkWeek {
        first_day: Weekday::Sat,
        work_len: 6,
    };

    /// Six-day week with Saturday as the only rest day (Nepal).
    pub const SUNDAY_FRIDAY: WorkWeek = WorkWeek {
        first_day: Weekday::Sun,
        work_len: 6,
    };

    /// Creates a custom pattern of `work_len` working days starting on
    /// `first_day`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkWeekError::InvalidWorkLength`] if `work_len` is not in
    /// 1..=6. A seven-day week has no rest span and a zero-day week can
    /// never complete a shift, so both are rejected.
    pub fn new(first_day: Weekday, work_len: u8) -> Result<Self, WorkWeekError> {
        if !(1..=6).contains(&work_len) {
            return Err(WorkWeekError::InvalidWorkLength { work_len });
        }
        Ok(Self {
            first_day,
            work_len,
        })
    }

    /// Returns the first working day of the weekly cycle.
    pub fn first_day(self) -> Weekday {
        self.first_day
    }

    /// Returns the number of working days per seven-day cycle (1..=6).
    pub fn work_len(self) -> u8 {
        self.work_len
    }

    /// Returns the number of rest days per seven-day cycle (1..=6).
    pub fn rest_len(self) -> u8 {
        7 - self.work_len
    }

    /// Position of `date` within the pattern's week: 0 for `first_day`,
    /// 6 for the day before it.
    fn week_offset(self, date: NaiveDate) -> i64 {
        let dow = i64::from(date.weekday().num_days_from_monday());
        let first = i64::from(self.first_day.num_days_from_monday());
        (dow - first).rem_euclid(7)
    }

    /// Checks whether `date` is a working day under this pattern.
    pub fn is_working_day(self, date: NaiveDate) -> bool {
        self.week_offset(date) < i64::from(self.work_len)
    }

    /// Counts the working days in the half-open interval `[start, end)`.
    ///
    /// Returns 0 when `end <= start`. Closed-form: with `o` the week offset
    /// of `start`, the count is `G(o + days) - G(o)` where `G(x)` is the
    /// number of working offsets among `0..x`.
    pub fn workdays_between(self, start: NaiveDate, end: NaiveDate) -> i64 {
        let days = (end - start).num_days();
        if days <= 0 {
            return 0;
        }
        let w = i64::from(self.work_len);
        let o = self.week_offset(start);
        working_offsets_below(o + days, w) - working_offsets_below(o, w)
    }

    /// Returns the date `workdays` working days after `date`.
    ///
    /// A rest-day origin is first projected onto the next working day, so
    /// `days_after(date, 0)` is the nearest working day at or after `date`
    /// and applying it twice equals applying it once. Runs in O(1) for any
    /// `workdays`; weekend crossings are computed by integer division.
    ///
    /// # Errors
    ///
    /// Returns [`WorkWeekError::DateOutOfRange`] if the result is not
    /// representable as a [`NaiveDate`].
    pub fn days_after(self, date: NaiveDate, workdays: u32) -> Result<NaiveDate, WorkWeekError> {
        let w = i64::from(self.work_len);
        let mut o = self.week_offset(date);
        let mut delta = 0;
        if o >= w {
            // Mid-rest-span origin: jump to the next week start.
            delta = 7 - o;
            o = 0;
        }
        let idx = o + i64::from(workdays);
        delta += 7 * (idx / w) + idx % w - o;
        date.checked_add_signed(TimeDelta::days(delta))
            .ok_or(WorkWeekError::DateOutOfRange)
    }

    /// Returns the date `workdays` working days before `date`.
    ///
    /// Mirror of [`WorkWeek::days_after`]: a rest-day origin is first
    /// projected onto the previous working day, and `days_before(date, 0)`
    /// is the nearest working day at or before `date`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkWeekError::DateOutOfRange`] if the result is not
    /// representable as a [`NaiveDate`].
    pub fn days_before(self, date: NaiveDate, workdays: u32) -> Result<NaiveDate, WorkWeekError> {
        let w = i64::from(self.work_len);
        let mut o = self.week_offset(date);
        let mut delta = 0;
        if o >= w {
            // Mid-rest-span origin: fall back to the last working day.
            delta = o - (w - 1);
            o = w - 1;
        }
        // Offset counted backwards from the last working day of the week.
        let idx = (w - 1 - o) + i64::from(workdays);
        delta += 7 * (idx / w) + idx % w - (w - 1 - o);
        date.checked_sub_signed(TimeDelta::days(delta))
            .ok_or(WorkWeekError::DateOutOfRange)
    }
}

/// Number of working offsets in `0..x` for a week of `w` working days
/// starting at offset 0.
fn working_offsets_below(x: i64, w: i64) -> i64 {
    w * x.div_euclid(7) + x.rem_euclid(7).min(w)
}
