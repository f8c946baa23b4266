//! Holiday-aware working-day adjustment over a weekly pattern.

use chrono::NaiveDate;
use workcal_workweek::WorkWeek;

use crate::error::HolidayError;
use crate::snapshot::HolidaySnapshot;

/// A [`WorkWeek`] composed with an optional [`HolidaySnapshot`].
///
/// Without a snapshot every operation reduces to the pattern-only closed
/// form; with one, shifts are corrected so that holidays falling on working
/// days consume no working-day budget. An absent snapshot is a documented
/// mode, not an error.
///
/// The calendar borrows its snapshot, so a single snapshot can back any
/// number of calendars (and threads) at once.
#[derive(Debug, Clone, Copy)]
pub struct BusinessCalendar<'a> {
    week: WorkWeek,
    holidays: Option<&'a HolidaySnapshot>,
}

impl<'a> BusinessCalendar<'a> {
    /// A pattern-only calendar with no holidays.
    pub fn new(week: WorkWeek) -> Self {
        Self {
            week,
            holidays: None,
        }
    }

    /// A calendar that excludes the holidays in `holidays` on top of the
    /// pattern's rest days.
    pub fn with_holidays(week: WorkWeek, holidays: &'a HolidaySnapshot) -> Self {
        Self {
            week,
            holidays: Some(holidays),
        }
    }

    /// Returns the weekly pattern this calendar is built on.
    pub fn week(&self) -> WorkWeek {
        self.week
    }

    /// Checks whether `date` is a working day: working under the pattern and
    /// not a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.week.is_working_day(date) && !self.is_holiday(date)
    }

    /// Checks whether `date` is a holiday in the attached snapshot.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.is_some_and(|h| h.contains(date))
    }

    /// Counts the working days in the half-open interval `[start, end)`,
    /// excluding holidays. Returns 0 when `end <= start`.
    pub fn workdays_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let base = self.week.workdays_between(start, end);
        base - self.working_holidays_between(start, end)
    }

    /// Returns the date `workdays` working days after `date`, skipping both
    /// rest days and holidays.
    ///
    /// The pattern-only candidate is computed in closed form, then corrected:
    /// every holiday on a working day inside `[date, candidate]` pushes the
    /// candidate one further working day ahead. The correction advances one
    /// calendar day at a time, re-checking both predicates at each position;
    /// a push can expose a holiday that sat just past the old window, and
    /// that newly exposed holiday is found by the inclusive candidate check,
    /// so the loop runs exactly once per consumed holiday and terminates.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError`] if the result leaves chrono's representable
    /// date range.
    pub fn days_after(&self, date: NaiveDate, workdays: u32) -> Result<NaiveDate, HolidayError> {
        let mut candidate = self.week.days_after(date, workdays)?;
        let Some(holidays) = self.holidays else {
            return Ok(candidate);
        };
        let mut pushes = self.working_holidays_between(date, candidate)
            + i64::from(holidays.contains(candidate));
        while pushes > 0 {
            loop {
                candidate = candidate.succ_opt().ok_or(HolidayError::DateOutOfRange)?;
                if self.week.is_working_day(candidate) && !holidays.contains(candidate) {
                    break;
                }
            }
            pushes -= 1;
        }
        Ok(candidate)
    }

    /// Returns the date `workdays` working days before `date`, skipping both
    /// rest days and holidays. Mirror of [`BusinessCalendar::days_after`].
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError`] if the result leaves chrono's representable
    /// date range.
    pub fn days_before(&self, date: NaiveDate, workdays: u32) -> Result<NaiveDate, HolidayError> {
        let mut candidate = self.week.days_before(date, workdays)?;
        let Some(holidays) = self.holidays else {
            return Ok(candidate);
        };
        let mut pushes = self.working_holidays_between(candidate, date)
            + i64::from(holidays.contains(date) && self.week.is_working_day(date));
        while pushes > 0 {
            loop {
                candidate = candidate.pred_opt().ok_or(HolidayError::DateOutOfRange)?;
                if self.week.is_working_day(candidate) && !holidays.contains(candidate) {
                    break;
                }
            }
            pushes -= 1;
        }
        Ok(candidate)
    }

    /// Holidays in `[start, end)` that fall on pattern working days.
    ///
    /// Holidays on rest days are already skipped by the pattern arithmetic
    /// and must not consume a correction step. The sorted range slice keeps
    /// this at O(log n) boundary searches plus the holidays actually inside
    /// the window.
    fn working_holidays_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        match self.holidays {
            None => 0,
            Some(holidays) => holidays
                .between(start, end)
                .iter()
                .filter(|d| self.week.is_working_day(**d))
                .count() as i64,
        }
    }
}
