//! Bridge CLI flags and TOML configuration to the core calendar types.

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use tracing::debug;
use workcal_holidays::{BusinessCalendar, HolidaySnapshot};
use workcal_workweek::WorkWeek;

use crate::cli::{CalendarArgs, PatternName};
use crate::config::WorkcalConfig;

/// A resolved calendar selection: pattern plus optional holiday snapshot.
///
/// Owns the snapshot so the borrowed [`BusinessCalendar`] handed to command
/// code stays valid for the duration of the command.
pub struct CalendarSelection {
    week: WorkWeek,
    holidays: Option<HolidaySnapshot>,
}

impl CalendarSelection {
    /// The calendar view over this selection.
    pub fn calendar(&self) -> BusinessCalendar<'_> {
        match &self.holidays {
            Some(holidays) => BusinessCalendar::with_holidays(self.week, holidays),
            None => BusinessCalendar::new(self.week),
        }
    }
}

/// Resolves the calendar from CLI flags, falling back to the config file and
/// finally to Monday-Friday with no holidays.
pub fn resolve(args: &CalendarArgs, config: &WorkcalConfig) -> Result<CalendarSelection> {
    let name = match args.pattern {
        Some(name) => name,
        None => match &config.calendar.pattern {
            Some(text) => <PatternName as ValueEnum>::from_str(text, true)
                .map_err(|_| anyhow!("unknown working-week pattern '{text}' in config"))?,
            None => PatternName::MondayFriday,
        },
    };
    let week = name.week();

    let holidays_path = args
        .holidays
        .clone()
        .or_else(|| config.calendar.holidays.clone());
    let holidays = match holidays_path {
        Some(path) => {
            let snapshot = workcal_ical::load_path(&path)
                .with_context(|| format!("failed to load holidays from {}", path.display()))?;
            Some(snapshot)
        }
        None => None,
    };

    debug!(
        pattern = ?name,
        holidays = holidays.as_ref().map_or(0, HolidaySnapshot::len),
        "calendar resolved"
    );
    Ok(CalendarSelection { week, holidays })
}
