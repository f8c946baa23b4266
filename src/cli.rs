use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use workcal_workweek::WorkWeek;

/// Workcal working-day calendar calculator.
#[derive(Parser)]
#[command(
    name = "workcal",
    version,
    about = "Working-day calendar calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: workcal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Check whether a date is a working day.
    Check(CheckArgs),
    /// Count working days in the half-open interval [START, END).
    Count(CountArgs),
    /// Shift a date by a number of working days.
    Shift(ShiftArgs),
}

/// Calendar selection flags shared by every subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Working-week pattern.
    #[arg(short, long, value_enum)]
    pub pattern: Option<PatternName>,

    /// Path to an .ics file, or a directory of them, with holiday dates.
    #[arg(long)]
    pub holidays: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD).
    pub date: NaiveDate,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Arguments for the `count` subcommand.
#[derive(clap::Args)]
pub struct CountArgs {
    /// Start of the interval, inclusive (YYYY-MM-DD).
    pub start: NaiveDate,

    /// End of the interval, exclusive (YYYY-MM-DD).
    pub end: NaiveDate,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Origin date (YYYY-MM-DD).
    pub date: NaiveDate,

    /// Number of working days to shift by.
    pub days: u32,

    /// Shift into the past instead of the future.
    #[arg(long)]
    pub back: bool,

    #[command(flatten)]
    pub calendar: CalendarArgs,
}

/// Named canonical working-week patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternName {
    /// Traditional five-day week (Sat/Sun weekend).
    MondayFriday,
    /// Six-day week with Sunday off.
    MondaySaturday,
    /// Five-day week with Fri/Sat weekend.
    SundayThursday,
    /// Six-day week with Friday off.
    SaturdayThursday,
    /// Six-day week with Saturday off.
    SundayFriday,
}

impl PatternName {
    /// The core pattern constant this name selects.
    pub fn week(self) -> WorkWeek {
        match self {
            PatternName::MondayFriday => WorkWeek::MONDAY_FRIDAY,
            PatternName::MondaySaturday => WorkWeek::MONDAY_SATURDAY,
            PatternName::SundayThursday => WorkWeek::SUNDAY_THURSDAY,
            PatternName::SaturdayThursday => WorkWeek::SATURDAY_THURSDAY,
            PatternName::SundayFriday => WorkWeek::SUNDAY_FRIDAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_names_parse_kebab_case() {
        let name = <PatternName as ValueEnum>::from_str("sunday-thursday", true).unwrap();
        assert_eq!(name, PatternName::SundayThursday);
        assert_eq!(name.week(), WorkWeek::SUNDAY_THURSDAY);
    }

    #[test]
    fn unknown_pattern_name_is_rejected() {
        assert!(<PatternName as ValueEnum>::from_str("monday-sunday", true).is_err());
    }
}
