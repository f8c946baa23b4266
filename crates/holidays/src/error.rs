//! Error types for the workcal-holidays crate.

use workcal_workweek::WorkWeekError;

/// Error type for holiday-aware adjustment operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// The underlying pattern arithmetic failed.
    #[error(transparent)]
    Week(#[from] WorkWeekError),

    /// Returned when the holiday correction steps outside chrono's
    /// representable date range.
    #[error("holiday correction leaves the representable date range")]
    DateOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wraps_week_error() {
        let err = HolidayError::from(WorkWeekError::DateOutOfRange);
        assert_eq!(
            err.to_string(),
            "working-day shift leaves the representable date range"
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let err = HolidayError::DateOutOfRange;
        assert_eq!(
            err.to_string(),
            "holiday correction leaves the representable date range"
        );
    }
}
