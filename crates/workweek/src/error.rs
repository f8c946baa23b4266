//! Error types for the workcal-workweek crate.

/// Error type for all fallible operations in the workcal-workweek crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorkWeekError {
    /// Returned when a working-week length is outside the valid range 1..=6.
    #[error("invalid working week length: {work_len} (must be 1..=6)")]
    InvalidWorkLength {
        /// The invalid length that was provided.
        work_len: u8,
    },

    /// Returned when a shift lands outside chrono's representable date range.
    #[error("working-day shift leaves the representable date range")]
    DateOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_work_length() {
        let err = WorkWeekError::InvalidWorkLength { work_len: 7 };
        assert_eq!(
            err.to_string(),
            "invalid working week length: 7 (must be 1..=6)"
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let err = WorkWeekError::DateOutOfRange;
        assert_eq!(
            err.to_string(),
            "working-day shift leaves the representable date range"
        );
    }
}
