//! Error types for the orrery-span crate.

/// Error type for all fallible operations in the orrery-span crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Returned when the configured day-count bounds are unusable.
    #[error("invalid day-count bounds: min {min_days} must be in 1..=max {max_days}")]
    InvalidBounds {
        /// The configured minimum day count.
        min_days: i64,
        /// The configured maximum day count.
        max_days: i64,
    },

    /// Returned when the start date cannot anchor a calendar span.
    #[error("invalid start date: {input:?} is not a calendar date")]
    InvalidStartDate {
        /// The raw input that failed to parse.
        input: String,
    },

    /// Returned when a day count pushes the end date outside the
    /// representable calendar range.
    #[error("day count {days} puts the end date outside the supported calendar range")]
    DateOutOfRange {
        /// The offending day count.
        days: i64,
    },
}
