//! Day-count bounds for span reconciliation.

use crate::error::SpanError;

/// Default minimum day count. The floor also substitutes for an
/// uncomputable count during reconciliation.
pub const DEFAULT_MIN_DAYS: i64 = 44;

/// Default maximum day count. The range exists to bound fetch cost.
pub const DEFAULT_MAX_DAYS: i64 = 729;

/// Bounds applied to a span's day count during reconciliation.
///
/// # Example
///
/// ```
/// use orrery_span::SpanConfig;
///
/// let config = SpanConfig::new().with_min_days(7).with_max_days(365);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanConfig {
    min_days: i64,
    max_days: i64,
}

impl SpanConfig {
    /// Creates the default configuration: `44..=729` days.
    pub fn new() -> Self {
        Self {
            min_days: DEFAULT_MIN_DAYS,
            max_days: DEFAULT_MAX_DAYS,
        }
    }

    /// Sets the minimum day count.
    pub fn with_min_days(mut self, min_days: i64) -> Self {
        self.min_days = min_days;
        self
    }

    /// Sets the maximum day count.
    pub fn with_max_days(mut self, max_days: i64) -> Self {
        self.max_days = max_days;
        self
    }

    /// Returns the minimum day count.
    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    /// Returns the maximum day count.
    pub fn max_days(&self) -> i64 {
        self.max_days
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `min_days < 1` or `min_days > max_days`.
    pub fn validate(&self) -> Result<(), SpanError> {
        if self.min_days < 1 || self.min_days > self.max_days {
            return Err(SpanError::InvalidBounds {
                min_days: self.min_days,
                max_days: self.max_days,
            });
        }
        Ok(())
    }
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self::new()
    }
}
