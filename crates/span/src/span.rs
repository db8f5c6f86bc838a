//! `DateSpan` and the reconciliation rules.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::SpanConfig;
use crate::date::{diff_days, parse_date, shift};
use crate::error::SpanError;

/// A start date, end date, and day count kept mutually consistent.
///
/// Invariant: `days == end - start` in whole days. Spans built by
/// [`reconcile`] additionally satisfy the configured day-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
    days: i64,
}

impl DateSpan {
    /// Derives a span from a start date and an edited day count.
    ///
    /// This is the day-count-edit path: the end date is recomputed
    /// directly and no clamping applies. Edits to either date go through
    /// [`reconcile`] instead.
    pub fn from_count(start: &str, days: i64) -> Result<Self, SpanError> {
        let start = parse_date(start).ok_or_else(|| SpanError::InvalidStartDate {
            input: start.to_string(),
        })?;
        let end = shift(start, days).ok_or(SpanError::DateOutOfRange { days })?;
        Ok(Self { start, end, days })
    }

    /// Returns the start date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the day count.
    pub fn days(&self) -> i64 {
        self.days
    }
}

/// Outcome of a [`reconcile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    /// The reconciled, clamped span.
    pub span: DateSpan,
    /// Whether previously fetched ephemerides are now stale.
    ///
    /// Set on every completed reconcile: a reconcile follows an edit to
    /// the start or end date, and any edit invalidates data fetched for
    /// the old span. The caller performs the refetch.
    pub refetch_needed: bool,
}

/// Reconciles an edited `(start, end)` pair into a consistent span.
///
/// The day count is recomputed from the pair; if the end date cannot
/// produce a count it falls back to the configured minimum. The count is
/// then clamped into `[min_days, max_days]` and the end date recomputed
/// from it, so the returned triple is always self-consistent.
///
/// # Errors
///
/// Returns [`SpanError::InvalidBounds`] if `config` fails validation and
/// [`SpanError::InvalidStartDate`] if `start` is not a calendar date.
/// Unlike the end date, the start anchors the span and cannot be
/// substituted.
pub fn reconcile(start: &str, end: &str, config: &SpanConfig) -> Result<Reconciled, SpanError> {
    config.validate()?;

    let anchor = parse_date(start).ok_or_else(|| SpanError::InvalidStartDate {
        input: start.to_string(),
    })?;

    let days = diff_days(start, end)
        .unwrap_or(config.min_days())
        .clamp(config.min_days(), config.max_days());
    let end = shift(anchor, days).ok_or(SpanError::DateOutOfRange { days })?;

    debug!(start = %anchor, end = %end, days, "span reconciled");

    Ok(Reconciled {
        span: DateSpan {
            start: anchor,
            end,
            days,
        },
        refetch_needed: true,
    })
}
