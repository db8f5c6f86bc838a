//! # orrery-span
//!
//! Date-span reconciliation: keeps a `(start date, end date, day count)`
//! triple mutually consistent under clamping rules.
//!
//! The raw-input entry points ([`add_days`], [`diff_days`], [`reconcile`])
//! take `&str` dates and stay total over malformed input: they are meant
//! to be called with partially-edited user input mid-keystroke, so bad
//! dates produce sentinels, never panics.
//!
//! ## Quick Start
//!
//! ```
//! use orrery_span::{reconcile, SpanConfig};
//!
//! // A 1-day span clamps up to the 44-day floor and the end date follows.
//! let config = SpanConfig::new();
//! let reconciled = reconcile("2023-01-01", "2023-01-02", &config).unwrap();
//! assert_eq!(reconciled.span.days(), 44);
//! assert_eq!(reconciled.span.end().to_string(), "2023-02-14");
//! assert!(reconciled.refetch_needed);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar-date arithmetic on raw strings |
//! | `span` | `DateSpan` and the reconciliation rules |
//! | `config` | Day-count bounds |
//! | `error` | Error types |

mod config;
mod date;
mod error;
mod span;

pub use config::{SpanConfig, DEFAULT_MAX_DAYS, DEFAULT_MIN_DAYS};
pub use date::{add_days, diff_days, DATE_FORMAT};
pub use error::SpanError;
pub use span::{reconcile, DateSpan, Reconciled};
