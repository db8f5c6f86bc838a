//! # orrery-ephemeris
//!
//! Provider data model and the pivot transform that reindexes nested
//! ephemeris data by Julian day for date-indexed lookup.
//!
//! The provider delivers `model -> planet -> [daily records]`; [`pivot`]
//! reshapes that into `model -> day -> planet -> record`, the long-lived
//! artifact the rest of the system queries.
//!
//! ## Quick Start
//!
//! ```
//! use orrery_ephemeris::{pivot, EphemerisRecord, PlanetId, RawEphemerisSet};
//!
//! let mut raw = RawEphemerisSet::new();
//! raw.entry("geo".to_string())
//!     .or_default()
//!     .entry(PlanetId::new(0))
//!     .or_default()
//!     .push(EphemerisRecord::new(2460105.5, 78.3, 0.95));
//!
//! let pivoted = pivot(raw);
//! let day = pivoted.day("geo", 2460105).unwrap();
//! assert!(day.contains_key(&PlanetId::new(0)));
//! ```
//!
//! Records are parsed with serde straight from the provider's JSON;
//! missing numeric fields fail at that boundary rather than propagating
//! NaN into downstream arithmetic. Fields the engine does not interpret
//! ride along in [`EphemerisRecord::extra`] untouched.

mod pivot;
mod record;

pub use pivot::{pivot, DayRecords, PivotedEphemeris, RawEphemerisSet};
pub use record::{EphemerisRecord, PlanetId};
