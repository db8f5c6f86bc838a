//! # orrery-aspect
//!
//! Pairwise aspect detection over one day's ephemeris records.
//!
//! An aspect is a geometric relationship between two planets whose
//! shortest-arc separation falls near a target angle. The tolerance
//! window (orb) adapts to how fast the planets move relative to each
//! other, floored at a configurable minimum.
//!
//! # Algorithm
//!
//! For every planet pair in ascending id order:
//!
//! 1. `separation = shortest arc between the longitudes`, in `[0, 180]`
//! 2. `orb = max(|speed_a - speed_b| / 2, orb_floor)`
//! 3. scan the configured angles in order; the first whose band
//!    `[angle - orb, angle + orb]` contains the separation is recorded
//!    and the scan stops for that pair
//!
//! A pair never receives more than one aspect, and unmatched pairs are
//! absent from the findings. Angle order is semantic: when two bands
//! overlap at a separation, the earlier-listed angle takes precedence.
//!
//! # Quick Start
//!
//! ```
//! use orrery_aspect::{find_aspects, AspectConfig};
//! use orrery_ephemeris::{DayRecords, EphemerisRecord, PlanetId};
//!
//! let mut day = DayRecords::new();
//! day.insert(PlanetId::new(0), EphemerisRecord::new(2460106.5, 10.0, 1.0));
//! day.insert(PlanetId::new(3), EphemerisRecord::new(2460106.5, 100.0, 1.0));
//!
//! let findings = find_aspects(&day, &AspectConfig::new()).unwrap();
//! assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(3)), Some(90.0));
//! ```

mod angle;
mod config;
mod detect;
mod error;
mod findings;

pub use angle::{orb, separation};
pub use config::{AspectConfig, DEFAULT_ANGLES, DEFAULT_ORB_FLOOR};
pub use detect::find_aspects;
pub use error::AspectError;
pub use findings::AspectFindings;
