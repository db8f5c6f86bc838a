//! Planet identifiers and per-day ephemeris records.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric planet identifier assigned by the ephemeris provider.
///
/// `Ord` follows the numeric value; that ordering is the stable planet
/// order used for pair enumeration and findings keying. JSON object keys
/// (strings such as `"14"`) parse to it directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlanetId(u32);

impl PlanetId {
    /// Creates a planet id from its provider-assigned number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the provider-assigned number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanetId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u32> for PlanetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One planet's position sample for one day.
///
/// Field names mirror the provider's JSON. Immutable once received:
/// nothing in the engine writes through it. Fields beyond the three the
/// engine reads are kept in `extra` and round-trip unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisRecord {
    /// Julian Date of the sample.
    #[serde(rename = "julianDate")]
    pub julian_date: f64,

    /// Ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,

    /// Longitude speed in degrees/day.
    #[serde(rename = "longitudeSpeed")]
    pub longitude_speed: f64,

    /// Provider fields the engine does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EphemerisRecord {
    /// Creates a record with no passthrough fields.
    pub fn new(julian_date: f64, longitude: f64, longitude_speed: f64) -> Self {
        Self {
            julian_date,
            longitude,
            longitude_speed,
            extra: serde_json::Map::new(),
        }
    }

    /// Julian-day key for this record: the integer floor of `julian_date`.
    pub fn day(&self) -> i64 {
        self.julian_date.floor() as i64
    }
}
