//! The pivot transform: provider nesting to date-indexed nesting.

use std::collections::BTreeMap;

use tracing::debug;

use crate::record::{EphemerisRecord, PlanetId};

/// Provider-native nesting: model -> planet -> chronological records.
pub type RawEphemerisSet = BTreeMap<String, BTreeMap<PlanetId, Vec<EphemerisRecord>>>;

/// One day's records keyed by planet.
pub type DayRecords = BTreeMap<PlanetId, EphemerisRecord>;

/// Date-indexed nesting: model -> Julian day -> planet -> record.
///
/// The long-lived artifact the rest of the system queries. Built once per
/// fetch by [`pivot`]; per-day slices feed the aspect detector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotedEphemeris {
    models: BTreeMap<String, BTreeMap<i64, DayRecords>>,
}

impl PivotedEphemeris {
    /// Iterates the model names present, in sorted order.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Returns a model's full day index.
    pub fn model(&self, model: &str) -> Option<&BTreeMap<i64, DayRecords>> {
        self.models.get(model)
    }

    /// Returns one day's records for a model.
    pub fn day(&self, model: &str, day: i64) -> Option<&DayRecords> {
        self.models.get(model)?.get(&day)
    }

    /// Returns a single planet's record for a model and day.
    pub fn record(&self, model: &str, day: i64, planet: PlanetId) -> Option<&EphemerisRecord> {
        self.day(model, day)?.get(&planet)
    }

    /// Total number of records held across all models and days.
    pub fn record_count(&self) -> usize {
        self.models
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    /// True when no models are present.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Rebuilds the provider-native nesting, records ordered by day.
    pub fn flatten(&self) -> RawEphemerisSet {
        let mut raw = RawEphemerisSet::new();
        for (model, days) in &self.models {
            let planets = raw.entry(model.clone()).or_default();
            for records in days.values() {
                for (&planet, record) in records {
                    planets.entry(planet).or_default().push(record.clone());
                }
            }
        }
        raw
    }
}

/// Reindexes a provider response by Julian day.
///
/// Deterministic, total, O(record count). An ordered fold over each
/// planet's chronological records: for duplicate `(model, day, planet)`
/// keys the later record wins, matching the provider contract of at most
/// one sample per planet per day. The raw set is consumed; records move
/// rather than clone.
pub fn pivot(raw: RawEphemerisSet) -> PivotedEphemeris {
    let mut models: BTreeMap<String, BTreeMap<i64, DayRecords>> = BTreeMap::new();
    let mut record_count = 0usize;

    for (model, planets) in raw {
        let days = models.entry(model).or_default();
        for (planet, records) in planets {
            for record in records {
                record_count += 1;
                days.entry(record.day()).or_default().insert(planet, record);
            }
        }
    }

    let pivoted = PivotedEphemeris { models };
    debug!(
        models = pivoted.models.len(),
        records = record_count,
        "ephemerides pivoted"
    );
    pivoted
}
