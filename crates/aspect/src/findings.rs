//! Aspect findings for a single day.

use std::collections::BTreeMap;

use orrery_ephemeris::PlanetId;

/// Aspects found between planet pairs on one day.
///
/// Storage is asymmetric: each pair appears once, keyed by its lower
/// planet then its higher planet, with no reverse entry. Unmatched pairs
/// are absent rather than stored with a marker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AspectFindings {
    pairs: BTreeMap<PlanetId, BTreeMap<PlanetId, f64>>,
}

impl AspectFindings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a pair's matched angle. Callers guarantee `lower < higher`.
    pub(crate) fn insert(&mut self, lower: PlanetId, higher: PlanetId, angle: f64) {
        self.pairs.entry(lower).or_default().insert(higher, angle);
    }

    /// Returns the matched angle for a pair, in either argument order.
    pub fn between(&self, a: PlanetId, b: PlanetId) -> Option<f64> {
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
        self.pairs.get(&lower)?.get(&higher).copied()
    }

    /// Returns the pairs recorded under `planet` as the lower planet.
    pub fn for_planet(&self, planet: PlanetId) -> Option<&BTreeMap<PlanetId, f64>> {
        self.pairs.get(&planet)
    }

    /// Iterates `(lower, higher, matched angle)` triples in planet order.
    pub fn iter(&self) -> impl Iterator<Item = (PlanetId, PlanetId, f64)> + '_ {
        self.pairs.iter().flat_map(|(&lower, inner)| {
            inner
                .iter()
                .map(move |(&higher, &angle)| (lower, higher, angle))
        })
    }

    /// Number of pairs with a recorded aspect.
    pub fn len(&self) -> usize {
        self.pairs.values().map(BTreeMap::len).sum()
    }

    /// True when no aspects were found.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(id: u32) -> PlanetId {
        PlanetId::new(id)
    }

    #[test]
    fn between_is_order_insensitive() {
        let mut findings = AspectFindings::new();
        findings.insert(planet(0), planet(3), 90.0);

        assert_eq!(findings.between(planet(0), planet(3)), Some(90.0));
        assert_eq!(findings.between(planet(3), planet(0)), Some(90.0));
        assert_eq!(findings.between(planet(0), planet(5)), None);
    }

    #[test]
    fn storage_is_asymmetric() {
        let mut findings = AspectFindings::new();
        findings.insert(planet(0), planet(3), 90.0);

        assert!(findings.for_planet(planet(0)).is_some());
        assert!(findings.for_planet(planet(3)).is_none());
    }

    #[test]
    fn iter_walks_pairs_in_planet_order() {
        let mut findings = AspectFindings::new();
        findings.insert(planet(5), planet(9), 120.0);
        findings.insert(planet(0), planet(3), 90.0);
        findings.insert(planet(0), planet(14), 180.0);

        let triples: Vec<_> = findings.iter().collect();
        assert_eq!(
            triples,
            [
                (planet(0), planet(3), 90.0),
                (planet(0), planet(14), 180.0),
                (planet(5), planet(9), 120.0),
            ]
        );
        assert_eq!(findings.len(), 3);
    }

    #[test]
    fn empty_findings() {
        let findings = AspectFindings::new();
        assert!(findings.is_empty());
        assert_eq!(findings.len(), 0);
        assert_eq!(findings.iter().count(), 0);
    }
}
