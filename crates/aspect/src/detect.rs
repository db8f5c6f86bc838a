//! Pairwise aspect detection.

use tracing::debug;

use orrery_ephemeris::DayRecords;

use crate::angle::{orb, separation};
use crate::config::AspectConfig;
use crate::error::AspectError;
use crate::findings::AspectFindings;

/// Scans one day's records for aspects between every planet pair.
///
/// Planets are taken in ascending id order. For each pair the configured
/// angles are scanned in order and the first whose tolerance band
/// contains the pair's separation is recorded; the scan then stops for
/// that pair, so a pair never carries more than one aspect. Fewer than
/// two planets yields empty findings.
///
/// Records are assumed well-formed per the provider contract; missing
/// numeric fields are rejected when the response is parsed, not here.
///
/// # Errors
///
/// Returns [`AspectError`] if `config` fails validation.
pub fn find_aspects(
    day: &DayRecords,
    config: &AspectConfig,
) -> Result<AspectFindings, AspectError> {
    config.validate()?;

    let planets: Vec<_> = day.keys().copied().collect();
    let mut findings = AspectFindings::new();

    for (i, &first) in planets.iter().enumerate() {
        for &second in &planets[i + 1..] {
            let a = &day[&first];
            let b = &day[&second];

            let sep = separation(a.longitude, b.longitude);
            let tolerance = orb(a.longitude_speed, b.longitude_speed, config.orb_floor());

            for &target in config.angles() {
                if sep >= target - tolerance && sep <= target + tolerance {
                    findings.insert(first, second, target);
                    break; // first listed angle wins
                }
            }
        }
    }

    debug!(
        planets = planets.len(),
        findings = findings.len(),
        "aspect scan complete"
    );
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_ephemeris::{EphemerisRecord, PlanetId};

    fn day(records: &[(u32, f64, f64)]) -> DayRecords {
        records
            .iter()
            .map(|&(id, longitude, speed)| {
                (
                    PlanetId::new(id),
                    EphemerisRecord::new(2460106.5, longitude, speed),
                )
            })
            .collect()
    }

    #[test]
    fn square_within_floored_orb() {
        // Separation 90, both speeds 1.0: orb clamps to 2, band [88, 92].
        let day = day(&[(0, 10.0, 1.0), (3, 100.0, 1.0)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();

        assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(3)), Some(90.0));
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn near_miss_outside_orb() {
        // Separation 93 against band [88, 92]: no finding.
        let day = day(&[(0, 10.0, 1.0), (3, 103.0, 1.0)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn band_edges_are_inclusive() {
        let config = AspectConfig::new();
        for lon in [88.0, 92.0] {
            let day = day(&[(0, 0.0, 1.0), (3, lon, 1.0)]);
            let findings = find_aspects(&day, &config).unwrap();
            assert_eq!(
                findings.between(PlanetId::new(0), PlanetId::new(3)),
                Some(90.0),
                "separation {lon} should match"
            );
        }
    }

    #[test]
    fn fast_mover_widens_the_orb() {
        // Moon-like speed against a slow mover: orb = |13.2 - 1.0| / 2 = 6.1,
        // so a separation of 95.5 still matches 90.
        let day = day(&[(0, 10.0, 1.0), (1, 105.5, 13.2)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();
        assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(1)), Some(90.0));
    }

    #[test]
    fn conjunction_across_the_seam() {
        // 359 and 1 degree: separation 2, within the conjunction band.
        let day = day(&[(0, 359.0, 1.0), (3, 1.0, 1.0)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();
        assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(3)), Some(0.0));
    }

    #[test]
    fn first_listed_angle_wins_on_overlap() {
        // Speeds 30 apart give orb 15; separation 105 sits in both the
        // 90-band [75, 105] and the 120-band [105, 135]. The configured
        // order decides, not the numeric distance.
        let records = [(0, 0.0, 31.0), (3, 105.0, 1.0)];

        let forward = AspectConfig::new().with_angles(vec![90.0, 120.0]);
        let findings = find_aspects(&day(&records), &forward).unwrap();
        assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(3)), Some(90.0));

        let reversed = AspectConfig::new().with_angles(vec![120.0, 90.0]);
        let findings = find_aspects(&day(&records), &reversed).unwrap();
        assert_eq!(findings.between(PlanetId::new(0), PlanetId::new(3)), Some(120.0));
    }

    #[test]
    fn one_aspect_per_pair() {
        let day = day(&[(0, 0.0, 31.0), (3, 105.0, 1.0)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn fewer_than_two_planets() {
        let config = AspectConfig::new();
        assert!(find_aspects(&DayRecords::new(), &config).unwrap().is_empty());
        assert!(find_aspects(&day(&[(0, 10.0, 1.0)]), &config)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let day = day(&[(0, 10.0, 1.0), (3, 100.0, 1.0)]);
        let config = AspectConfig::new().with_angles(vec![]);
        assert!(matches!(
            find_aspects(&day, &config),
            Err(AspectError::EmptyAngles)
        ));
    }

    #[test]
    fn findings_keyed_by_lower_planet() {
        let day = day(&[(14, 100.0, 1.0), (2, 10.0, 1.0)]);
        let findings = find_aspects(&day, &AspectConfig::new()).unwrap();

        let triples: Vec<_> = findings.iter().collect();
        assert_eq!(triples, [(PlanetId::new(2), PlanetId::new(14), 90.0)]);
    }
}
