//! Report command: pivot a provider response and print per-day aspects.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use tracing::{info, info_span};

use orrery_aspect::{find_aspects, AspectConfig};
use orrery_ephemeris::{pivot, DayRecords, PlanetId, RawEphemerisSet};

use crate::cli::ReportArgs;
use crate::config::OrreryConfig;
use crate::glyphs;

/// Provider response envelope, as returned by the ephemeris endpoint.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    content: ProviderContent,
}

#[derive(Debug, Deserialize)]
struct ProviderContent {
    ephemerides: RawEphemerisSet,
}

/// Reads and unwraps a provider-response JSON file.
fn load_ephemerides(path: &Path) -> Result<RawEphemerisSet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read provider response: {}", path.display()))?;
    let response: ProviderResponse =
        serde_json::from_str(&json).context("failed to parse provider response JSON")?;
    Ok(response.content.ephemerides)
}

/// Keeps only the selected planets. An empty selection keeps everything.
fn select_planets(records: &DayRecords, selected: &BTreeSet<PlanetId>) -> DayRecords {
    if selected.is_empty() {
        return records.clone();
    }
    records
        .iter()
        .filter(|(planet, _)| selected.contains(planet))
        .map(|(&planet, record)| (planet, record.clone()))
        .collect()
}

/// Run the report command.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();

    let config = OrreryConfig::load(&args.config)?;
    let aspect_config = config.aspect.to_config();
    aspect_config.validate().context("invalid aspect config")?;

    let raw = load_ephemerides(&args.input)?;
    let pivoted = pivot(raw);
    info!(
        path = %args.input.display(),
        records = pivoted.record_count(),
        "provider response pivoted"
    );

    let models: Vec<String> = match args.model {
        Some(model) => vec![model],
        None => config.report.models.clone(),
    };
    let selected: BTreeSet<PlanetId> = args
        .planets
        .unwrap_or(config.report.planets)
        .into_iter()
        .map(PlanetId::new)
        .collect();

    for model in models {
        let Some(days) = pivoted.model(&model) else {
            let available: Vec<_> = pivoted.models().collect();
            bail!("model {model:?} not in provider response (available: {available:?})");
        };
        println!("model {model}");

        match args.day {
            Some(day) => {
                let records = days
                    .get(&day)
                    .ok_or_else(|| anyhow!("day {day} not present for model {model:?}"))?;
                print_day(day, &select_planets(records, &selected), &aspect_config)?;
            }
            None => {
                for (&day, records) in days {
                    print_day(day, &select_planets(records, &selected), &aspect_config)?;
                }
            }
        }
    }

    Ok(())
}

/// Prints one day's sign positions and aspect findings.
fn print_day(day: i64, records: &DayRecords, config: &AspectConfig) -> Result<()> {
    println!("  {day}");
    for (planet, record) in records {
        println!(
            "    {:<2} {}",
            glyphs::planet_glyph(planet.get()),
            glyphs::degree_as_sign(record.longitude)
        );
    }

    let findings = find_aspects(records, config)?;
    for (a, b, angle) in findings.iter() {
        println!(
            "    {} {} {} ({angle}\u{B0})",
            glyphs::planet_glyph(a.get()),
            glyphs::aspect_glyph(angle).unwrap_or("\u{B7}"),
            glyphs::planet_glyph(b.get())
        );
    }

    Ok(())
}
