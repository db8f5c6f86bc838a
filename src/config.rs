use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use orrery_aspect::AspectConfig;
use orrery_span::SpanConfig;

/// Top-level orrery configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OrreryConfig {
    /// Day-count bounds for span reconciliation.
    #[serde(default)]
    pub span: SpanToml,

    /// Aspect scan settings.
    #[serde(default)]
    pub aspect: AspectToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

impl OrreryConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed
    /// file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpanToml {
    #[serde(default = "default_min_days")]
    pub min_days: i64,
    #[serde(default = "default_max_days")]
    pub max_days: i64,
}

impl SpanToml {
    /// Builds the library-level span configuration.
    pub fn to_config(&self) -> SpanConfig {
        SpanConfig::new()
            .with_min_days(self.min_days)
            .with_max_days(self.max_days)
    }
}

impl Default for SpanToml {
    fn default() -> Self {
        Self {
            min_days: default_min_days(),
            max_days: default_max_days(),
        }
    }
}

fn default_min_days() -> i64 {
    orrery_span::DEFAULT_MIN_DAYS
}
fn default_max_days() -> i64 {
    orrery_span::DEFAULT_MAX_DAYS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectToml {
    /// Target angles in scan order; earlier angles win on overlap.
    #[serde(default = "default_angles")]
    pub angles: Vec<f64>,
    /// Minimum orb in degrees.
    #[serde(default = "default_orb_floor")]
    pub orb_floor: f64,
}

impl AspectToml {
    /// Builds the library-level aspect configuration.
    pub fn to_config(&self) -> AspectConfig {
        AspectConfig::new()
            .with_angles(self.angles.clone())
            .with_orb_floor(self.orb_floor)
    }
}

impl Default for AspectToml {
    fn default() -> Self {
        Self {
            angles: default_angles(),
            orb_floor: default_orb_floor(),
        }
    }
}

fn default_angles() -> Vec<f64> {
    orrery_aspect::DEFAULT_ANGLES.to_vec()
}
fn default_orb_floor() -> f64 {
    orrery_aspect::DEFAULT_ORB_FLOOR
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    /// Models reported when `--model` is not given.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Selected planet ids. An empty list selects every planet present.
    #[serde(default = "default_planets")]
    pub planets: Vec<u32>,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            models: default_models(),
            planets: default_planets(),
        }
    }
}

fn default_models() -> Vec<String> {
    vec!["geo".to_string(), "helio".to_string()]
}
fn default_planets() -> Vec<u32> {
    vec![0, 2, 3, 4, 5, 6, 14]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let config = OrreryConfig::default();
        assert_eq!(config.span.min_days, 44);
        assert_eq!(config.span.max_days, 729);
        assert_eq!(config.aspect.angles, [0.0, 90.0, 120.0, 180.0]);
        assert_eq!(config.aspect.orb_floor, 2.0);
        assert_eq!(config.report.models, ["geo", "helio"]);
        assert_eq!(config.report.planets, [0, 2, 3, 4, 5, 6, 14]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: OrreryConfig = toml::from_str(
            r#"
            [span]
            min_days = 7

            [aspect]
            angles = [0.0, 60.0, 90.0, 120.0, 180.0]
            "#,
        )
        .unwrap();
        assert_eq!(config.span.min_days, 7);
        assert_eq!(config.span.max_days, 729);
        assert_eq!(config.aspect.angles.len(), 5);
        assert_eq!(config.aspect.orb_floor, 2.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<OrreryConfig, _> = toml::from_str("[span]\nmindays = 7\n");
        assert!(result.is_err());
    }

    #[test]
    fn to_config_round_trips_values() {
        let config: OrreryConfig = toml::from_str(
            r#"
            [span]
            min_days = 10
            max_days = 20

            [aspect]
            orb_floor = 1.5
            "#,
        )
        .unwrap();

        let span = config.span.to_config();
        assert_eq!(span.min_days(), 10);
        assert_eq!(span.max_days(), 20);
        assert!(span.validate().is_ok());

        let aspect = config.aspect.to_config();
        assert_eq!(aspect.orb_floor(), 1.5);
        assert!(aspect.validate().is_ok());
    }
}
