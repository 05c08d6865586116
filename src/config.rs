use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{ScoringThresholds, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_price_match_weight")]
    pub price_match: f64,
    #[serde(default = "default_bedroom_weight")]
    pub bedroom: f64,
    #[serde(default = "default_school_rating_weight")]
    pub school_rating: f64,
    #[serde(default = "default_commute_weight")]
    pub commute: f64,
    #[serde(default = "default_property_age_weight")]
    pub property_age: f64,
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            price_match: default_price_match_weight(),
            bedroom: default_bedroom_weight(),
            school_rating: default_school_rating_weight(),
            commute: default_commute_weight(),
            property_age: default_property_age_weight(),
            amenities: default_amenities_weight(),
        }
    }
}

fn default_price_match_weight() -> f64 { 0.30 }
fn default_bedroom_weight() -> f64 { 0.20 }
fn default_school_rating_weight() -> f64 { 0.15 }
fn default_commute_weight() -> f64 { 0.15 }
fn default_property_age_weight() -> f64 { 0.10 }
fn default_amenities_weight() -> f64 { 0.10 }

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        ScoringWeights {
            price_match: config.price_match,
            bedroom: config.bedroom,
            school_rating: config.school_rating,
            commute: config.commute,
            property_age: config.property_age,
            amenities: config.amenities,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_price_ceiling_ratio")]
    pub price_ceiling_ratio: f64,
    #[serde(default = "default_bedroom_shortfall_step")]
    pub bedroom_shortfall_step: f64,
    #[serde(default = "default_school_floor_span")]
    pub school_floor_span: f64,
    #[serde(default = "default_commute_grace_minutes")]
    pub commute_grace_minutes: f64,
    #[serde(default = "default_age_horizon_years")]
    pub age_horizon_years: f64,
    #[serde(default = "default_age_floor_score")]
    pub age_floor_score: f64,
    #[serde(default = "default_age_unknown_score")]
    pub age_unknown_score: f64,
    #[serde(default = "default_strong_component")]
    pub strong_component: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            price_ceiling_ratio: default_price_ceiling_ratio(),
            bedroom_shortfall_step: default_bedroom_shortfall_step(),
            school_floor_span: default_school_floor_span(),
            commute_grace_minutes: default_commute_grace_minutes(),
            age_horizon_years: default_age_horizon_years(),
            age_floor_score: default_age_floor_score(),
            age_unknown_score: default_age_unknown_score(),
            strong_component: default_strong_component(),
        }
    }
}

fn default_price_ceiling_ratio() -> f64 { 2.0 }
fn default_bedroom_shortfall_step() -> f64 { 50.0 }
fn default_school_floor_span() -> f64 { 3.0 }
fn default_commute_grace_minutes() -> f64 { 30.0 }
fn default_age_horizon_years() -> f64 { 50.0 }
fn default_age_floor_score() -> f64 { 50.0 }
fn default_age_unknown_score() -> f64 { 70.0 }
fn default_strong_component() -> f64 { 80.0 }

impl From<ThresholdsConfig> for ScoringThresholds {
    fn from(config: ThresholdsConfig) -> Self {
        ScoringThresholds {
            price_ceiling_ratio: config.price_ceiling_ratio,
            bedroom_shortfall_step: config.bedroom_shortfall_step,
            school_floor_span: config.school_floor_span,
            commute_grace_minutes: config.commute_grace_minutes,
            age_horizon_years: config.age_horizon_years,
            age_floor_score: config.age_floor_score,
            age_unknown_score: config.age_unknown_score,
            strong_component: config.strong_component,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    /// Candidate count at which the CLI switches to the parallel path
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_top_n() -> usize { 3 }
fn default_max_top_n() -> usize { 50 }
fn default_parallel_threshold() -> usize { 256 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOMEMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. HOMEMATCH_SCORING__WEIGHTS__PRICE_MATCH -> scoring.weights.price_match
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.price_match, 0.30);
        assert_eq!(weights.bedroom, 0.20);
        assert_eq!(weights.school_rating, 0.15);
        assert_eq!(weights.commute, 0.15);
        assert_eq!(weights.property_age, 0.10);
        assert_eq!(weights.amenities, 0.10);
    }

    #[test]
    fn test_default_weights_match_domain_defaults() {
        let from_config: ScoringWeights = WeightsConfig::default().into();
        let domain = ScoringWeights::default();
        assert_eq!(from_config.sum(), domain.sum());
        assert_eq!(from_config.price_match, domain.price_match);
    }

    #[test]
    fn test_default_thresholds_match_domain_defaults() {
        let from_config: ScoringThresholds = ThresholdsConfig::default().into();
        let domain = ScoringThresholds::default();
        assert_eq!(from_config.price_ceiling_ratio, domain.price_ceiling_ratio);
        assert_eq!(from_config.strong_component, domain.strong_component);
    }

    #[test]
    fn test_default_engine_settings() {
        let engine = EngineSettings::default();
        assert_eq!(engine.default_top_n, 3);
        assert!(engine.max_top_n >= engine.default_top_n);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
