use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;
use crate::models::{ScoringWeights, DEFAULT_MIN_COMPATIBILITY_SCORE};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Request body limit, candidate pools can be large
    pub json_limit_bytes: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_compatibility_score")]
    pub min_compatibility_score: u8,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Largest candidate pool accepted in a single ranking request
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_compatibility_score: default_min_compatibility_score(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_min_compatibility_score() -> u8 { DEFAULT_MIN_COMPATIBILITY_SCORE }
fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_candidates() -> usize { 5000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Maximum points per factor
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_orientation_weight")]
    pub orientation: f64,
    #[serde(default = "default_comfort_weight")]
    pub comfort: f64,
    #[serde(default = "default_verification_weight")]
    pub verification: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            interests: default_interests_weight(),
            orientation: default_orientation_weight(),
            comfort: default_comfort_weight(),
            verification: default_verification_weight(),
            distance: default_distance_weight(),
        }
    }
}

fn default_interests_weight() -> f64 { 30.0 }
fn default_orientation_weight() -> f64 { 25.0 }
fn default_comfort_weight() -> f64 { 20.0 }
fn default_verification_weight() -> f64 { 15.0 }
fn default_distance_weight() -> f64 { 10.0 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            interests: config.interests,
            orientation: config.orientation,
            comfort: config.comfort,
            verification: config.verification,
            distance: config.distance,
        }
    }
}

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CONSENT__)
    pub fn load() -> Result<Self, ConfigError> {
        base_builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CONSENT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .checked()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        base_builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .checked()
    }

    /// Reject weights that would push scores negative or make them NaN
    fn checked(self) -> Result<Self, ConfigError> {
        let weights = &self.scoring.weights;
        let named = [
            ("interests", weights.interests),
            ("orientation", weights.orientation),
            ("comfort", weights.comfort),
            ("verification", weights.verification),
            ("distance", weights.distance),
        ];

        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(self)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)
}

fn environment() -> Environment {
    Environment::with_prefix("CONSENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
