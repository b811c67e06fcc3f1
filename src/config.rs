use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{OverflowPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub overflow: OverflowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub relaxed_mode: bool,
    pub input_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub strict: WeightsConfig,
    #[serde(default)]
    pub relaxed: WeightsConfig,
}

/// Anti-bias weights as written in config files.
///
/// Each field is optional; whatever is missing is taken from the table being overridden,
/// so a partial `[scoring.relaxed]` keeps the remaining relaxed weights.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WeightsConfig {
    pub experience_novelty: Option<f64>,
    pub shared_case_topic: Option<f64>,
    pub unique_skill: Option<f64>,
    pub availability_match: Option<f64>,
    pub unique_role: Option<f64>,
    pub size_affinity: Option<f64>,
}

impl WeightsConfig {
    /// Apply the configured values on top of `base`
    pub fn resolve(&self, base: ScoringWeights) -> ScoringWeights {
        ScoringWeights {
            experience_novelty: self.experience_novelty.unwrap_or(base.experience_novelty),
            shared_case_topic: self.shared_case_topic.unwrap_or(base.shared_case_topic),
            unique_skill: self.unique_skill.unwrap_or(base.unique_skill),
            availability_match: self.availability_match.unwrap_or(base.availability_match),
            unique_role: self.unique_role.unwrap_or(base.unique_role),
            size_affinity: self.size_affinity.unwrap_or(base.size_affinity),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverflowSettings {
    #[serde(default = "default_score_floor")]
    pub score_floor: f64,
    #[serde(default = "default_fallback_score")]
    pub default_score: f64,
    #[serde(default = "default_size_mismatch_penalty")]
    pub size_mismatch_penalty: f64,
    #[serde(default = "default_fallback_case_type")]
    pub fallback_case_type: String,
}

impl Default for OverflowSettings {
    fn default() -> Self {
        Self {
            score_floor: default_score_floor(),
            default_score: default_fallback_score(),
            size_mismatch_penalty: default_size_mismatch_penalty(),
            fallback_case_type: default_fallback_case_type(),
        }
    }
}

impl From<OverflowSettings> for OverflowPolicy {
    fn from(settings: OverflowSettings) -> Self {
        Self {
            score_floor: settings.score_floor,
            default_score: settings.default_score,
            size_mismatch_penalty: settings.size_mismatch_penalty,
            fallback_case_type: settings.fallback_case_type,
        }
    }
}

fn default_score_floor() -> f64 { 40.0 }
fn default_fallback_score() -> f64 { 70.0 }
fn default_size_mismatch_penalty() -> f64 { 25.0 }
fn default_fallback_case_type() -> String { "Consulting".to_string() }

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

const ENV_PREFIX: &str = "TEAM_MATCHER";

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TEAM_MATCHER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TEAM_MATCHER__MATCHING__RELAXED_MODE -> matching.relaxed_mode
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn strict_weights(&self) -> ScoringWeights {
        self.scoring.strict.resolve(ScoringWeights::STRICT)
    }

    pub fn relaxed_weights(&self) -> ScoringWeights {
        self.scoring.relaxed.resolve(ScoringWeights::RELAXED)
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow.clone().into()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
