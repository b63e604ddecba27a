//! Configuration loading for the decision engine.
//!
//! Tuning values are read from a TOML file. Every section is optional and
//! falls back to the defaults below.

use galaxy_types::CurrencyType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_CONFIG_PATH: &str = "leaders.toml";

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Comfort targets for the priority model
    #[serde(default)]
    pub comfort: ComfortConfig,
    /// Candidate generation settings
    #[serde(default)]
    pub decision: DecisionConfig,
    /// Demo driver settings
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default path, or use defaults if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::from_file(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects settings the decision profile cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decision.actions_to_choose_from == 0 {
            return Err(ConfigError::Invalid(
                "decision.actions_to_choose_from must be at least 1".into(),
            ));
        }
        if self.decision.planets_to_choose_from == 0 {
            return Err(ConfigError::Invalid(
                "decision.planets_to_choose_from must be at least 1".into(),
            ));
        }
        if self.comfort.resource_ceiling < 0 {
            return Err(ConfigError::Invalid(format!(
                "comfort.resource_ceiling must not be negative, got {}",
                self.comfort.resource_ceiling
            )));
        }
        for currency in CurrencyType::ALL {
            let level = self.comfort.level(currency);
            if !(level.surplus > 0.0 && level.yield_per_turn > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "comfort.{} targets must be positive",
                    currency
                )));
            }
        }
        Ok(())
    }
}

/// Comfortable surplus and yield for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortLevel {
    pub surplus: f32,
    pub yield_per_turn: f32,
}

impl ComfortLevel {
    pub const fn new(surplus: f32, yield_per_turn: f32) -> Self {
        Self {
            surplus,
            yield_per_turn,
        }
    }
}

/// Priority model targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortConfig {
    /// Stockpiles and yields are clamped to [0, resource_ceiling]
    pub resource_ceiling: i32,
    pub affluence: ComfortLevel,
    pub politics: ComfortLevel,
    pub intelligence: ComfortLevel,
}

impl Default for ComfortConfig {
    fn default() -> Self {
        Self {
            resource_ceiling: 1_000,
            affluence: ComfortLevel::new(20.0, 2.0),
            politics: ComfortLevel::new(25.0, 2.0),
            intelligence: ComfortLevel::new(25.0, 2.0),
        }
    }
}

impl ComfortConfig {
    pub fn level(&self, currency: CurrencyType) -> ComfortLevel {
        match currency {
            CurrencyType::Affluence => self.affluence,
            CurrencyType::Politics => self.politics,
            CurrencyType::Intelligence => self.intelligence,
        }
    }
}

/// How the three action categories are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryWeightMode {
    /// Each category is weighted by its own function
    #[default]
    Independent,
    /// Espionage and trade slots both take the trade weight, and every slot
    /// is labelled espionage
    Legacy,
}

/// Candidate generation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Number of categories expanded into candidates
    pub actions_to_choose_from: usize,
    /// Width of the random window into the planet ranking
    pub planets_to_choose_from: usize,
    /// Candidates requested per decision
    pub candidate_pool: usize,
    pub category_weights: CategoryWeightMode,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            actions_to_choose_from: 2,
            planets_to_choose_from: 4,
            candidate_pool: 4,
            category_weights: CategoryWeightMode::Independent,
        }
    }
}

/// Demo driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub turns: u64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { turns: 20, seed: 42 }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Leader Decision Engine Configuration

[comfort]
resource_ceiling = 1000

[comfort.affluence]
surplus = 20.0
yield_per_turn = 2.0

[comfort.politics]
surplus = 25.0
yield_per_turn = 2.0

[comfort.intelligence]
surplus = 25.0
yield_per_turn = 2.0

[decision]
actions_to_choose_from = 2
planets_to_choose_from = 4
candidate_pool = 4
category_weights = "independent"

[simulation]
turns = 20
seed = 42
"#
    .to_string()
}
