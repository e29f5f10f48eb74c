use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::global_variables::{
    DEFAULT_DELAY, DEFAULT_PRIMARY_NAME, DEFAULT_RANDOM_ARRIVALS, DEFAULT_SECONDARY_NAME,
    DEFAULT_SEED,
};
use crate::models::time::Time;
use crate::monitoring::narrator::NarrationFormat;

fn default_delay() -> Time {
    let (h, m, s) = DEFAULT_DELAY;
    Time::new(h, m, s)
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_count() -> usize {
    DEFAULT_RANDOM_ARRIVALS
}

/// One arm of the intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    pub name: String,
    #[serde(default = "default_delay")]
    pub delay: Time,
}

impl LightConfig {
    pub fn new(name: impl Into<String>, delay: Time) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

/// A car arriving at the named light, optionally after re-synchronising the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    pub light: String,
    #[serde(default)]
    pub at: Option<Time>,
}

impl ArrivalConfig {
    pub fn new(light: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            at: None,
        }
    }
}

/// Where the cars come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Arrivals {
    /// A fixed list of arrivals, replayed in order.
    Scripted { requests: Vec<ArrivalConfig> },
    /// `count` arrivals on random arms with random idle gaps, reproducible from `seed`.
    Random {
        #[serde(default = "default_count")]
        count: usize,
        #[serde(default = "default_seed")]
        seed: u64,
    },
}

/// Scenario settings. Every field is optional in JSON and falls back to
/// [`SimulationConfig::default`]; `"secondary": null` gives an isolated light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub start_time: Time,
    pub primary: LightConfig,
    pub secondary: Option<LightConfig>,
    pub arrivals: Arrivals,
    pub narration: NarrationFormat,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_time: Time::default(),
            primary: LightConfig::new(DEFAULT_PRIMARY_NAME, default_delay()),
            secondary: Some(LightConfig::new(DEFAULT_SECONDARY_NAME, default_delay())),
            arrivals: Arrivals::Scripted {
                requests: vec![
                    ArrivalConfig::new(DEFAULT_PRIMARY_NAME),
                    ArrivalConfig::new(DEFAULT_SECONDARY_NAME),
                    ArrivalConfig::new(DEFAULT_SECONDARY_NAME),
                    ArrivalConfig::new(DEFAULT_PRIMARY_NAME),
                ],
            },
            narration: NarrationFormat::Text,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks light names. Arrival names are resolved when the scenario runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if let Some(secondary) = &self.secondary {
            if secondary.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if secondary.name == self.primary.name {
                return Err(ConfigError::DuplicateName(secondary.name.clone()));
            }
        }
        Ok(())
    }
}
