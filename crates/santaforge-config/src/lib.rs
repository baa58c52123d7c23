//! Configuration system for SantaForge.
//!
//! Load generator configuration from TOML or YAML files to control the
//! random seed, roster checks and batch parallelism without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use santaforge_config::{GeneratorConfig, ThreadCount};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     random_seed = 2024
//!
//!     [roster]
//!     max_participants = 20
//!     unique_contacts = true
//!
//!     [batch]
//!     thread_count = { count = 4 }
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(2024));
//! assert_eq!(config.roster.max_participants, Some(20));
//! assert_eq!(config.batch.thread_count, ThreadCount::Count(4));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use santaforge_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load("santaforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Random seed for reproducible assignments. Fresh entropy is drawn
    /// for every run when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Input checks applied to participant records before generation.
    #[serde(default)]
    pub roster: RosterRules,

    /// Batch generation settings.
    #[serde(default)]
    pub batch: BatchConfig,
}

impl GeneratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`GeneratorConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replaces the roster rules.
    pub fn with_roster(mut self, roster: RosterRules) -> Self {
        self.roster = roster;
        self
    }

    /// Sets the batch thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.batch.thread_count = thread_count;
        self
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.roster.max_participants {
            if max < 2 {
                return Err(ConfigError::Invalid(format!(
                    "roster.max_participants must be at least 2, got {max}"
                )));
            }
        }
        if self.batch.thread_count == ThreadCount::Count(0) {
            return Err(ConfigError::Invalid(
                "batch.thread_count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Checks applied to participant records before any matching work.
///
/// Everything is off by default; the identifier and restriction checks
/// the generator always performs are not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterRules {
    /// Largest group accepted.
    #[serde(default)]
    pub max_participants: Option<usize>,

    /// Reject blank display names.
    #[serde(default)]
    pub require_names: bool,

    /// Require every contact to look like an email address.
    #[serde(default)]
    pub require_contacts: bool,

    /// Reject contact addresses shared by two participants (case-insensitive).
    #[serde(default)]
    pub unique_contacts: bool,
}

impl RosterRules {
    /// Group size cap of the hosted sign-up form.
    pub const DEFAULT_MAX_PARTICIPANTS: usize = 20;

    /// All checks enabled, with the hosted form's group size cap.
    pub fn strict() -> Self {
        Self {
            max_participants: Some(Self::DEFAULT_MAX_PARTICIPANTS),
            require_names: true,
            require_contacts: true,
            unique_contacts: true,
        }
    }

    /// Returns true if no check is enabled.
    pub fn is_permissive(&self) -> bool {
        *self == Self::default()
    }
}

/// Batch generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchConfig {
    /// Number of worker threads used by batch generation.
    #[serde(default)]
    pub thread_count: ThreadCount,
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Run every request on the calling thread.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}
