//! Session configuration
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! history_limit = 16
//!
//! [household]
//! base_path = "current/household"
//! spouse_age = 30
//! child_age = 12
//!
//! [gate]
//! decline_route = "/"
//! required = true
//! ```

use intake_gate::GateConfig;
use intake_household::HouseholdConfig;
use intake_state::{Path, PathError, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};

/// Errors raised while loading or checking configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML did not parse
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Household path does not parse
    #[error("invalid household base path '{path}': {source}")]
    InvalidBasePath {
        path: String,
        #[source]
        source: PathError,
    },

    /// Household path addresses the root
    #[error("household base path must not be empty")]
    EmptyBasePath,

    /// Nowhere to go on decline
    #[error("gate decline route must not be empty")]
    EmptyDeclineRoute,
}

/// Intake session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Number of past roots kept for undo (0 disables)
    pub history_limit: usize,
    /// Household editor settings
    pub household: HouseholdConfig,
    /// Acceptance gate settings
    pub gate: GateConfig,
}

impl IntakeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With household settings
    #[inline]
    #[must_use]
    pub fn with_household(mut self, household: HouseholdConfig) -> Self {
        self.household = household;
        self
    }

    /// With gate settings
    #[inline]
    #[must_use]
    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }

    /// With undo history size
    #[inline]
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or fails [`validate`](Self::validate)
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check values the type system cannot
    ///
    /// # Errors
    /// Returns the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base: Path =
            self.household
                .base_path
                .parse()
                .map_err(|source| ConfigError::InvalidBasePath {
                    path: self.household.base_path.clone(),
                    source,
                })?;
        if base.is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        if self.gate.decline_route.is_empty() {
            return Err(ConfigError::EmptyDeclineRoute);
        }
        Ok(())
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            household: HouseholdConfig::default(),
            gate: GateConfig::default(),
        }
    }
}
