//! Household editor configuration

use serde::{Deserialize, Serialize};

/// Default location of the member list in the client tree
pub const DEFAULT_BASE_PATH: &str = "household";

/// Household editor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdConfig {
    /// Path of the member list (`household`, `current/household`, ...)
    pub base_path: String,
    /// Age given to a member appended as the second entry
    pub spouse_age: u64,
    /// Age given to any later appended member
    pub child_age: u64,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            spouse_age: 30,
            child_age: 12,
        }
    }
}

impl HouseholdConfig {
    /// Create default config
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With list location
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// With spouse default age
    #[must_use]
    pub fn with_spouse_age(mut self, age: u64) -> Self {
        self.spouse_age = age;
        self
    }

    /// With child default age
    #[must_use]
    pub fn with_child_age(mut self, age: u64) -> Self {
        self.child_age = age;
        self
    }
}
