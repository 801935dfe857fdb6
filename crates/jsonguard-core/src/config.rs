//! # Guard Configuration
//!
//! Host-tunable settings, loaded from YAML alongside the rest of a service's
//! configuration. Every field has a default, so an empty document is valid.
//!
//! ```yaml
//! float_tolerance:
//!   epsilon: 1.0e-9
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::float::{FloatTolerance, ToleranceFloats};

/// Configuration for the validation engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Tolerance used by float range and equality checks.
    pub float_tolerance: FloatTolerance,
}

impl GuardConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.float_tolerance.validate()
    }

    /// The float oracle these settings describe.
    pub fn equal_floats(&self) -> ToleranceFloats {
        ToleranceFloats::from(self.float_tolerance)
    }
}
