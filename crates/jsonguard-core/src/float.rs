//! # Float Equality: Tolerance-Based Comparison
//!
//! Range and equality checks on floats never use `==` directly. They ask an
//! [`EqualFloats`] oracle, so `0.1 + 0.2` equals `0.3` while values that
//! differ in a meaningful decimal place (`3.249999999` vs `3.25`) do not.
//!
//! The stock oracle, [`ToleranceFloats`], compares relative to
//! `max(1, |a|, |b|)` with a configurable epsilon (default `1e-12`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default epsilon of [`FloatTolerance`].
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Decides whether two floats are equal for validation purposes.
pub trait EqualFloats: fmt::Debug + Send + Sync {
    /// Returns true when `a` and `b` are considered equal.
    fn equal_floats(&self, a: f64, b: f64) -> bool;
}

/// Tolerance settings for [`ToleranceFloats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloatTolerance {
    /// Relative epsilon.
    pub epsilon: f64,
}

impl Default for FloatTolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl FloatTolerance {
    /// Reject tolerances that would make every comparison meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epsilon.is_finite() && (0.0..1.0).contains(&self.epsilon) {
            Ok(())
        } else {
            Err(ConfigError::InvalidEpsilon(self.epsilon))
        }
    }
}

/// Relative-tolerance float comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceFloats {
    epsilon: f64,
}

impl ToleranceFloats {
    pub fn new(tolerance: FloatTolerance) -> Self {
        Self {
            epsilon: tolerance.epsilon,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for ToleranceFloats {
    fn default() -> Self {
        Self::new(FloatTolerance::default())
    }
}

impl From<FloatTolerance> for ToleranceFloats {
    fn from(tolerance: FloatTolerance) -> Self {
        Self::new(tolerance)
    }
}

impl EqualFloats for ToleranceFloats {
    fn equal_floats(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let scale = 1f64.max(a.abs()).max(b.abs());
        (a - b).abs() <= self.epsilon * scale
    }
}
