//! # Key-Level Float Checks
//!
//! Any JSON number whose rendering survives the trip through `f64` is a
//! float; integers beyond 2^53 that lose precision are not. Booleans,
//! strings and containers are rejected with messages that say which.
//!
//! Range and equality checks compare through the configured
//! [`EqualFloats`] oracle, never with `==`.

use std::sync::Arc;

use jsonguard_core::classify::as_float;
use jsonguard_core::{
    BoundViolation, EqualFloats, FloatRange, GuardConfig, Payload, ToleranceFloats,
    ValidationFailure, Value,
};

use crate::presence::{collapse, Presence, PresenceChecker, Requirement};

#[derive(Debug, Clone)]
pub struct KeyFloatChecker {
    presence: PresenceChecker,
    floats: Arc<dyn EqualFloats>,
}

impl Default for KeyFloatChecker {
    fn default() -> Self {
        Self::new(PresenceChecker, Arc::new(ToleranceFloats::default()))
    }
}

impl KeyFloatChecker {
    pub fn new(presence: PresenceChecker, floats: Arc<dyn EqualFloats>) -> Self {
        Self { presence, floats }
    }

    /// Checker comparing with the tolerance from `config`.
    pub fn with_config(config: &GuardConfig) -> Self {
        Self::new(PresenceChecker, Arc::new(config.equal_floats()))
    }

    /// The oracle, for building [`FloatRange`]s that agree with this checker.
    pub fn floats(&self) -> &dyn EqualFloats {
        self.floats.as_ref()
    }

    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        self.float(key, payload)?;
        Ok(self)
    }

    pub fn optional(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        if self.presence.lookup(key, payload) == Presence::AbsentOrNull {
            return Ok(self);
        }
        self.required(key, payload)
            .map_err(|failure| collapse(key, failure, ValidationFailure::optional_not_a_float(key)))
    }

    /// Values tolerantly equal to a bound are within the range.
    pub fn within_range(
        &self,
        key: &str,
        payload: &Payload,
        range: &FloatRange,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.float(key, payload)?;
        range
            .check(self.floats(), value)
            .map_err(|violation| match violation {
                BoundViolation::BelowMin(min) => ValidationFailure::below_min(key, min, value),
                BoundViolation::AboveMax(max) => ValidationFailure::above_max(key, max, value),
            })?;
        Ok(self)
    }

    pub fn equals_to(
        &self,
        key: &str,
        payload: &Payload,
        expected: f64,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.float(key, payload)?;
        if !self.floats.equal_floats(value, expected) {
            return Err(ValidationFailure::not_equal_to(key, expected, value));
        }
        Ok(self)
    }

    fn float(&self, key: &str, payload: &Payload) -> Result<f64, ValidationFailure> {
        let value = self.presence.require(key, payload)?;
        match value {
            Value::String(s) => Err(ValidationFailure::float_got_string(key, s)),
            Value::Array(_) | Value::Null => Err(ValidationFailure::not_a_float(key)),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => {
                as_float(value).ok_or_else(|| ValidationFailure::float_unparsable(key, value))
            }
        }
    }
}
