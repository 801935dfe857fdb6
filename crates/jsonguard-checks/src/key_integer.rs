//! # Key-Level Integer Checks
//!
//! Only JSON integers pass. `1.0`, `"1"` and `true` are rejected with
//! `InvalidIntegerValue`; under `optional` they collapse into
//! `OptionalPropertyNotAnInteger`.

use jsonguard_core::classify::is_integer;
use jsonguard_core::{BoundViolation, IntValueRange, Payload, ValidationFailure, Value};

use crate::presence::{collapse, Presence, PresenceChecker, Requirement};

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyIntegerChecker {
    presence: PresenceChecker,
}

impl KeyIntegerChecker {
    pub fn new(presence: PresenceChecker) -> Self {
        Self { presence }
    }

    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        self.integer(key, payload)?;
        Ok(self)
    }

    pub fn optional(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        if self.presence.lookup(key, payload) == Presence::AbsentOrNull {
            return Ok(self);
        }
        self.required(key, payload).map_err(|failure| {
            collapse(key, failure, ValidationFailure::optional_not_an_integer(key))
        })
    }

    pub fn within_range(
        &self,
        key: &str,
        payload: &Payload,
        range: &IntValueRange,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.integer(key, payload)?;
        range.check(value).map_err(|violation| match violation {
            BoundViolation::BelowMin(min) => ValidationFailure::below_min(key, min, value),
            BoundViolation::AboveMax(max) => ValidationFailure::above_max(key, max, value),
        })?;
        Ok(self)
    }

    pub fn equals_to(
        &self,
        key: &str,
        payload: &Payload,
        expected: i64,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.integer(key, payload)?;
        if value != expected {
            return Err(ValidationFailure::not_equal_to(key, expected, value));
        }
        Ok(self)
    }

    fn integer(&self, key: &str, payload: &Payload) -> Result<i64, ValidationFailure> {
        let value = self.presence.require(key, payload)?;
        match value {
            Value::Int(i) if is_integer(value) => Ok(*i),
            _ => Err(ValidationFailure::invalid_integer(key)),
        }
    }
}
