//! # Key-Level Array Checks
//!
//! A required array key must hold a non-empty container whose keys are
//! exactly `0..n-1`. Element and length constraints run only after that
//! holds, and report failures under the key's name.
//!
//! `optional_key` differs from the other checkers in one respect: a
//! present-but-empty array passes.

use std::num::NonZeroUsize;

use jsonguard_core::classify::check_list_structure;
use jsonguard_core::{Array, ArrayLengthRange, Payload, ValidationFailure, Value};

use crate::presence::{collapse, Presence, PresenceChecker, Requirement};
use crate::value_array::ValueArrayChecker;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyArrayChecker {
    presence: PresenceChecker,
    value_array: ValueArrayChecker,
}

impl KeyArrayChecker {
    pub fn new(presence: PresenceChecker, value_array: ValueArrayChecker) -> Self {
        Self {
            presence,
            value_array,
        }
    }

    pub fn required_key(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        self.list(key, payload)?;
        Ok(self)
    }

    pub fn optional_key(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        let Presence::Present(value) = self.presence.lookup(key, payload) else {
            return Ok(self);
        };
        match value {
            Value::Array(array) if array.is_empty() => Ok(self),
            Value::Array(_) => self.required_key(key, payload).map_err(|failure| {
                collapse(key, failure, ValidationFailure::optional_not_an_array(key))
            }),
            _ => Err(ValidationFailure::optional_not_an_array(key)),
        }
    }

    /// Non-empty list whose every element is a JSON object.
    pub fn key_array_of_json_objects(
        &self,
        key: &str,
        payload: &Payload,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let elements = self.list(key, payload)?;
        self.value_array
            .array_of_json_objects(elements, Requirement::Required)?;
        Ok(self)
    }

    pub fn key_array_of_exact_length(
        &self,
        key: &str,
        payload: &Payload,
        expected: NonZeroUsize,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let elements = self.list(key, payload)?;
        self.value_array
            .array_of_exact_length(elements, expected)
            .map_err(|_| {
                ValidationFailure::key_array_not_exact_length(key, expected.get(), elements.len())
            })?;
        Ok(self)
    }

    pub fn key_array_of_length_range(
        &self,
        key: &str,
        payload: &Payload,
        range: &ArrayLengthRange,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let elements = self.list(key, payload)?;
        let count = elements.len();
        self.value_array
            .array_of_length_range(elements, range)
            .map_err(|failure| match (range.min(), range.max()) {
                (Some(min), _) if count < min => ValidationFailure::key_array_too_short(key, min, count),
                (_, Some(max)) if count > max => ValidationFailure::key_array_too_long(key, max, count),
                _ => failure,
            })?;
        Ok(self)
    }

    fn list<'a>(&self, key: &str, payload: &'a Payload) -> Result<&'a Array, ValidationFailure> {
        let elements = self
            .presence
            .require(key, payload)?
            .as_array()
            .ok_or_else(|| ValidationFailure::not_an_array(key))?;
        if elements.is_empty() {
            return Err(ValidationFailure::required_array_empty());
        }
        check_list_structure(elements)?;
        Ok(elements)
    }
}
