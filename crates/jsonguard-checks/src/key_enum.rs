//! # Key-Level Enumeration Checks
//!
//! A value matches an enumeration when it is strictly equal, type and
//! value, to one of the caller's valid values: `"1"` never matches `1`,
//! and `1.0` never matches `1`. Container values are rendered as JSON in
//! failure messages.

use jsonguard_core::{Payload, ValidationFailure, Value};

use crate::presence::{collapse, Presence, PresenceChecker, Requirement};

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEnumChecker {
    presence: PresenceChecker,
}

impl KeyEnumChecker {
    pub fn new(presence: PresenceChecker) -> Self {
        Self { presence }
    }

    pub fn required(
        &self,
        key: &str,
        payload: &Payload,
        valid_values: &[Value],
    ) -> Result<&Self, ValidationFailure> {
        let value = self.presence.require(key, payload)?;
        if !valid_values.contains(value) {
            return Err(ValidationFailure::not_in_list(key, valid_values, value));
        }
        Ok(self)
    }

    pub fn optional(
        &self,
        key: &str,
        payload: &Payload,
        valid_values: &[Value],
    ) -> Result<&Self, ValidationFailure> {
        let Presence::Present(value) = self.presence.lookup(key, payload) else {
            return Ok(self);
        };
        self.required(key, payload, valid_values).map_err(|failure| {
            collapse(
                key,
                failure,
                ValidationFailure::optional_not_in_list(key, valid_values, value),
            )
        })
    }

    /// Enumeration check with an explicit [`Requirement`]; no collapsing.
    pub fn is_enum(
        &self,
        key: &str,
        payload: &Payload,
        valid_values: &[Value],
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        self.required(key, payload, valid_values)
    }
}
