//! # Key-Level JSON Object Checks
//!
//! A JSON object is a non-empty container whose keys are all textual.
//! Decoded objects with canonical numeric keys (`{"0": ...}`) are lists,
//! not objects.

use jsonguard_core::classify::is_object;
use jsonguard_core::{Payload, ValidationFailure};

use crate::presence::{collapse, Presence, PresenceChecker};

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyJsonObjectChecker {
    presence: PresenceChecker,
}

impl KeyJsonObjectChecker {
    pub fn new(presence: PresenceChecker) -> Self {
        Self { presence }
    }

    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        let value = self.presence.require(key, payload)?;
        if !is_object(value) {
            return Err(ValidationFailure::invalid_json_object(key));
        }
        Ok(self)
    }

    pub fn optional(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        if self.presence.lookup(key, payload) == Presence::AbsentOrNull {
            return Ok(self);
        }
        self.required(key, payload).map_err(|failure| {
            collapse(key, failure, ValidationFailure::optional_invalid_json_object(key))
        })
    }
}
