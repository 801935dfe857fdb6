//! # Key-Level Boolean Checks

use jsonguard_core::classify::is_boolean;
use jsonguard_core::{Payload, ValidationFailure};

use crate::presence::{collapse, Presence, PresenceChecker};

/// Accepts literal `true` and `false` only.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyBooleanChecker {
    presence: PresenceChecker,
}

impl KeyBooleanChecker {
    pub fn new(presence: PresenceChecker) -> Self {
        Self { presence }
    }

    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        let value = self.presence.require(key, payload)?;
        if !is_boolean(value) {
            return Err(ValidationFailure::invalid_bool(key));
        }
        Ok(self)
    }

    pub fn optional(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        if self.presence.lookup(key, payload) == Presence::AbsentOrNull {
            return Ok(self);
        }
        self.required(key, payload).map_err(|failure| {
            collapse(key, failure, ValidationFailure::optional_not_a_boolean(key))
        })
    }
}
