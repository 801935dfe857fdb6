//! # Request Payload Validators
//!
//! Callers compose checkers into one validator per request type and
//! implement [`ValidateJsonPayload`] on it. The first violated rule is
//! returned; nothing is accumulated.

use jsonguard_core::{Array, Payload, ValidationFailure, Value};

/// A validator for one kind of request body.
pub trait ValidateJsonPayload {
    /// Validate a decoded payload.
    fn validate(&self, payload: &Payload) -> Result<(), ValidationFailure>;

    /// Validate any decoded JSON value. A scalar body is treated as an
    /// empty payload, so required keys report as missing.
    fn validate_value(&self, value: &Value) -> Result<(), ValidationFailure> {
        match value.as_array() {
            Some(payload) => self.validate(payload),
            None => self.validate(&Array::new()),
        }
    }

    fn validate_json(&self, document: &serde_json::Value) -> Result<(), ValidationFailure> {
        self.validate_value(&Value::from(document))
    }
}
