//! # Presence Checker
//!
//! Decides whether a key is present, absent, or present-but-empty. Every
//! key-level checker starts here.
//!
//! ## Semantics
//!
//! - *Required* keys must exist and be non-empty. Empty means `null`, a
//!   string that is blank after trimming, or an empty container. `0`,
//!   `0.0`, `"0"` and `false` are present.
//! - *Forbidden* keys may be absent or `null`; any other value fails.
//! - *Optional* branches ask [`PresenceChecker::lookup`] instead of catching
//!   a forbidden failure: absent and `null` are the same answer.

use jsonguard_core::classify::is_empty_value;
use jsonguard_core::{Payload, ValidationFailure, Value};

/// Whether a constrained key must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    /// The key must be present and non-empty.
    #[default]
    Required,
    /// The key may be absent or null; if present it must satisfy the check.
    Optional,
}

impl Requirement {
    pub fn is_required(&self) -> bool {
        matches!(self, Requirement::Required)
    }
}

/// Outcome of looking a key up in a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// The key holds a non-null value.
    Present(&'a Value),
    /// The key is missing or holds `null`.
    AbsentOrNull,
}

/// Presence rules for a single key.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceChecker;

impl PresenceChecker {
    pub fn new() -> Self {
        Self
    }

    /// Fail unless `key` exists and holds a non-empty value.
    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        self.require(key, payload)?;
        Ok(self)
    }

    /// Fail if `key` holds anything other than `null`.
    pub fn forbidden(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        match self.lookup(key, payload) {
            Presence::Present(_) => Err(ValidationFailure::entry_forbidden(key)),
            Presence::AbsentOrNull => Ok(self),
        }
    }

    pub fn lookup<'a>(&self, key: &str, payload: &'a Payload) -> Presence<'a> {
        match payload.get(key) {
            None | Some(Value::Null) => Presence::AbsentOrNull,
            Some(value) => Presence::Present(value),
        }
    }

    /// True when an optional constraint on `key` has nothing to check.
    pub fn skip_when_absent(&self, key: &str, payload: &Payload, requirement: Requirement) -> bool {
        let skip = requirement == Requirement::Optional
            && self.lookup(key, payload) == Presence::AbsentOrNull;
        if skip {
            tracing::trace!(key, "optional entry absent, constraint skipped");
        }
        skip
    }

    /// Same rules as [`required`](Self::required), returning the value.
    pub fn require<'a>(&self, key: &str, payload: &'a Payload) -> Result<&'a Value, ValidationFailure> {
        let value = payload
            .get(key)
            .ok_or_else(|| ValidationFailure::entry_missing(key))?;
        if is_empty_value(value) {
            return Err(ValidationFailure::entry_empty(key));
        }
        Ok(value)
    }
}

/// Replace a required-check failure with the optional variant, logging what was dropped.
pub(crate) fn collapse(
    key: &str,
    failure: ValidationFailure,
    optional: ValidationFailure,
) -> ValidationFailure {
    tracing::debug!(
        key,
        collapsed_code = failure.code(),
        reported_code = optional.code(),
        "optional entry failed its required check"
    );
    optional
}
