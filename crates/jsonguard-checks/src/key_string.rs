//! # Key-Level String Checks
//!
//! `required` demands a non-blank string; `optional` accepts absence and
//! otherwise reports every failure as `OptionalPropertyNotAString`.
//! Constraint checks (byte length, URL, date, email) take a
//! [`Requirement`]; an optional key that is absent or null skips them.

use std::num::NonZeroUsize;

use jsonguard_core::classify::{byte_length, trim};
use jsonguard_core::{BoundViolation, Payload, StringByteLengthRange, ValidationFailure, Value};

use crate::presence::{collapse, Presence, PresenceChecker, Requirement};
use crate::value_string::ValueStringChecker;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyStringChecker {
    presence: PresenceChecker,
    value_string: ValueStringChecker,
}

impl KeyStringChecker {
    pub fn new(presence: PresenceChecker, value_string: ValueStringChecker) -> Self {
        Self {
            presence,
            value_string,
        }
    }

    pub fn required(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        self.string(key, payload)?;
        Ok(self)
    }

    pub fn optional(&self, key: &str, payload: &Payload) -> Result<&Self, ValidationFailure> {
        if self.presence.lookup(key, payload) == Presence::AbsentOrNull {
            return Ok(self);
        }
        self.required(key, payload)
            .map_err(|failure| collapse(key, failure, ValidationFailure::optional_not_a_string(key)))
    }

    /// Trimmed UTF-8 byte length within `range`.
    pub fn byte_length_range(
        &self,
        key: &str,
        payload: &Payload,
        range: &StringByteLengthRange,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.string(key, payload)?;
        let length = byte_length(value);
        range.check(length).map_err(|violation| match violation {
            BoundViolation::BelowMin(min) => ValidationFailure::string_too_short(key, min, length),
            BoundViolation::AboveMax(max) => ValidationFailure::string_too_long(key, max, length),
        })?;
        Ok(self)
    }

    /// Trimmed UTF-8 byte length exactly `expected`.
    pub fn exact_byte_length(
        &self,
        key: &str,
        payload: &Payload,
        expected: NonZeroUsize,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let length = byte_length(self.string(key, payload)?);
        if length != expected.get() {
            return Err(ValidationFailure::string_not_exact_length(
                key,
                expected.get(),
                length,
            ));
        }
        Ok(self)
    }

    pub fn url_format(
        &self,
        key: &str,
        payload: &Payload,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = self.string(key, payload)?;
        self.value_string.url_format(value)?;
        Ok(self)
    }

    /// Trimmed value must round-trip through the chrono strftime `date_format`.
    pub fn date_time_format(
        &self,
        key: &str,
        payload: &Payload,
        date_format: &str,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = trim(self.string(key, payload)?);
        self.value_string
            .date_time_format(Some(value), date_format, Requirement::Required)
            .map_err(|_| ValidationFailure::key_invalid_date(key, date_format, value))?;
        Ok(self)
    }

    pub fn email_format(
        &self,
        key: &str,
        payload: &Payload,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        if self.presence.skip_when_absent(key, payload, requirement) {
            return Ok(self);
        }
        let value = trim(self.string(key, payload)?);
        self.value_string
            .is_email_address(Some(value), Requirement::Required)
            .map_err(|_| ValidationFailure::key_not_email(key, &Value::from(value)))?;
        Ok(self)
    }

    fn string<'a>(&self, key: &str, payload: &'a Payload) -> Result<&'a str, ValidationFailure> {
        self.presence
            .require(key, payload)?
            .as_str()
            .ok_or_else(|| ValidationFailure::not_a_string(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonguard_core::FailureKind;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Value::from(value).into_array().expect("object payload")
    }

    fn checker() -> KeyStringChecker {
        KeyStringChecker::default()
    }

    #[test]
    fn test_required() {
        assert!(checker().required("k", &payload(json!({"k": "v"}))).is_ok());

        let failure = checker().required("k", &payload(json!({"k": "   "}))).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::EntryEmpty);

        let failure = checker().required("k", &payload(json!({"k": 5}))).unwrap_err();
        assert_eq!(failure.code(), "expectedStringValue");
        assert_eq!(failure.message(), "The entry 'k' is not a string");
    }

    #[test]
    fn test_optional_collapses_failures() {
        assert!(checker().optional("k", &payload(json!({}))).is_ok());
        assert!(checker().optional("k", &payload(json!({"k": null}))).is_ok());
        assert!(checker().optional("k", &payload(json!({"k": "v"}))).is_ok());
        for bad in [json!(""), json!(1), json!(["a"])] {
            let failure = checker()
                .optional("k", &payload(json!({ "k": bad })))
                .unwrap_err();
            assert_eq!(failure.code(), "entryOptionalNotString", "{bad}");
        }
    }

    #[test]
    fn test_byte_length_range() {
        let range = StringByteLengthRange::new(Some(2), Some(4)).unwrap();
        assert!(checker()
            .byte_length_range("k", &payload(json!({"k": " abc "})), &range, Requirement::Required)
            .is_ok());

        let failure = checker()
            .byte_length_range("k", &payload(json!({"k": "a"})), &range, Requirement::Required)
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "Entry 'k' is expected to be at least 2 bytes long, but it is 1"
        );

        let failure = checker()
            .byte_length_range("k", &payload(json!({"k": "大大"})), &range, Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "expectedMaxValue");
        assert_eq!(
            failure.message(),
            "Entry 'k' is expected to be 4 bytes long maximum, but it is 6"
        );
    }

    #[test]
    fn test_optional_constraint_skips_only_absent_keys() {
        let range = StringByteLengthRange::new(Some(2), None).unwrap();
        assert!(checker()
            .byte_length_range("k", &payload(json!({})), &range, Requirement::Optional)
            .is_ok());
        let failure = checker()
            .byte_length_range("k", &payload(json!({"k": ""})), &range, Requirement::Optional)
            .unwrap_err();
        assert_eq!(failure.kind(), FailureKind::EntryEmpty);
        let failure = checker()
            .byte_length_range("k", &payload(json!({})), &range, Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.kind(), FailureKind::EntryMissing);
    }

    #[test]
    fn test_exact_byte_length() {
        let three = NonZeroUsize::new(3).unwrap();
        assert!(checker()
            .exact_byte_length("k", &payload(json!({"k": "大"})), three, Requirement::Required)
            .is_ok());
        let failure = checker()
            .exact_byte_length("k", &payload(json!({"k": "ab"})), three, Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "expectedStringOfExactLength");
        assert_eq!(
            failure.message(),
            "Entry 'k' is expected to be 3 bytes long, but it is 2"
        );
    }

    #[test]
    fn test_url_format() {
        assert!(checker()
            .url_format("k", &payload(json!({"k": "https://example.com/a"})), Requirement::Required)
            .is_ok());
        let failure = checker()
            .url_format("k", &payload(json!({"k": "not a url"})), Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "requiredUrlFormat");
    }

    #[test]
    fn test_date_time_format_is_keyed() {
        let failure = checker()
            .date_time_format(
                "born",
                &payload(json!({"born": " 2023-02-29 "})),
                "%Y-%m-%d",
                Requirement::Required,
            )
            .unwrap_err();
        assert_eq!(failure.code(), "invalidDateFormat");
        assert_eq!(
            failure.message(),
            "Entry 'born' does not hold a valid '%Y-%m-%d' date: '2023-02-29'"
        );
        assert!(checker()
            .date_time_format("born", &payload(json!({"born": "2024-02-29"})), "%Y-%m-%d", Requirement::Required)
            .is_ok());
    }

    #[test]
    fn test_email_format() {
        assert!(checker()
            .email_format("mail", &payload(json!({"mail": " a@b.io "})), Requirement::Required)
            .is_ok());
        let failure = checker()
            .email_format("mail", &payload(json!({"mail": "nope"})), Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "keyNotEmail");
        assert_eq!(
            failure.message(),
            "The key 'mail' is meant to be an email address, but it isn't: 'nope'"
        );
        let failure = checker()
            .email_format("mail", &payload(json!({"mail": 42})), Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "expectedStringValue");
    }

    #[test]
    fn test_format_checks_reject_non_strings_first() {
        let body = payload(json!({"mail": 42}));
        let failures = [
            checker().email_format("mail", &body, Requirement::Optional).unwrap_err(),
            checker().url_format("mail", &body, Requirement::Optional).unwrap_err(),
            checker()
                .date_time_format("mail", &body, "%Y-%m-%d", Requirement::Optional)
                .unwrap_err(),
        ];
        for failure in failures {
            assert_eq!(failure.kind(), FailureKind::ValueNotAString);
        }
    }
}
