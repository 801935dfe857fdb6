//! # Error Types: Validation Failures and Programmer Errors
//!
//! Defines the error types used throughout jsonguard. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - [`ValidationFailure`] is what a payload check returns. It carries a
//!   [`FailureKind`] (stable code and family), a message template with
//!   `%name%` placeholders and the named arguments interpolated into it.
//!   The rendered message is computed once at construction.
//! - [`RangeError`] is a programmer error: a range built with bounds that
//!   cannot describe any interval.
//! - [`ConfigError`] covers configuration loading.
//! - [`GuardError`] is the umbrella for hosts that want a single type.
//!
//! Constructors on `ValidationFailure` are named after the situation they
//! report, so checkers never spell templates inline.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::kind::{FailureFamily, FailureKind};
use crate::value::Value;

/// Serialized form of a failure: the stable code and the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Stable wire code.
    pub code: String,
    /// Rendered human-readable message.
    pub message: String,
}

/// A payload violated a field contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    kind: FailureKind,
    template: &'static str,
    arguments: BTreeMap<&'static str, String>,
    message: String,
}

impl ValidationFailure {
    fn compose<const N: usize>(
        kind: FailureKind,
        template: &'static str,
        arguments: [(&'static str, String); N],
    ) -> Self {
        let arguments: BTreeMap<&'static str, String> = arguments.into_iter().collect();
        let message = interpolate(template, &arguments);
        Self {
            kind,
            template,
            arguments,
            message,
        }
    }

    /// The failure kind.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Stable wire code, shorthand for `kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Family of the failure kind.
    pub fn family(&self) -> FailureFamily {
        self.kind.family()
    }

    /// Raw template with `%name%` placeholders, for external renderers.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Named interpolation arguments.
    pub fn arguments(&self) -> &BTreeMap<&'static str, String> {
        &self.arguments
    }

    /// One interpolation argument by name.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The `{code, message}` pair sent to API clients.
    pub fn serialize(&self) -> FailureReport {
        FailureReport {
            code: self.code().to_string(),
            message: self.message.clone(),
        }
    }
}

/// Replace each `%name%` with its argument. Unknown placeholders stay literal.
fn interpolate(template: &str, arguments: &BTreeMap<&'static str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substituted = after
            .find('%')
            .and_then(|end| arguments.get(&after[..end]).map(|value| (end, value)));
        match substituted {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn text(value: impl fmt::Display) -> String {
    value.to_string()
}

fn joined(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

// Presence

impl ValidationFailure {
    pub fn entry_missing(key: &str) -> Self {
        Self::compose(FailureKind::EntryMissing, "Entry '%key%' missing", [("key", text(key))])
    }

    pub fn entry_empty(key: &str) -> Self {
        Self::compose(FailureKind::EntryEmpty, "Entry '%key%' empty", [("key", text(key))])
    }

    pub fn entry_forbidden(key: &str) -> Self {
        Self::compose(
            FailureKind::EntryForbidden,
            "Entry '%key%' should not be present in the payload",
            [("key", text(key))],
        )
    }
}

// Scalar types

impl ValidationFailure {
    pub fn invalid_bool(key: &str) -> Self {
        Self::compose(
            FailureKind::InvalidBoolValue,
            "The entry '%key%' does not hold a valid boolean value",
            [("key", text(key))],
        )
    }

    pub fn invalid_integer(key: &str) -> Self {
        Self::compose(
            FailureKind::InvalidIntegerValue,
            "Entry '%key%' does not hold a valid int value",
            [("key", text(key))],
        )
    }

    /// A list element at `index` is not an integer.
    pub fn item_not_an_integer(index: usize) -> Self {
        Self::compose(
            FailureKind::InvalidIntegerValue,
            "Item index '%index%' does not hold a valid int value",
            [("index", text(index))],
        )
    }

    /// A boolean or a number that does not survive the trip through `f64`.
    pub fn float_unparsable(key: &str, value: &Value) -> Self {
        Self::compose(
            FailureKind::ValueNotAFloat,
            "The entry '%key%' is required to be a float type, but could not be parsed as such: '%value%'",
            [("key", text(key)), ("value", text(value))],
        )
    }

    pub fn float_got_string(key: &str, value: &str) -> Self {
        Self::compose(
            FailureKind::ValueNotAFloat,
            "The entry '%key%' is required to be a float type, but got a string: '%value%'",
            [("key", text(key)), ("value", text(value))],
        )
    }

    pub fn not_a_float(key: &str) -> Self {
        Self::compose(
            FailureKind::ValueNotAFloat,
            "The entry '%key%' is required to be a float type",
            [("key", text(key))],
        )
    }

    pub fn not_a_string(key: &str) -> Self {
        Self::compose(
            FailureKind::ValueNotAString,
            "The entry '%key%' is not a string",
            [("key", text(key))],
        )
    }

    pub fn item_not_a_string(index: usize) -> Self {
        Self::compose(
            FailureKind::ValueNotAString,
            "Item index '%index%' is not a string",
            [("index", text(index))],
        )
    }

    pub fn value_string_empty() -> Self {
        Self::compose(
            FailureKind::ValueStringEmpty,
            "Expected a string, but got null or empty string",
            [],
        )
    }
}

// Containers

impl ValidationFailure {
    pub fn not_an_array(key: &str) -> Self {
        Self::compose(
            FailureKind::ValueNotAnArray,
            "Entry '%key%' is expected to be an array",
            [("key", text(key))],
        )
    }

    pub fn associative_array() -> Self {
        Self::compose(FailureKind::AssociativeArray, "Associative arrays not supported", [])
    }

    pub fn first_index_not_zero() -> Self {
        Self::compose(
            FailureKind::FirstIndexNotZero,
            "The first key of this array is not 0",
            [],
        )
    }

    pub fn last_index_mismatch(expected: i64, actual: i64) -> Self {
        Self::compose(
            FailureKind::LastIndexMismatch,
            "The last key is expected to be %expected%, but it is %actual%",
            [("expected", text(expected)), ("actual", text(actual))],
        )
    }

    pub fn required_array_empty() -> Self {
        Self::compose(
            FailureKind::RequiredArrayIsEmpty,
            "The array is required not to be empty",
            [],
        )
    }

    pub fn item_not_a_json_object(index: usize) -> Self {
        Self::compose(
            FailureKind::ValueNotAJsonObject,
            "Item index '%index%' is not a JSON object",
            [("index", text(index))],
        )
    }

    pub fn invalid_json_object(key: &str) -> Self {
        Self::compose(
            FailureKind::InvalidJsonObjectValue,
            "The key '%key%' is required and must point to a valid JSON object",
            [("key", text(key))],
        )
    }

    pub fn optional_invalid_json_object(key: &str) -> Self {
        Self::compose(
            FailureKind::InvalidJsonObjectValue,
            "The key '%key%' is optional, but if provided, it must be a valid JSON object",
            [("key", text(key))],
        )
    }

    pub fn array_not_exact_length(expected: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueArrayNotExactLength,
            "Value is expected to be an array of exact length of %expected%, but it is %actual%",
            [("expected", text(expected)), ("actual", text(actual))],
        )
    }

    pub fn key_array_not_exact_length(key: &str, expected: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueArrayNotExactLength,
            "The key '%key%' is expected to be an array of exact length of %expected%, but it is %actual%",
            [("key", text(key)), ("expected", text(expected)), ("actual", text(actual))],
        )
    }
}

// Bounds

impl ValidationFailure {
    /// A keyed number below its minimum.
    pub fn below_min(key: &str, min: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "Entry '%key%' is meant to be equals or greater than '%expected%': '%actual%'",
            [("key", text(key)), ("expected", text(min)), ("actual", text(actual))],
        )
    }

    /// A keyed number above its maximum.
    pub fn above_max(key: &str, max: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "Entry '%key%' is meant to be equals or less than '%expected%': '%actual%'",
            [("key", text(key)), ("expected", text(max)), ("actual", text(actual))],
        )
    }

    pub fn value_below_min(min: i64, actual: i64) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "The int value is meant to be equals or greater than '%expected%': '%actual%'",
            [("expected", text(min)), ("actual", text(actual))],
        )
    }

    pub fn value_above_max(max: i64, actual: i64) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "The int value is meant to be equals or less than '%expected%': '%actual%'",
            [("expected", text(max)), ("actual", text(actual))],
        )
    }

    pub fn not_equal_to(key: &str, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::compose(
            FailureKind::ValueNotEqualsTo,
            "Entry '%key%' is meant to be '%expected%', but is '%actual%'",
            [("key", text(key)), ("expected", text(expected)), ("actual", text(actual))],
        )
    }

    pub fn string_too_short(key: &str, min: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "Entry '%key%' is expected to be at least %expected% bytes long, but it is %actual%",
            [("key", text(key)), ("expected", text(min)), ("actual", text(actual))],
        )
    }

    pub fn string_too_long(key: &str, max: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "Entry '%key%' is expected to be %expected% bytes long maximum, but it is %actual%",
            [("key", text(key)), ("expected", text(max)), ("actual", text(actual))],
        )
    }

    pub fn value_string_too_short(min: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "Value is meant to be a string of at least %expected% bytes, but it is %actual%",
            [("expected", text(min)), ("actual", text(actual))],
        )
    }

    pub fn value_string_too_long(max: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "Value is meant to be a string of %expected% bytes maximum, but it is %actual%",
            [("expected", text(max)), ("actual", text(actual))],
        )
    }

    pub fn string_not_exact_length(key: &str, expected: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueStringNotExactLength,
            "Entry '%key%' is expected to be %expected% bytes long, but it is %actual%",
            [("key", text(key)), ("expected", text(expected)), ("actual", text(actual))],
        )
    }

    pub fn array_too_short(min: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "Value is meant to be an array of minimum length of %expected%, but it is %actual%",
            [("expected", text(min)), ("actual", text(actual))],
        )
    }

    pub fn array_too_long(max: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "Value is meant to be an array of maximum length of %expected%, but it is %actual%",
            [("expected", text(max)), ("actual", text(actual))],
        )
    }

    pub fn key_array_too_short(key: &str, min: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooSmall,
            "Entry '%key%' is meant to be an array of minimum length of %expected%, but it is %actual%",
            [("key", text(key)), ("expected", text(min)), ("actual", text(actual))],
        )
    }

    pub fn key_array_too_long(key: &str, max: usize, actual: usize) -> Self {
        Self::compose(
            FailureKind::ValueTooBig,
            "Entry '%key%' is meant to be an array of maximum length of %expected%, but it is %actual%",
            [("key", text(key)), ("expected", text(max)), ("actual", text(actual))],
        )
    }
}

// Enumerations

impl ValidationFailure {
    pub fn not_in_list(key: &str, valid_values: &[Value], given: &Value) -> Self {
        Self::compose(
            FailureKind::ValueNotInList,
            "The key '%key%' can only be one of the following: [%values%], but it is '%givenValue%'",
            [
                ("key", text(key)),
                ("values", joined(valid_values)),
                ("givenValue", text(given)),
            ],
        )
    }

    pub fn optional_not_in_list(key: &str, valid_values: &[Value], given: &Value) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotAnEnum,
            "The key '%key%' is optional, but if provided it can only be one of the following: [%values%], but it is '%givenValue%'",
            [
                ("key", text(key)),
                ("values", joined(valid_values)),
                ("givenValue", text(given)),
            ],
        )
    }
}

// Formats

impl ValidationFailure {
    pub fn key_invalid_date(key: &str, format: &str, value: &str) -> Self {
        Self::compose(
            FailureKind::InvalidDateValue,
            "Entry '%key%' does not hold a valid '%format%' date: '%value%'",
            [("key", text(key)), ("format", text(format)), ("value", text(value))],
        )
    }

    pub fn invalid_date(format: &str, value: &str) -> Self {
        Self::compose(
            FailureKind::InvalidDateValue,
            "String not in format '%format%' date: '%value%'",
            [("format", text(format)), ("value", text(value))],
        )
    }

    pub fn components_not_a_date(year: i64, month: i64, day: i64) -> Self {
        Self::compose(
            FailureKind::IntegerComponentsDontRepresentDate,
            "Cannot construct a date with year '%year%', month '%month%' and day '%day%'",
            [("year", text(year)), ("month", text(month)), ("day", text(day))],
        )
    }

    pub fn not_an_url(value: &str) -> Self {
        Self::compose(
            FailureKind::StringIsNotAnUrl,
            "The string '%url%' doesn't resemble an actual URL",
            [("url", text(value))],
        )
    }

    pub fn key_not_email(key: &str, value: &Value) -> Self {
        Self::compose(
            FailureKind::KeyNotEmail,
            "The key '%key%' is meant to be an email address, but it isn't: '%value%'",
            [("key", text(key)), ("value", text(value))],
        )
    }

    pub fn value_not_email(value: &str) -> Self {
        Self::compose(
            FailureKind::StringValueNotAnEmail,
            "The value '%value%' is meant to represent an email address, but it doesn't",
            [("value", text(value))],
        )
    }
}

// Optional collapses

impl ValidationFailure {
    pub fn optional_not_a_string(key: &str) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotAString,
            "The entry '%key%' is optional, but if provided it should be a string",
            [("key", text(key))],
        )
    }

    pub fn optional_value_not_a_string() -> Self {
        Self::compose(
            FailureKind::OptionalValueNotAString,
            "The value is optional, but if provided it should be a non empty string",
            [],
        )
    }

    pub fn optional_not_an_integer(key: &str) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotAnInteger,
            "The entry '%key%' is optional, but if provided it should be an integer",
            [("key", text(key))],
        )
    }

    pub fn optional_not_a_float(key: &str) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotAFloat,
            "The entry '%key%' is optional, but if provided it should be a float",
            [("key", text(key))],
        )
    }

    pub fn optional_not_a_boolean(key: &str) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotABoolean,
            "The entry '%key%' is optional, but if provided it should be a boolean",
            [("key", text(key))],
        )
    }

    pub fn optional_not_an_array(key: &str) -> Self {
        Self::compose(
            FailureKind::OptionalPropertyNotAnArray,
            "The entry '%key%' is optional, but if provided it should be an array",
            [("key", text(key))],
        )
    }
}

/// A range was built with bounds that describe no interval.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Neither bound given.
    #[error("no range given: at least one of min or max is required")]
    NoRangeGiven,

    /// Both bounds given but `min >= max`.
    #[error("range not correctly defined: min ({min}) must be strictly lower than max ({max})")]
    NotStrictlyOrdered {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },

    /// Length minimum below one.
    #[error("length ranges start at 1, given min: {0}")]
    MinBelowOne(usize),

    /// Length maximum below one.
    #[error("length ranges start at 1, given max: {0}")]
    MaxBelowOne(usize),

    /// A float bound is NaN or infinite.
    #[error("float range bounds must be finite, given: {0}")]
    NonFiniteBound(f64),
}

/// Configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document failed to parse or did not match the schema.
    #[error("invalid configuration document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The float tolerance is unusable.
    #[error("float tolerance epsilon must be finite, non-negative and below 1, got {0}")]
    InvalidEpsilon(f64),

    /// An unknown failure family name.
    #[error("unknown failure family: {0:?}")]
    UnknownFamily(String),
}

/// Top-level error type for jsonguard.
#[derive(Error, Debug)]
pub enum GuardError {
    /// A payload violated a field contract.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// A range was misconfigured.
    #[error("invalid range: {0}")]
    Range(#[from] RangeError),

    /// Configuration failed to load.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
