//! # Value Classifiers and the List-Structure Validator
//!
//! Pure predicates over [`Value`] that decide exact types without coercion.
//! A string `"1"` is never an integer, a float `1.0` is never an integer,
//! and `false` is never a number.
//!
//! ## Round-Trip Rule
//!
//! Numbers are accepted as integers or floats only when their decimal
//! rendering survives the trip through the target type unchanged. This
//! rejects integers beyond 2^53 where a float check would silently lose
//! precision.
//!
//! ## List Structure
//!
//! [`check_list_structure`] verifies that a container's keys are exactly
//! `0..n-1`. Every array-typed check runs it before looking at elements.

use crate::error::ValidationFailure;
use crate::value::{Array, Key, Value};

/// Characters stripped by [`trim`].
pub const TRIMMED_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Strip leading and trailing whitespace as the engine defines it.
pub fn trim(s: &str) -> &str {
    s.trim_matches(&TRIMMED_CHARS[..])
}

/// Length in UTF-8 bytes of the trimmed string.
pub fn byte_length(s: &str) -> usize {
    trim(s).len()
}

/// True when the string is empty after trimming.
pub fn is_blank(s: &str) -> bool {
    trim(s).is_empty()
}

/// Presence emptiness: null, a blank string, or an empty container.
///
/// `0`, `0.0`, `"0"` and `false` are not empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => is_blank(s),
        Value::Array(array) => array.is_empty(),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => false,
    }
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Only `Int` values whose rendering parses back to the same integer.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Int(i) => i.to_string().parse::<i64>().ok() == Some(*i),
        _ => false,
    }
}

/// Numbers that survive a trip through `f64` rendering.
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Int(i) => (*i as f64).to_string() == i.to_string(),
        Value::Float(f) => f.is_finite() && f.to_string().parse::<f64>().ok() == Some(*f),
        _ => false,
    }
}

/// The float a value represents, when [`is_float`] holds.
pub fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) if is_float(value) => Some(*i as f64),
        Value::Float(f) if is_float(value) => Some(*f),
        _ => None,
    }
}

/// A container whose keys are exactly `0..n-1`. Empty containers are lists.
pub fn is_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|array| check_list_structure(array).is_ok())
}

/// A container whose keys are all textual. Empty containers are objects.
pub fn is_object(value: &Value) -> bool {
    value.as_array().is_some_and(has_only_textual_keys)
}

pub fn has_only_textual_keys(array: &Array) -> bool {
    array.keys().all(|key| matches!(key, Key::Name(_)))
}

/// Verify a container's keys form the gapless sequence `0..n-1`.
///
/// Textual keys fail with `AssociativeArray`, a minimum other than 0 with
/// `FirstIndexNotZero`, and a maximum other than `n - 1` with
/// `LastIndexMismatch`.
pub fn check_list_structure(array: &Array) -> Result<(), ValidationFailure> {
    let mut bounds: Option<(i64, i64)> = None;
    for key in array.keys() {
        let Key::Index(index) = key else {
            return Err(ValidationFailure::associative_array());
        };
        bounds = Some(match bounds {
            None => (*index, *index),
            Some((min, max)) => (min.min(*index), max.max(*index)),
        });
    }
    let Some((min, max)) = bounds else {
        return Ok(());
    };
    if min != 0 {
        return Err(ValidationFailure::first_index_not_zero());
    }
    let expected_last = i64::try_from(array.len() - 1).unwrap_or(i64::MAX);
    if max != expected_last {
        return Err(ValidationFailure::last_index_mismatch(expected_last, max));
    }
    Ok(())
}
