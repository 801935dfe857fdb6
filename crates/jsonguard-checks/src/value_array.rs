//! # Value-Level Array Checks
//!
//! Rules on bare containers, typically the elements of a payload list.
//!
//! ## Order of Checks
//!
//! 1. Emptiness: an empty list passes when optional and fails with
//!    `RequiredArrayIsEmpty` when required.
//! 2. List structure: keys must be exactly `0..n-1`.
//! 3. Elements: the first offending element fails, with its index in the
//!    message.

use std::num::NonZeroUsize;

use jsonguard_core::classify::{check_list_structure, has_only_textual_keys, is_integer, is_string};
use jsonguard_core::{Array, ArrayLengthRange, BoundViolation, ValidationFailure, Value};

use crate::presence::Requirement;

/// Array rules on bare values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueArrayChecker;

impl ValueArrayChecker {
    pub fn new() -> Self {
        Self
    }

    /// Every element is a JSON object (a container with textual keys only).
    pub fn array_of_json_objects(
        &self,
        elements: &Array,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        self.each_element(
            elements,
            requirement,
            |element| element.as_array().is_some_and(has_only_textual_keys),
            ValidationFailure::item_not_a_json_object,
        )
    }

    pub fn array_of_string(
        &self,
        elements: &Array,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        self.each_element(elements, requirement, is_string, ValidationFailure::item_not_a_string)
    }

    pub fn array_of_integer(
        &self,
        elements: &Array,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        self.each_element(elements, requirement, is_integer, ValidationFailure::item_not_an_integer)
    }

    pub fn array_of_length_range(
        &self,
        elements: &Array,
        range: &ArrayLengthRange,
    ) -> Result<&Self, ValidationFailure> {
        check_list_structure(elements)?;
        let count = elements.len();
        range.check(count).map_err(|violation| match violation {
            BoundViolation::BelowMin(min) => ValidationFailure::array_too_short(min, count),
            BoundViolation::AboveMax(max) => ValidationFailure::array_too_long(max, count),
        })?;
        Ok(self)
    }

    pub fn array_of_exact_length(
        &self,
        elements: &Array,
        expected: NonZeroUsize,
    ) -> Result<&Self, ValidationFailure> {
        check_list_structure(elements)?;
        if elements.len() != expected.get() {
            return Err(ValidationFailure::array_not_exact_length(
                expected.get(),
                elements.len(),
            ));
        }
        Ok(self)
    }

    fn each_element(
        &self,
        elements: &Array,
        requirement: Requirement,
        accept: impl Fn(&Value) -> bool,
        reject: impl Fn(usize) -> ValidationFailure,
    ) -> Result<&Self, ValidationFailure> {
        if elements.is_empty() {
            return match requirement {
                Requirement::Optional => Ok(self),
                Requirement::Required => Err(ValidationFailure::required_array_empty()),
            };
        }
        check_list_structure(elements)?;
        for (key, element) in elements.iter() {
            if !accept(element) {
                let index = key.as_index().and_then(|i| usize::try_from(i).ok()).unwrap_or_default();
                return Err(reject(index));
            }
        }
        Ok(self)
    }
}
