//! # Range Value Objects
//!
//! Immutable, self-validating bounds consumed by range checks. A range is
//! built once, validated at construction, and then reused across payloads.
//!
//! ## Invariants
//!
//! - At least one bound is present.
//! - When both are present, `min < max` strictly. For floats "strictly"
//!   means `min` is not tolerantly equal to `max` and is below it.
//! - Length bounds start at 1; float bounds are finite.
//!
//! Checking a value against a range returns a [`BoundViolation`] naming the
//! side that was crossed; checkers turn it into the matching failure.

use std::fmt;

use crate::error::RangeError;
use crate::float::EqualFloats;

/// Which side of a range a value fell off, with the crossed bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundViolation<T> {
    /// The value is below `min`.
    BelowMin(T),
    /// The value is above `max`.
    AboveMax(T),
}

fn ordered<T: PartialOrd + fmt::Display>(min: Option<T>, max: Option<T>) -> Result<(), RangeError> {
    match (min, max) {
        (None, None) => Err(RangeError::NoRangeGiven),
        (Some(min), Some(max)) if min >= max => Err(RangeError::NotStrictlyOrdered {
            min: min.to_string(),
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_ordered<T: PartialOrd + Copy>(
    min: Option<T>,
    max: Option<T>,
    value: T,
) -> Result<(), BoundViolation<T>> {
    if let Some(min) = min {
        if value < min {
            return Err(BoundViolation::BelowMin(min));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(BoundViolation::AboveMax(max));
        }
    }
    Ok(())
}

/// Inclusive integer value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntValueRange {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntValueRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Result<Self, RangeError> {
        ordered(min, max)?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub fn check(&self, value: i64) -> Result<(), BoundViolation<i64>> {
        check_ordered(self.min, self.max, value)
    }
}

/// Inclusive float value bounds, tolerance-aware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatRange {
    /// Build a float range. `floats` decides whether `min` and `max` collide.
    pub fn new(
        floats: &dyn EqualFloats,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, RangeError> {
        for bound in [min, max].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(RangeError::NonFiniteBound(bound));
            }
        }
        match (min, max) {
            (None, None) => return Err(RangeError::NoRangeGiven),
            (Some(lo), Some(hi)) if floats.equal_floats(lo, hi) || lo > hi => {
                return Err(RangeError::NotStrictlyOrdered {
                    min: lo.to_string(),
                    max: hi.to_string(),
                })
            }
            _ => {}
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Values tolerantly equal to a bound are inside the range.
    pub fn check(&self, floats: &dyn EqualFloats, value: f64) -> Result<(), BoundViolation<f64>> {
        if let Some(min) = self.min {
            if !floats.equal_floats(value, min) && value < min {
                return Err(BoundViolation::BelowMin(min));
            }
        }
        if let Some(max) = self.max {
            if !floats.equal_floats(value, max) && value > max {
                return Err(BoundViolation::AboveMax(max));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LengthBounds {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthBounds {
    fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, RangeError> {
        if let Some(min) = min.filter(|m| *m < 1) {
            return Err(RangeError::MinBelowOne(min));
        }
        if let Some(max) = max.filter(|m| *m < 1) {
            return Err(RangeError::MaxBelowOne(max));
        }
        ordered(min, max)?;
        Ok(Self { min, max })
    }
}

/// Inclusive bounds on the UTF-8 byte length of a trimmed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringByteLengthRange(LengthBounds);

impl StringByteLengthRange {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, RangeError> {
        LengthBounds::new(min, max).map(Self)
    }

    pub fn min(&self) -> Option<usize> {
        self.0.min
    }

    pub fn max(&self) -> Option<usize> {
        self.0.max
    }

    pub fn check(&self, byte_length: usize) -> Result<(), BoundViolation<usize>> {
        check_ordered(self.0.min, self.0.max, byte_length)
    }
}

/// Inclusive bounds on the number of elements of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayLengthRange(LengthBounds);

impl ArrayLengthRange {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, RangeError> {
        LengthBounds::new(min, max).map(Self)
    }

    pub fn min(&self) -> Option<usize> {
        self.0.min
    }

    pub fn max(&self) -> Option<usize> {
        self.0.max
    }

    pub fn check(&self, count: usize) -> Result<(), BoundViolation<usize>> {
        check_ordered(self.0.min, self.0.max, count)
    }
}
