//! # Value-Level Integer Checks

use chrono::NaiveDate;
use jsonguard_core::{BoundViolation, IntValueRange, ValidationFailure};

/// Integer rules on bare values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueIntegerChecker;

impl ValueIntegerChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn within_range(&self, value: i64, range: &IntValueRange) -> Result<&Self, ValidationFailure> {
        range.check(value).map_err(|violation| match violation {
            BoundViolation::BelowMin(min) => ValidationFailure::value_below_min(min, value),
            BoundViolation::AboveMax(max) => ValidationFailure::value_above_max(max, value),
        })?;
        Ok(self)
    }

    /// The components must name a real calendar date with a four-digit year.
    pub fn integer_group_represents_a_date(
        &self,
        year: i64,
        month: i64,
        day: i64,
    ) -> Result<&Self, ValidationFailure> {
        if represents_a_date(year, month, day) {
            Ok(self)
        } else {
            Err(ValidationFailure::components_not_a_date(year, month, day))
        }
    }
}

fn represents_a_date(year: i64, month: i64, day: i64) -> bool {
    if !(0..=9999).contains(&year) {
        return false;
    }
    match (i32::try_from(year), u32::try_from(month), u32::try_from(day)) {
        (Ok(year), Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day).is_some(),
        _ => false,
    }
}
