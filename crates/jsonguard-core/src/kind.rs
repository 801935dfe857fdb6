//! # Failure Kinds: Stable Error Codes
//!
//! Defines the `FailureKind` enum naming every way a payload can violate a
//! field contract, together with its stable wire code and its family.
//! This is the one table the whole workspace consults; an exhaustive
//! `match` on `FailureKind` forces every new kind to declare both.
//!
//! ## Wire Contract
//!
//! The code returned by [`FailureKind::code()`] is what API clients see.
//! Codes are not unique: the list-structure kinds share
//! `expectedArrayValue` with [`FailureKind::ValueNotAnArray`] while living in
//! a different family. Kinds are therefore the source of truth and codes
//! are derived from them, never parsed back.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// The two families every failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureFamily {
    /// The body is missing data or holds values out of contract.
    MalformedRequestBody,
    /// The body has a shape the contract does not recognize.
    UnrecognizedStructure,
}

impl FailureFamily {
    /// Returns the snake_case identifier for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedRequestBody => "malformed_request_body",
            Self::UnrecognizedStructure => "unrecognized_structure",
        }
    }
}

impl std::fmt::Display for FailureFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "malformed_request_body" => Ok(Self::MalformedRequestBody),
            "unrecognized_structure" => Ok(Self::UnrecognizedStructure),
            other => Err(ConfigError::UnknownFamily(other.to_string())),
        }
    }
}

/// Every kind of validation failure.
///
/// | Kind | Code | Family |
/// |------|------|--------|
/// | EntryMissing | propertyRequired | Malformed |
/// | EntryEmpty | requiredValueForProperty | Malformed |
/// | EntryForbidden | propertyForbidden | Structure |
/// | InvalidBoolValue | notABooleanValue | Structure |
/// | InvalidIntegerValue | requiredIntegerValue | Malformed |
/// | ValueNotAFloat | expectedFloatValue | Structure |
/// | ValueNotAString | expectedStringValue | Structure |
/// | ValueNotAnArray | expectedArrayValue | Malformed |
/// | AssociativeArray | expectedArrayValue | Structure |
/// | FirstIndexNotZero | expectedArrayValue | Structure |
/// | LastIndexMismatch | expectedArrayValue | Structure |
/// | RequiredArrayIsEmpty | requiredNotEmptyArray | Malformed |
/// | ValueNotAJsonObject | valueNotAJsonObject | Structure |
/// | InvalidJsonObjectValue | invalidJsonObject | Malformed |
/// | ValueTooSmall | expectedMinValue | Malformed |
/// | ValueTooBig | expectedMaxValue | Malformed |
/// | ValueNotEqualsTo | unexpectedValue | Structure |
/// | ValueNotInList | unexpectedEnumValue | Malformed |
/// | ValueStringNotExactLength | expectedStringOfExactLength | Structure |
/// | ValueArrayNotExactLength | arrayOfUnexpectedFixedLength | Malformed |
/// | ValueStringEmpty | emptyString | Malformed |
/// | InvalidDateValue | invalidDateFormat | Structure |
/// | IntegerComponentsDontRepresentDate | integerComponentsNotADate | Structure |
/// | StringIsNotAnUrl | requiredUrlFormat | Malformed |
/// | KeyNotEmail | keyNotEmail | Malformed |
/// | StringValueNotAnEmail | stringNotEmail | Structure |
/// | OptionalPropertyNotAString | entryOptionalNotString | Malformed |
/// | OptionalValueNotAString | optionalValueNotString | Malformed |
/// | OptionalPropertyNotAnInteger | entryOptionalNotInteger | Structure |
/// | OptionalPropertyNotAFloat | entryOptionalNotFloat | Malformed |
/// | OptionalPropertyNotABoolean | entryOptionalNotBoolean | Structure |
/// | OptionalPropertyNotAnEnum | unexpectedOptionalEnumValue | Malformed |
/// | OptionalPropertyNotAnArray | optionalValueNotAnArray | Structure |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A required key is absent.
    EntryMissing,
    /// A required key holds null, a blank string or an empty container.
    EntryEmpty,
    /// A forbidden key holds a non-null value.
    EntryForbidden,
    InvalidBoolValue,
    InvalidIntegerValue,
    ValueNotAFloat,
    ValueNotAString,
    /// Expected a container, got a scalar.
    ValueNotAnArray,
    /// A list container has a textual key.
    AssociativeArray,
    /// A list container does not start at index 0.
    FirstIndexNotZero,
    /// A list container has gaps or extra indexes.
    LastIndexMismatch,
    RequiredArrayIsEmpty,
    /// An element of a list is not a JSON object.
    ValueNotAJsonObject,
    /// A keyed value is not a JSON object.
    InvalidJsonObjectValue,
    ValueTooSmall,
    ValueTooBig,
    ValueNotEqualsTo,
    ValueNotInList,
    ValueStringNotExactLength,
    ValueArrayNotExactLength,
    ValueStringEmpty,
    InvalidDateValue,
    IntegerComponentsDontRepresentDate,
    StringIsNotAnUrl,
    KeyNotEmail,
    StringValueNotAnEmail,
    OptionalPropertyNotAString,
    OptionalValueNotAString,
    OptionalPropertyNotAnInteger,
    OptionalPropertyNotAFloat,
    OptionalPropertyNotABoolean,
    OptionalPropertyNotAnEnum,
    OptionalPropertyNotAnArray,
}

/// Total number of failure kinds.
pub const FAILURE_KIND_COUNT: usize = 33;

impl FailureKind {
    /// Returns every failure kind in declaration order.
    pub fn all_kinds() -> &'static [FailureKind] {
        &[
            Self::EntryMissing,
            Self::EntryEmpty,
            Self::EntryForbidden,
            Self::InvalidBoolValue,
            Self::InvalidIntegerValue,
            Self::ValueNotAFloat,
            Self::ValueNotAString,
            Self::ValueNotAnArray,
            Self::AssociativeArray,
            Self::FirstIndexNotZero,
            Self::LastIndexMismatch,
            Self::RequiredArrayIsEmpty,
            Self::ValueNotAJsonObject,
            Self::InvalidJsonObjectValue,
            Self::ValueTooSmall,
            Self::ValueTooBig,
            Self::ValueNotEqualsTo,
            Self::ValueNotInList,
            Self::ValueStringNotExactLength,
            Self::ValueArrayNotExactLength,
            Self::ValueStringEmpty,
            Self::InvalidDateValue,
            Self::IntegerComponentsDontRepresentDate,
            Self::StringIsNotAnUrl,
            Self::KeyNotEmail,
            Self::StringValueNotAnEmail,
            Self::OptionalPropertyNotAString,
            Self::OptionalValueNotAString,
            Self::OptionalPropertyNotAnInteger,
            Self::OptionalPropertyNotAFloat,
            Self::OptionalPropertyNotABoolean,
            Self::OptionalPropertyNotAnEnum,
            Self::OptionalPropertyNotAnArray,
        ]
    }

    /// The stable wire code clients match on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EntryMissing => "propertyRequired",
            Self::EntryEmpty => "requiredValueForProperty",
            Self::EntryForbidden => "propertyForbidden",
            Self::InvalidBoolValue => "notABooleanValue",
            Self::InvalidIntegerValue => "requiredIntegerValue",
            Self::ValueNotAFloat => "expectedFloatValue",
            Self::ValueNotAString => "expectedStringValue",
            Self::ValueNotAnArray
            | Self::AssociativeArray
            | Self::FirstIndexNotZero
            | Self::LastIndexMismatch => "expectedArrayValue",
            Self::RequiredArrayIsEmpty => "requiredNotEmptyArray",
            Self::ValueNotAJsonObject => "valueNotAJsonObject",
            Self::InvalidJsonObjectValue => "invalidJsonObject",
            Self::ValueTooSmall => "expectedMinValue",
            Self::ValueTooBig => "expectedMaxValue",
            Self::ValueNotEqualsTo => "unexpectedValue",
            Self::ValueNotInList => "unexpectedEnumValue",
            Self::ValueStringNotExactLength => "expectedStringOfExactLength",
            Self::ValueArrayNotExactLength => "arrayOfUnexpectedFixedLength",
            Self::ValueStringEmpty => "emptyString",
            Self::InvalidDateValue => "invalidDateFormat",
            Self::IntegerComponentsDontRepresentDate => "integerComponentsNotADate",
            Self::StringIsNotAnUrl => "requiredUrlFormat",
            Self::KeyNotEmail => "keyNotEmail",
            Self::StringValueNotAnEmail => "stringNotEmail",
            Self::OptionalPropertyNotAString => "entryOptionalNotString",
            Self::OptionalValueNotAString => "optionalValueNotString",
            Self::OptionalPropertyNotAnInteger => "entryOptionalNotInteger",
            Self::OptionalPropertyNotAFloat => "entryOptionalNotFloat",
            Self::OptionalPropertyNotABoolean => "entryOptionalNotBoolean",
            Self::OptionalPropertyNotAnEnum => "unexpectedOptionalEnumValue",
            Self::OptionalPropertyNotAnArray => "optionalValueNotAnArray",
        }
    }

    /// The family this kind reports under.
    pub fn family(&self) -> FailureFamily {
        use FailureFamily::{MalformedRequestBody as Malformed, UnrecognizedStructure as Structure};
        match self {
            Self::EntryMissing
            | Self::EntryEmpty
            | Self::InvalidIntegerValue
            | Self::ValueNotAnArray
            | Self::RequiredArrayIsEmpty
            | Self::InvalidJsonObjectValue
            | Self::ValueTooSmall
            | Self::ValueTooBig
            | Self::ValueNotInList
            | Self::ValueArrayNotExactLength
            | Self::ValueStringEmpty
            | Self::StringIsNotAnUrl
            | Self::KeyNotEmail
            | Self::OptionalPropertyNotAString
            | Self::OptionalValueNotAString
            | Self::OptionalPropertyNotAFloat
            | Self::OptionalPropertyNotAnEnum => Malformed,
            Self::EntryForbidden
            | Self::InvalidBoolValue
            | Self::ValueNotAFloat
            | Self::ValueNotAString
            | Self::AssociativeArray
            | Self::FirstIndexNotZero
            | Self::LastIndexMismatch
            | Self::ValueNotAJsonObject
            | Self::ValueNotEqualsTo
            | Self::ValueStringNotExactLength
            | Self::InvalidDateValue
            | Self::IntegerComponentsDontRepresentDate
            | Self::StringValueNotAnEmail
            | Self::OptionalPropertyNotAnInteger
            | Self::OptionalPropertyNotABoolean
            | Self::OptionalPropertyNotAnArray => Structure,
        }
    }

    /// Returns true for the three list-structure kinds.
    pub fn is_list_structure(&self) -> bool {
        matches!(
            self,
            Self::AssociativeArray | Self::FirstIndexNotZero | Self::LastIndexMismatch
        )
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
