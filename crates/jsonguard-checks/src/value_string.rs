//! # Value-Level String Checks
//!
//! String rules applied to a bare value rather than a payload key: blank
//! detection, byte-length bounds and the URL, date and email formats.
//! Key-level string checks delegate their format rules here.
//!
//! ## Date Formats
//!
//! Formats are chrono strftime strings such as `%Y-%m-%d %H:%M:%S`. A value
//! matches when it parses under the format and formatting the parsed date
//! with the same format reproduces the value exactly. This rejects
//! impossible dates (`2024-02-30`), missing zero padding and trailing input.
//! An invalid format string never matches.

use std::fmt::Write as _;

use chrono::format::{self, DelayedFormat, Item, Parsed, StrftimeItems};
use jsonguard_core::classify::{byte_length, trim};
use jsonguard_core::{BoundViolation, StringByteLengthRange, ValidationFailure};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::presence::Requirement;

static EMAIL_LOCAL_PART: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
});

static EMAIL_DOMAIN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
});

const MAX_EMAIL_BYTES: usize = 254;
const MAX_EMAIL_LOCAL_PART_BYTES: usize = 64;

/// Schemes whose URLs are meaningless without a host.
const HOST_SCHEMES: [&str; 5] = ["http", "https", "ftp", "ws", "wss"];

/// Structural email check on an already-trimmed candidate.
pub fn looks_like_email(candidate: &str) -> bool {
    if candidate.len() > MAX_EMAIL_BYTES {
        return false;
    }
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };
    if local.len() > MAX_EMAIL_LOCAL_PART_BYTES {
        return false;
    }
    match (&*EMAIL_LOCAL_PART, &*EMAIL_DOMAIN) {
        (Ok(local_part), Ok(hostname)) => local_part.is_match(local) && hostname.is_match(domain),
        _ => false,
    }
}

/// Absolute URL without whitespace; host-based schemes need a host.
pub fn looks_like_url(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }
    match Url::parse(candidate) {
        Ok(url) => {
            !HOST_SCHEMES.contains(&url.scheme())
                || url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// True when `candidate` parses under `date_format` and formats back to itself.
pub fn matches_date_format(candidate: &str, date_format: &str) -> bool {
    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.is_empty() || items.iter().any(|item| matches!(item, Item::Error)) {
        return false;
    }

    let mut parsed = Parsed::new();
    if format::parse(&mut parsed, candidate, items.iter()).is_err() {
        return false;
    }

    let offset = parsed.to_fixed_offset().ok();
    let seconds_east = offset.map_or(0, |o| o.local_minus_utc());
    let (date, time) = match parsed.to_naive_datetime_with_offset(seconds_east) {
        Ok(datetime) => (Some(datetime.date()), Some(datetime.time())),
        Err(_) => (parsed.to_naive_date().ok(), parsed.to_naive_time().ok()),
    };

    // Formatting fails when the format needs a field the parse could not resolve.
    let mut rendered = String::with_capacity(candidate.len());
    let written = match offset {
        Some(offset) => write!(
            rendered,
            "{}",
            DelayedFormat::new_with_offset(date, time, &offset, items.iter())
        ),
        None => write!(rendered, "{}", DelayedFormat::new(date, time, items.iter())),
    };
    written.is_ok() && rendered == candidate
}

/// String rules on bare values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueStringChecker;

impl ValueStringChecker {
    pub fn new() -> Self {
        Self
    }

    /// Fail when the value is absent or blank.
    pub fn required(&self, value: Option<&str>) -> Result<&Self, ValidationFailure> {
        match value.map(trim) {
            Some(s) if !s.is_empty() => Ok(self),
            _ => Err(ValidationFailure::value_string_empty()),
        }
    }

    /// Absent is fine; provided-but-blank is not.
    pub fn optional(&self, value: Option<&str>) -> Result<&Self, ValidationFailure> {
        match value {
            Some(s) if trim(s).is_empty() => Err(ValidationFailure::optional_value_not_a_string()),
            _ => Ok(self),
        }
    }

    pub fn byte_length_range(
        &self,
        value: &str,
        range: &StringByteLengthRange,
    ) -> Result<&Self, ValidationFailure> {
        let length = byte_length(value);
        range.check(length).map_err(|violation| match violation {
            BoundViolation::BelowMin(min) => ValidationFailure::value_string_too_short(min, length),
            BoundViolation::AboveMax(max) => ValidationFailure::value_string_too_long(max, length),
        })?;
        Ok(self)
    }

    pub fn url_format(&self, value: &str) -> Result<&Self, ValidationFailure> {
        if looks_like_url(value) {
            Ok(self)
        } else {
            Err(ValidationFailure::not_an_url(value))
        }
    }

    /// Blank values pass when optional and fail as empty when required.
    pub fn date_time_format(
        &self,
        value: Option<&str>,
        date_format: &str,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        let Some(candidate) = self.non_blank(value, requirement)? else {
            return Ok(self);
        };
        if matches_date_format(candidate, date_format) {
            Ok(self)
        } else {
            Err(ValidationFailure::invalid_date(date_format, candidate))
        }
    }

    pub fn is_email_address(
        &self,
        value: Option<&str>,
        requirement: Requirement,
    ) -> Result<&Self, ValidationFailure> {
        let Some(candidate) = self.non_blank(value, requirement)? else {
            return Ok(self);
        };
        if looks_like_email(candidate) {
            Ok(self)
        } else {
            Err(ValidationFailure::value_not_email(candidate))
        }
    }

    /// The trimmed value, `None` when blank and optional.
    fn non_blank<'a>(
        &self,
        value: Option<&'a str>,
        requirement: Requirement,
    ) -> Result<Option<&'a str>, ValidationFailure> {
        let trimmed = value.map(trim).unwrap_or_default();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed));
        }
        match requirement {
            Requirement::Required => Err(ValidationFailure::value_string_empty()),
            Requirement::Optional => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonguard_core::FailureKind;

    const CHECKER: ValueStringChecker = ValueStringChecker;

    #[test]
    fn test_required() {
        assert!(CHECKER.required(Some("x")).is_ok());
        for blank in [None, Some(""), Some(" \n\t")] {
            let failure = CHECKER.required(blank).unwrap_err();
            assert_eq!(failure.code(), "emptyString");
            assert_eq!(failure.message(), "Expected a string, but got null or empty string");
        }
    }

    #[test]
    fn test_optional() {
        assert!(CHECKER.optional(None).is_ok());
        assert!(CHECKER.optional(Some("x")).is_ok());
        let failure = CHECKER.optional(Some("  ")).unwrap_err();
        assert_eq!(failure.code(), "optionalValueNotString");
    }

    #[test]
    fn test_byte_length_range_counts_bytes() {
        let range = StringByteLengthRange::new(None, Some(2)).unwrap();
        let failure = CHECKER.byte_length_range("大", &range).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::ValueTooBig);
        assert_eq!(failure.argument("actual"), Some("3"));

        let range = StringByteLengthRange::new(Some(3), None).unwrap();
        assert!(CHECKER.byte_length_range("  abc  ", &range).is_ok());
        let failure = CHECKER.byte_length_range("  ab  ", &range).unwrap_err();
        assert_eq!(failure.kind(), FailureKind::ValueTooSmall);
    }

    #[test]
    fn test_url_format() {
        for url in [
            "https://example.com",
            "http://localhost:8080/path?q=1#frag",
            "ftp://files.example.org/a.txt",
            "mailto:someone@example.com",
        ] {
            assert!(CHECKER.url_format(url).is_ok(), "{url}");
        }
        for not_url in ["", "example.com", "http://", "https://exa mple.com", "/relative/path"] {
            let failure = CHECKER.url_format(not_url).unwrap_err();
            assert_eq!(failure.code(), "requiredUrlFormat", "{not_url}");
        }
        assert_eq!(
            CHECKER.url_format("nope").unwrap_err().message(),
            "The string 'nope' doesn't resemble an actual URL"
        );
    }

    #[test]
    fn test_date_time_format_round_trip() {
        let format = "%Y-%m-%d %H:%M:%S";
        assert!(CHECKER
            .date_time_format(Some("2024-02-29 13:05:00"), format, Requirement::Required)
            .is_ok());
        assert!(CHECKER
            .date_time_format(Some("  2024-02-29 13:05:00 "), format, Requirement::Required)
            .is_ok());
        for invalid in ["2024-02-30 13:05:00", "2024-2-29 13:05:00", "2024-02-29 13:05:00x", "2024-02-29"] {
            let failure = CHECKER
                .date_time_format(Some(invalid), format, Requirement::Required)
                .unwrap_err();
            assert_eq!(failure.code(), "invalidDateFormat", "{invalid}");
        }
    }

    #[test]
    fn test_date_only_and_time_only_formats() {
        assert!(matches_date_format("2023-12-31", "%Y-%m-%d"));
        assert!(!matches_date_format("2023-02-29", "%Y-%m-%d"));
        assert!(matches_date_format("23:59", "%H:%M"));
        assert!(!matches_date_format("24:00", "%H:%M"));
        assert!(matches_date_format("2024-01-01T10:00:00+02:00", "%Y-%m-%dT%H:%M:%S%:z"));
    }

    #[test]
    fn test_date_time_format_invalid_format_string() {
        assert!(!matches_date_format("2024-01-01", "%Q"));
        assert!(!matches_date_format("", ""));
    }

    #[test]
    fn test_date_time_format_blank_values() {
        assert!(CHECKER
            .date_time_format(None, "%Y-%m-%d", Requirement::Optional)
            .is_ok());
        let failure = CHECKER
            .date_time_format(Some(" "), "%Y-%m-%d", Requirement::Required)
            .unwrap_err();
        assert_eq!(failure.code(), "emptyString");
    }

    #[test]
    fn test_date_failure_message() {
        let failure = CHECKER
            .date_time_format(Some("31/12/2023"), "%Y-%m-%d", Requirement::Required)
            .unwrap_err();
        assert_eq!(
            failure.message(),
            "String not in format '%Y-%m-%d' date: '31/12/2023'"
        );
    }

    #[test]
    fn test_email_addresses() {
        for email in [
            "user@example.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.ie",
        ] {
            assert!(
                CHECKER.is_email_address(Some(email), Requirement::Required).is_ok(),
                "{email}"
            );
        }
        let long_local = format!("{}@example.com", "a".repeat(65));
        for not_email in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@exa_mple.com",
            long_local.as_str(),
        ] {
            let failure = CHECKER
                .is_email_address(Some(not_email), Requirement::Required)
                .unwrap_err();
            assert_eq!(failure.code(), "stringNotEmail", "{not_email}");
        }
    }

    #[test]
    fn test_email_blank_optional_passes() {
        assert!(CHECKER.is_email_address(Some("  "), Requirement::Optional).is_ok());
        assert_eq!(
            CHECKER
                .is_email_address(None, Requirement::Required)
                .unwrap_err()
                .code(),
            "emptyString"
        );
    }
}
