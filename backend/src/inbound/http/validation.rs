//! Shared validation helpers for inbound HTTP adapters.
//!
//! Failures become `400 invalid_request` errors whose details name the
//! offending field and a machine-readable code.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{ContentId, Error, SkillLevel};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidDate,
    OutOfRange,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::OutOfRange => "out_of_range",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn value_error(field: FieldName, message: String, code: ErrorCode, value: impl ToString) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value.to_string(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        ErrorCode::MissingField,
    )
}

/// Unwrap a required body field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_content_id(value: String, field: FieldName) -> Result<ContentId, Error> {
    ContentId::new(value.as_str()).map_err(|err| {
        value_error(
            field,
            format!("{}: {err}", field.as_str()),
            ErrorCode::InvalidId,
            &value,
        )
    })
}

pub(crate) fn parse_skill_level(value: i64, field: FieldName) -> Result<SkillLevel, Error> {
    SkillLevel::new(value).map_err(|err| {
        value_error(
            field,
            err.to_string(),
            ErrorCode::OutOfRange,
            value,
        )
    })
}

/// Parse a `YYYY-MM-DD` date; an empty string means "no date".
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<Option<NaiveDate>, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            value_error(
                field,
                format!("{} must be a YYYY-MM-DD date", field.as_str()),
                ErrorCode::InvalidDate,
                value,
            )
        })
}

/// Parse an optional date field submitted when adding a record.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    Ok(value
        .map(|raw| parse_date(&raw, field))
        .transpose()?
        .flatten())
}

/// Parse a date field submitted when editing a record.
///
/// `None` leaves the stored date alone; `Some("")` clears it.
pub(crate) fn parse_date_change(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<Option<NaiveDate>>, Error> {
    value.map(|raw| parse_date(&raw, field)).transpose()
}
