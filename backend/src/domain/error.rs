//! Errors raised by content reads, writes and request parsing.
//!
//! Transport agnostic: the HTTP adapter renders them with the failure
//! envelope, and the content service folds them into a [`WriteOutcome`].
//!
//! [`WriteOutcome`]: crate::domain::WriteOutcome

use serde::Serialize;
use serde_json::Value;

use super::TraceId;

/// Failure category, stable across message wording changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The addressed record does not exist.
    NotFound,
    /// The store or a driven port failed.
    InternalError,
}

/// Content error carrying a user-facing message.
///
/// The trace identifier of the request being served, if any, is captured at
/// construction.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "Project not found.");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Project not found.");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<TraceId>,
    details: Option<Value>,
}

impl Error {
    /// Create an error, picking up the trace identifier in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current(),
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message shown to the dashboard user.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Identifier of the request that raised the error.
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Structured context, such as the offending request field.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Replace the captured trace identifier.
    pub fn with_trace_id(mut self, id: TraceId) -> Self {
        self.trace_id = Some(id);
        self
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use portfolio_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("missing required field: title")
    ///     .with_details(json!({ "field": "title", "code": "missing_field" }));
    /// assert_eq!(err.details().and_then(|d| d.get("field")), Some(&json!("title")));
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
