//! Result of a content write as reported to callers.

use serde::Serialize;

use super::{Error, ErrorCode};

/// `{ok, message}` pair returned by every mutating operation.
///
/// Failures also carry the [`ErrorCode`] so adapters can choose a status
/// code; it is not serialised.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::{Error, ErrorCode, WriteOutcome};
///
/// let outcome = WriteOutcome::failure(&Error::not_found("Skill not found."));
/// assert!(!outcome.ok);
/// assert_eq!(outcome.error_code(), Some(ErrorCode::NotFound));
/// assert_eq!(
///     serde_json::to_value(&outcome).expect("serialise outcome"),
///     serde_json::json!({"ok": false, "message": "Skill not found."}),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub ok: bool,
    pub message: String,
    #[serde(skip)]
    code: Option<ErrorCode>,
}

impl WriteOutcome {
    /// Successful write.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            code: None,
        }
    }

    /// Failed write described by `error`.
    pub fn failure(error: &Error) -> Self {
        Self {
            ok: false,
            message: error.message().to_owned(),
            code: Some(error.code()),
        }
    }

    pub(crate) fn from_result(result: Result<(), Error>, success_message: &str) -> Self {
        match result {
            Ok(()) => Self::success(success_message),
            Err(error) => Self::failure(&error),
        }
    }

    /// Error code of a failed write.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code
    }
}
