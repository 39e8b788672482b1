//! HTTP rendering of domain errors.
//!
//! Every failed request answers with the envelope the write endpoints use,
//! `{"ok": false, "message": ...}`, extended with the error `code` and, when
//! present, `details` and `traceId`. Internal errors keep their code and
//! trace id only; the message is replaced and details are dropped.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Message sent in place of an internal error's own message.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    ok: bool,
    code: ErrorCode,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl<'a> ErrorBody<'a> {
    fn new(error: &'a Error) -> Self {
        let internal = error.code() == ErrorCode::InternalError;
        Self {
            ok: false,
            code: error.code(),
            message: if internal {
                INTERNAL_ERROR_MESSAGE
            } else {
                error.message()
            },
            trace_id: error.trace_id().map(|id| id.to_string()),
            details: if internal { None } else { error.details() },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(ErrorBody::new(self))
    }
}
