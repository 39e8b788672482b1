//! HTTP mapping for write outcomes.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::WriteOutcome;
use crate::inbound::http::error::status_for;

/// `{ok, message}` body returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct WriteOutcomeResponse {
    pub ok: bool,
    #[schema(example = "Project added successfully!")]
    pub message: String,
}

impl From<WriteOutcome> for WriteOutcomeResponse {
    fn from(value: WriteOutcome) -> Self {
        Self {
            ok: value.ok,
            message: value.message,
        }
    }
}

/// 200 on success, otherwise the status of the failure's error code.
pub(crate) fn write_outcome_response(outcome: WriteOutcome) -> HttpResponse {
    let status = outcome.error_code().map_or(StatusCode::OK, status_for);
    HttpResponse::build(status).json(WriteOutcomeResponse::from(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use rstest::rstest;

    #[rstest]
    #[case(WriteOutcome::success("Skill added successfully!"), StatusCode::OK)]
    #[case(WriteOutcome::failure(&Error::not_found("Skill not found.")), StatusCode::NOT_FOUND)]
    #[case(
        WriteOutcome::failure(&Error::internal("content store lock poisoned")),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn status_follows_outcome(#[case] outcome: WriteOutcome, #[case] expected: StatusCode) {
        assert_eq!(write_outcome_response(outcome).status(), expected);
    }
}
