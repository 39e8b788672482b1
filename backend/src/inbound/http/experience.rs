//! Experience HTTP handlers.
//!
//! ```text
//! GET    /api/v1/experience
//! POST   /api/v1/experience
//! PUT    /api/v1/experience/{id}
//! DELETE /api/v1/experience/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, ExperienceChanges, NewExperience};
use crate::inbound::http::content_dto::ExperienceResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_content_id, parse_date_change, parse_optional_date, require,
};

const ID: FieldName = FieldName::new("id");
const TITLE: FieldName = FieldName::new("title");
const COMPANY: FieldName = FieldName::new("company");
const PERIOD: FieldName = FieldName::new("period");
const DESCRIPTION: FieldName = FieldName::new("description");
const START_DATE: FieldName = FieldName::new("startDate");
const END_DATE: FieldName = FieldName::new("endDate");

/// Request payload for adding or editing an experience entry.
///
/// Dates are `YYYY-MM-DD`. On edit an empty string clears a stored date and
/// an absent field leaves it alone.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    #[schema(example = "2021 - Present")]
    pub period: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2021-01-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn parse_new_experience(payload: ExperienceRequest) -> Result<NewExperience, Error> {
    Ok(NewExperience {
        title: require(payload.title, TITLE)?,
        company: require(payload.company, COMPANY)?,
        period: require(payload.period, PERIOD)?,
        description: require(payload.description, DESCRIPTION)?,
        start_date: parse_optional_date(payload.start_date, START_DATE)?,
        end_date: parse_optional_date(payload.end_date, END_DATE)?,
    })
}

fn parse_experience_changes(payload: ExperienceRequest) -> Result<ExperienceChanges, Error> {
    Ok(ExperienceChanges {
        title: payload.title,
        company: payload.company,
        period: payload.period,
        description: payload.description,
        start_date: parse_date_change(payload.start_date, START_DATE)?,
        end_date: parse_date_change(payload.end_date, END_DATE)?,
    })
}

/// List experience entries, most recent start first.
#[utoipa::path(
    get,
    path = "/api/v1/experience",
    responses((status = 200, description = "Experience entries", body = [ExperienceResponse])),
    tags = ["experience"],
    operation_id = "listExperience"
)]
#[get("/experience")]
pub async fn list_experience(state: web::Data<HttpState>) -> web::Json<Vec<ExperienceResponse>> {
    let entries = state.query.get_experience().await;
    web::Json(entries.into_iter().map(ExperienceResponse::from).collect())
}

/// Add an experience entry.
#[utoipa::path(
    post,
    path = "/api/v1/experience",
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Added", body = WriteOutcomeResponse),
        (status = 400, description = "Missing field or malformed date", body = ErrorSchema)
    ),
    tags = ["experience"],
    operation_id = "addExperience"
)]
#[post("/experience")]
pub async fn add_experience(
    state: web::Data<HttpState>,
    payload: web::Json<ExperienceRequest>,
) -> ApiResult<HttpResponse> {
    let experience = parse_new_experience(payload.into_inner())?;
    Ok(write_outcome_response(
        state.command.add_experience(experience).await,
    ))
}

/// Edit the submitted fields of an experience entry.
#[utoipa::path(
    put,
    path = "/api/v1/experience/{id}",
    params(("id" = String, Path, description = "Experience identifier")),
    request_body = ExperienceRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 400, description = "Malformed date", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["experience"],
    operation_id = "updateExperience"
)]
#[put("/experience/{id}")]
pub async fn update_experience(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ExperienceRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    let changes = parse_experience_changes(payload.into_inner())?;
    Ok(write_outcome_response(
        state.command.update_experience(&id, changes).await,
    ))
}

/// Remove an experience entry.
#[utoipa::path(
    delete,
    path = "/api/v1/experience/{id}",
    params(("id" = String, Path, description = "Experience identifier")),
    responses(
        (status = 200, description = "Deleted", body = WriteOutcomeResponse),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["experience"],
    operation_id = "deleteExperience"
)]
#[delete("/experience/{id}")]
pub async fn delete_experience(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    Ok(write_outcome_response(
        state.command.delete_experience(&id).await,
    ))
}
