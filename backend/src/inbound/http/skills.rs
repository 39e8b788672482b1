//! Skill HTTP handlers.
//!
//! ```text
//! GET    /api/v1/skills
//! POST   /api/v1/skills
//! PUT    /api/v1/skills/{id}
//! DELETE /api/v1/skills/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, NewSkill, SkillChanges};
use crate::inbound::http::content_dto::SkillResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_content_id, parse_skill_level, require};

const ID: FieldName = FieldName::new("id");
const NAME: FieldName = FieldName::new("name");
const LEVEL: FieldName = FieldName::new("level");

/// Request payload for adding or editing a skill.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub name: Option<String>,
    /// Proficiency percentage, 0 to 100.
    #[schema(example = 85)]
    pub level: Option<i64>,
}

fn parse_new_skill(payload: SkillRequest) -> Result<NewSkill, Error> {
    let name = require(payload.name, NAME)?;
    let level = parse_skill_level(require(payload.level, LEVEL)?, LEVEL)?;
    Ok(NewSkill { name, level })
}

fn parse_skill_changes(payload: SkillRequest) -> Result<SkillChanges, Error> {
    Ok(SkillChanges {
        name: payload.name,
        level: payload
            .level
            .map(|level| parse_skill_level(level, LEVEL))
            .transpose()?,
    })
}

/// List skills, strongest first.
#[utoipa::path(
    get,
    path = "/api/v1/skills",
    responses((status = 200, description = "Skills", body = [SkillResponse])),
    tags = ["skills"],
    operation_id = "listSkills"
)]
#[get("/skills")]
pub async fn list_skills(state: web::Data<HttpState>) -> web::Json<Vec<SkillResponse>> {
    let skills = state.query.get_skills().await;
    web::Json(skills.into_iter().map(SkillResponse::from).collect())
}

/// Add a skill.
#[utoipa::path(
    post,
    path = "/api/v1/skills",
    request_body = SkillRequest,
    responses(
        (status = 200, description = "Added", body = WriteOutcomeResponse),
        (status = 400, description = "Missing field or level out of range", body = ErrorSchema)
    ),
    tags = ["skills"],
    operation_id = "addSkill"
)]
#[post("/skills")]
pub async fn add_skill(
    state: web::Data<HttpState>,
    payload: web::Json<SkillRequest>,
) -> ApiResult<HttpResponse> {
    let skill = parse_new_skill(payload.into_inner())?;
    Ok(write_outcome_response(state.command.add_skill(skill).await))
}

/// Edit the submitted fields of a skill.
#[utoipa::path(
    put,
    path = "/api/v1/skills/{id}",
    params(("id" = String, Path, description = "Skill identifier")),
    request_body = SkillRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 400, description = "Level out of range", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["skills"],
    operation_id = "updateSkill"
)]
#[put("/skills/{id}")]
pub async fn update_skill(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SkillRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    let changes = parse_skill_changes(payload.into_inner())?;
    Ok(write_outcome_response(
        state.command.update_skill(&id, changes).await,
    ))
}

/// Remove a skill.
#[utoipa::path(
    delete,
    path = "/api/v1/skills/{id}",
    params(("id" = String, Path, description = "Skill identifier")),
    responses(
        (status = 200, description = "Deleted", body = WriteOutcomeResponse),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["skills"],
    operation_id = "deleteSkill"
)]
#[delete("/skills/{id}")]
pub async fn delete_skill(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    Ok(write_outcome_response(state.command.delete_skill(&id).await))
}
