//! Project HTTP handlers.
//!
//! ```text
//! GET    /api/v1/projects
//! POST   /api/v1/projects
//! PUT    /api/v1/projects/{id}
//! DELETE /api/v1/projects/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, NewProject, ProjectChanges, Tags};
use crate::inbound::http::content_dto::ProjectResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_content_id, require};

const ID: FieldName = FieldName::new("id");
const TITLE: FieldName = FieldName::new("title");
const DESCRIPTION: FieldName = FieldName::new("description");
const TAGS: FieldName = FieldName::new("tags");

/// Request payload for adding or editing a project.
///
/// `tags` is a single comma-delimited string. `imageUrl` is only read when
/// adding; projects without one get a placeholder image.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "Rust, Actix, PostgreSQL")]
    pub tags: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: Option<String>,
}

fn parse_new_project(payload: ProjectRequest) -> Result<NewProject, Error> {
    Ok(NewProject {
        title: require(payload.title, TITLE)?,
        description: require(payload.description, DESCRIPTION)?,
        tags: Tags::parse(&require(payload.tags, TAGS)?),
        demo_url: payload.demo_url.unwrap_or_default(),
        repo_url: payload.repo_url.unwrap_or_default(),
        image_url: payload.image_url.filter(|url| !url.trim().is_empty()),
    })
}

fn parse_project_changes(payload: ProjectRequest) -> ProjectChanges {
    ProjectChanges {
        title: payload.title,
        description: payload.description,
        tags: payload.tags.as_deref().map(Tags::parse),
        demo_url: payload.demo_url,
        repo_url: payload.repo_url,
    }
}

/// List projects, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    responses((status = 200, description = "Projects", body = [ProjectResponse])),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(state: web::Data<HttpState>) -> web::Json<Vec<ProjectResponse>> {
    let projects = state.query.get_projects().await;
    web::Json(projects.into_iter().map(ProjectResponse::from).collect())
}

/// Add a project.
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Added", body = WriteOutcomeResponse),
        (status = 400, description = "Missing field", body = ErrorSchema),
        (status = 500, description = "Internal fault", body = WriteOutcomeResponse)
    ),
    tags = ["projects"],
    operation_id = "addProject"
)]
#[post("/projects")]
pub async fn add_project(
    state: web::Data<HttpState>,
    payload: web::Json<ProjectRequest>,
) -> ApiResult<HttpResponse> {
    let project = parse_new_project(payload.into_inner())?;
    Ok(write_outcome_response(state.command.add_project(project).await))
}

/// Edit the submitted fields of a project.
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    params(("id" = String, Path, description = "Project identifier")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["projects"],
    operation_id = "updateProject"
)]
#[put("/projects/{id}")]
pub async fn update_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ProjectRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    let changes = parse_project_changes(payload.into_inner());
    Ok(write_outcome_response(
        state.command.update_project(&id, changes).await,
    ))
}

/// Remove a project.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    params(("id" = String, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Deleted", body = WriteOutcomeResponse),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/projects/{id}")]
pub async fn delete_project(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_content_id(path.into_inner(), ID)?;
    Ok(write_outcome_response(state.command.delete_project(&id).await))
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
