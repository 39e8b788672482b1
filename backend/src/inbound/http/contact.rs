//! Contact information HTTP handlers.
//!
//! ```text
//! GET /api/v1/contact
//! PUT /api/v1/contact
//! ```

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, ContactInfoChanges, ContentId, Error};
use crate::inbound::http::content_dto::ContactInfoResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_content_id, require};

const ID: FieldName = FieldName::new("id");

/// Request payload for editing contact links.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoRequest {
    pub id: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub instagram_url: Option<String>,
    pub availability_status: Option<String>,
}

fn parse_contact_info_request(
    payload: ContactInfoRequest,
) -> Result<(ContentId, ContactInfoChanges), Error> {
    let id = parse_content_id(require(payload.id, ID)?, ID)?;
    Ok((
        id,
        ContactInfoChanges {
            email: payload.email,
            linkedin_url: payload.linkedin_url,
            github_url: payload.github_url,
            instagram_url: payload.instagram_url,
            availability_status: payload.availability_status,
        },
    ))
}

/// Fetch the contact information.
#[utoipa::path(
    get,
    path = "/api/v1/contact",
    responses(
        (status = 200, description = "Contact information", body = ContactInfoResponse),
        (status = 404, description = "Not seeded", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "getContactInfo"
)]
#[get("/contact")]
pub async fn get_contact_info(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ContactInfoResponse>> {
    state
        .query
        .get_contact_info()
        .await
        .map(|contact| web::Json(ContactInfoResponse::from(contact)))
        .ok_or_else(|| Error::not_found("Contact Info entry not found."))
}

/// Edit the contact information.
#[utoipa::path(
    put,
    path = "/api/v1/contact",
    request_body = ContactInfoRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["contact"],
    operation_id = "updateContactInfo"
)]
#[put("/contact")]
pub async fn update_contact_info(
    state: web::Data<HttpState>,
    payload: web::Json<ContactInfoRequest>,
) -> ApiResult<HttpResponse> {
    let (id, changes) = parse_contact_info_request(payload.into_inner())?;
    Ok(write_outcome_response(
        state.command.update_contact_info(&id, changes).await,
    ))
}
