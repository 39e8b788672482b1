//! About-me HTTP handlers.
//!
//! ```text
//! GET /api/v1/about
//! PUT /api/v1/about
//! ```

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AboutMeChanges, ApiResult, ContentId, Error};
use crate::inbound::http::content_dto::AboutMeResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_content_id, require};

const ID: FieldName = FieldName::new("id");

/// Request payload for editing the about-me section.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutMeRequest {
    /// Identifier of the stored section.
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub content: Option<String>,
}

fn parse_about_me_request(payload: AboutMeRequest) -> Result<(ContentId, AboutMeChanges), Error> {
    let id = parse_content_id(require(payload.id, ID)?, ID)?;
    Ok((
        id,
        AboutMeChanges {
            name: payload.name,
            email: payload.email,
            location: payload.location,
            availability: payload.availability,
            content: payload.content,
        },
    ))
}

/// Fetch the about-me section.
#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses(
        (status = 200, description = "About-me section", body = AboutMeResponse),
        (status = 404, description = "Not seeded", body = ErrorSchema)
    ),
    tags = ["about"],
    operation_id = "getAboutMe"
)]
#[get("/about")]
pub async fn get_about_me(state: web::Data<HttpState>) -> ApiResult<web::Json<AboutMeResponse>> {
    state
        .query
        .get_about_me()
        .await
        .map(|about| web::Json(AboutMeResponse::from(about)))
        .ok_or_else(|| Error::not_found("About Me entry not found."))
}

/// Edit the about-me section.
#[utoipa::path(
    put,
    path = "/api/v1/about",
    request_body = AboutMeRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse),
        (status = 500, description = "Internal fault", body = WriteOutcomeResponse)
    ),
    tags = ["about"],
    operation_id = "updateAboutMe"
)]
#[put("/about")]
pub async fn update_about_me(
    state: web::Data<HttpState>,
    payload: web::Json<AboutMeRequest>,
) -> ApiResult<HttpResponse> {
    let (id, changes) = parse_about_me_request(payload.into_inner())?;
    let outcome = state.command.update_about_me(&id, changes).await;
    Ok(write_outcome_response(outcome))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::{api_app, seeded_state};

    #[rstest]
    #[actix_web::test]
    async fn get_returns_seeded_section() {
        let (state, _) = seeded_state();
        let app = test::init_service(api_app(state)).await;

        let body: AboutMeResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/v1/about").to_request(),
        )
        .await;

        assert_eq!(body.id, "1");
        assert_eq!(body.location, "Ifrane");
    }

    #[rstest]
    #[actix_web::test]
    async fn put_updates_submitted_fields() {
        let (state, store) = seeded_state();
        let app = test::init_service(api_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/about")
                .set_json(json!({"id": "1", "location": "Rabat"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"ok": true, "message": "About me section updated successfully!"})
        );
        let about = store.snapshot().expect("store readable").about_me.expect("seeded");
        assert_eq!(about.location, "Rabat");
        assert_eq!(about.name, "Mohamed Alahyani");
    }

    #[rstest]
    #[actix_web::test]
    async fn put_with_wrong_id_is_not_found() {
        let (state, _) = seeded_state();
        let app = test::init_service(api_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/about")
                .set_json(json!({"id": "2", "name": "Someone"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"ok": false, "message": "About Me entry not found."}));
    }

    #[rstest]
    #[::core::prelude::v1::test]
    fn missing_id_is_invalid_request() {
        let err = parse_about_me_request(AboutMeRequest::default()).expect_err("id required");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "id", "code": "missing_field"}))
        );
    }
}
