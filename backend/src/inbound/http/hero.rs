//! Hero section HTTP handlers.
//!
//! ```text
//! GET /api/v1/hero
//! PUT /api/v1/hero
//! ```
//!
//! The edit form may carry a profile picture. It is accepted and discarded;
//! the stored picture URL never changes through this endpoint.

use actix_web::{HttpResponse, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, ContentId, Error, HeroSectionChanges, ImageUpload};
use crate::inbound::http::content_dto::HeroSectionResponse;
use crate::inbound::http::outcome::{WriteOutcomeResponse, write_outcome_response};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_content_id, require};

const ID: FieldName = FieldName::new("id");

/// Uploaded image file.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadRequest {
    #[schema(example = "avatar.png")]
    pub file_name: String,
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Raw file bytes.
    #[serde(default)]
    pub data: Vec<u8>,
}

impl From<ImageUploadRequest> for ImageUpload {
    fn from(value: ImageUploadRequest) -> Self {
        Self {
            file_name: value.file_name,
            content_type: value.content_type,
            bytes: value.data,
        }
    }
}

/// Request payload for editing the hero section.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionRequest {
    pub id: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub profile_picture: Option<ImageUploadRequest>,
}

fn parse_hero_section_request(
    payload: HeroSectionRequest,
) -> Result<(ContentId, HeroSectionChanges), Error> {
    let id = parse_content_id(require(payload.id, ID)?, ID)?;
    Ok((
        id,
        HeroSectionChanges {
            headline: payload.headline,
            description: payload.description,
            profile_picture: payload.profile_picture.map(ImageUpload::from),
        },
    ))
}

/// Fetch the hero section.
#[utoipa::path(
    get,
    path = "/api/v1/hero",
    responses(
        (status = 200, description = "Hero section", body = HeroSectionResponse),
        (status = 404, description = "Not seeded", body = ErrorSchema)
    ),
    tags = ["hero"],
    operation_id = "getHeroSection"
)]
#[get("/hero")]
pub async fn get_hero_section(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<HeroSectionResponse>> {
    state
        .query
        .get_hero_section()
        .await
        .map(|hero| web::Json(HeroSectionResponse::from(hero)))
        .ok_or_else(|| Error::not_found("Hero Section entry not found."))
}

/// Edit the hero section text.
#[utoipa::path(
    put,
    path = "/api/v1/hero",
    request_body = HeroSectionRequest,
    responses(
        (status = 200, description = "Updated", body = WriteOutcomeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown id", body = WriteOutcomeResponse)
    ),
    tags = ["hero"],
    operation_id = "updateHeroSection"
)]
#[put("/hero")]
pub async fn update_hero_section(
    state: web::Data<HttpState>,
    payload: web::Json<HeroSectionRequest>,
) -> ApiResult<HttpResponse> {
    let (id, changes) = parse_hero_section_request(payload.into_inner())?;
    Ok(write_outcome_response(
        state.command.update_hero_section(&id, changes).await,
    ))
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
    #[::core::prelude::v1::test]
    fn upload_maps_into_domain_image() {
        let (_, changes) = parse_hero_section_request(HeroSectionRequest {
            id: Some("1".to_owned()),
            profile_picture: Some(ImageUploadRequest {
                file_name: "me.png".to_owned(),
                content_type: "image/png".to_owned(),
                data: vec![137, 80, 78, 71],
            }),
            ..HeroSectionRequest::default()
        })
        .expect("valid request");

        let upload = changes.profile_picture.expect("upload kept");
        assert_eq!(upload.file_name, "me.png");
        assert_eq!(upload.bytes.len(), 4);
    }

    #[rstest]
    #[actix_web::test]
    async fn put_with_picture_keeps_existing_url() {
        let (state, store) = seeded_state();
        let before = store
            .snapshot()
            .expect("store readable")
            .hero_section
            .expect("seeded");
        let app = test::init_service(api_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/hero")
                .set_json(json!({
                    "id": "1",
                    "headline": "Hello there",
                    "profilePicture": {
                        "fileName": "me.png",
                        "contentType": "image/png",
                        "data": [137, 80, 78, 71]
                    }
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"ok": true, "message": "Hero section updated successfully!"})
        );

        let hero: HeroSectionResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/v1/hero").to_request(),
        )
        .await;
        assert_eq!(hero.headline, "Hello there");
        assert_eq!(hero.profile_picture_url, before.profile_picture_url);
        assert_eq!(hero.description, before.description);
    }

    #[rstest]
    #[actix_web::test]
    async fn put_with_unknown_id_is_not_found() {
        let (state, _) = seeded_state();
        let app = test::init_service(api_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/v1/hero")
                .set_json(json!({"id": "7", "headline": "Nope"}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"ok": false, "message": "Hero Section entry not found."})
        );
    }
}
