//! Public home page snapshot.
//!
//! ```text
//! GET /api/v1/portfolio
//! ```
//!
//! The serialised body is memoised in the [`PageCache`] under
//! [`ViewPath::PublicHome`] and served from there until a content write
//! evicts it. A body rendered across a write is returned but not stored. The `x-page-cache` header reports `hit` or `miss`.
//!
//! [`PageCache`]: crate::inbound::http::page_cache::PageCache

use actix_web::http::header::ContentType;
use actix_web::web::Bytes;
use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, ViewPath};
use crate::inbound::http::content_dto::{
    AboutMeResponse, ContactInfoResponse, ExperienceResponse, HeroSectionResponse,
    ProjectResponse, SkillResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Response header reporting whether the body came from the page cache.
pub const PAGE_CACHE_HEADER: &str = "x-page-cache";

/// Everything the public home page renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub hero: Option<HeroSectionResponse>,
    pub about: Option<AboutMeResponse>,
    pub projects: Vec<ProjectResponse>,
    pub skills: Vec<SkillResponse>,
    pub experience: Vec<ExperienceResponse>,
    pub contact: Option<ContactInfoResponse>,
}

async fn render_portfolio(state: &HttpState) -> ApiResult<Bytes> {
    let query = &state.query;
    let snapshot = PortfolioResponse {
        hero: query.get_hero_section().await.map(Into::into),
        about: query.get_about_me().await.map(Into::into),
        projects: query.get_projects().await.into_iter().map(Into::into).collect(),
        skills: query.get_skills().await.into_iter().map(Into::into).collect(),
        experience: query
            .get_experience()
            .await
            .into_iter()
            .map(Into::into)
            .collect(),
        contact: query.get_contact_info().await.map(Into::into),
    };
    serde_json::to_vec(&snapshot)
        .map(Bytes::from)
        .map_err(|err| Error::internal(format!("failed to render portfolio: {err}")))
}

fn page_response(body: Bytes, cache_status: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .insert_header((PAGE_CACHE_HEADER, cache_status))
        .body(body)
}

/// Public home page snapshot.
#[utoipa::path(
    get,
    path = "/api/v1/portfolio",
    responses(
        (status = 200, description = "Portfolio snapshot", body = PortfolioResponse,
            headers(("x-page-cache" = String, description = "hit or miss"))),
        (status = 500, description = "Rendering failed", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getPortfolio"
)]
#[get("/portfolio")]
pub async fn get_portfolio(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let path = ViewPath::PublicHome;
    if let Some(body) = state.page_cache.get(path) {
        debug!(%path, "page cache hit");
        return Ok(page_response(body, "hit"));
    }

    let rendered_at = state.page_cache.generation();
    let body = render_portfolio(&state).await?;
    let stored = state
        .page_cache
        .insert_if_current(path, body.clone(), rendered_at);
    debug!(%path, bytes = body.len(), stored, "page cache miss");
    Ok(page_response(body, "miss"))
}
