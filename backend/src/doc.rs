//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every content endpoint, the health probes and the
//! schema wrappers for domain types ([`ErrorSchema`], [`ErrorCodeSchema`]).
//! Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio content API",
        description = "Read and edit the sections of a personal portfolio site."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::portfolio::get_portfolio,
        crate::inbound::http::about::get_about_me,
        crate::inbound::http::about::update_about_me,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::add_project,
        crate::inbound::http::projects::update_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::skills::list_skills,
        crate::inbound::http::skills::add_skill,
        crate::inbound::http::skills::update_skill,
        crate::inbound::http::skills::delete_skill,
        crate::inbound::http::experience::list_experience,
        crate::inbound::http::experience::add_experience,
        crate::inbound::http::experience::update_experience,
        crate::inbound::http::experience::delete_experience,
        crate::inbound::http::contact::get_contact_info,
        crate::inbound::http::contact::update_contact_info,
        crate::inbound::http::hero::get_hero_section,
        crate::inbound::http::hero::update_hero_section,
        crate::inbound::http::dashboard::get_dashboard_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "portfolio", description = "Cached public home page snapshot"),
        (name = "about", description = "About-me section"),
        (name = "projects", description = "Project showcase"),
        (name = "skills", description = "Skills and proficiency levels"),
        (name = "experience", description = "Work history"),
        (name = "contact", description = "Contact links"),
        (name = "hero", description = "Hero banner"),
        (name = "dashboard", description = "Dashboard summary"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const ERROR_SCHEMA_NAME: &str = "ErrorResponse";

    #[rstest]
    #[case("/api/v1/portfolio")]
    #[case("/api/v1/about")]
    #[case("/api/v1/projects/{id}")]
    #[case("/api/v1/skills")]
    #[case("/api/v1/experience/{id}")]
    #[case("/api/v1/contact")]
    #[case("/api/v1/hero")]
    #[case("/api/v1/dashboard/stats")]
    #[case("/health/ready")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_matches_write_envelope() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let RefOr::T(Schema::Object(error)) = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema")
        else {
            panic!("expected Object schema");
        };

        assert!(error.properties.contains_key("ok"));
        assert!(error.properties.contains_key("code"));
        assert!(error.properties.contains_key("message"));
        assert!(error.properties.contains_key("traceId"));
    }
}
