//! Route table for the `/api/v1` scope.

use actix_web::web;

use super::about::{get_about_me, update_about_me};
use super::contact::{get_contact_info, update_contact_info};
use super::dashboard::get_dashboard_stats;
use super::experience::{add_experience, delete_experience, list_experience, update_experience};
use super::hero::{get_hero_section, update_hero_section};
use super::portfolio::get_portfolio;
use super::projects::{add_project, delete_project, list_projects, update_project};
use super::skills::{add_skill, delete_skill, list_skills, update_skill};

/// Register every content endpoint under `/api/v1`.
///
/// Handlers expect [`HttpState`](super::state::HttpState) in the app data.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(get_portfolio)
            .service(get_about_me)
            .service(update_about_me)
            .service(list_projects)
            .service(add_project)
            .service(update_project)
            .service(delete_project)
            .service(list_skills)
            .service(add_skill)
            .service(update_skill)
            .service(delete_skill)
            .service(list_experience)
            .service(add_experience)
            .service(update_experience)
            .service(delete_experience)
            .service(get_contact_info)
            .service(update_contact_info)
            .service(get_hero_section)
            .service(update_hero_section)
            .service(get_dashboard_stats),
    );
}
