//! Dashboard summary handler.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DashboardStats;
use crate::inbound::http::state::HttpState;

/// Collection sizes shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub projects: usize,
    pub skills: usize,
    pub experience: usize,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(value: DashboardStats) -> Self {
        Self {
            projects: value.projects,
            skills: value.skills,
            experience: value.experience,
        }
    }
}

/// Count projects, skills and experience entries.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    responses((status = 200, description = "Collection sizes", body = DashboardStatsResponse)),
    tags = ["dashboard"],
    operation_id = "getDashboardStats"
)]
#[get("/dashboard/stats")]
pub async fn get_dashboard_stats(
    state: web::Data<HttpState>,
) -> web::Json<DashboardStatsResponse> {
    web::Json(state.query.get_dashboard_stats().await.into())
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::inbound::http::test_utils::{api_app, seeded_state};

    #[rstest]
    #[actix_web::test]
    async fn counts_follow_writes() {
        let (state, _) = seeded_state();
        let app = test::init_service(api_app(state)).await;

        let seeded: DashboardStatsResponse = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/dashboard/stats")
                .to_request(),
        )
        .await;
        assert_eq!(
            seeded,
            DashboardStatsResponse {
                projects: 6,
                skills: 12,
                experience: 4
            }
        );

        test::call_service(
            &app,
            test::TestRequest::delete().uri("/api/v1/skills/1").to_request(),
        )
        .await;
        let body: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/dashboard/stats")
                .to_request(),
        )
        .await;
        assert_eq!(body, json!({"projects": 6, "skills": 11, "experience": 4}));
    }
}
