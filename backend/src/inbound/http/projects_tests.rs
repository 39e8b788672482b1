//! Tests for the project handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockContentCommand, MockContentQuery};
use crate::domain::{ErrorCode, PLACEHOLDER_IMAGE_URL, WriteOutcome};
use crate::inbound::http::page_cache::PageCache;
use crate::inbound::http::test_utils::{api_app, seeded_state};

#[rstest]
#[::core::prelude::v1::test]
fn add_requires_title() {
    let err = parse_new_project(ProjectRequest {
        description: Some("A tool".to_owned()),
        tags: Some("Rust".to_owned()),
        ..ProjectRequest::default()
    })
    .expect_err("title required");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details(),
        Some(&json!({"field": "title", "code": "missing_field"}))
    );
}

#[rstest]
#[::core::prelude::v1::test]
fn add_splits_tags_and_defaults_links() {
    let project = parse_new_project(ProjectRequest {
        title: Some("CLI".to_owned()),
        description: Some("A tool".to_owned()),
        tags: Some("Go, Rust,  TypeScript".to_owned()),
        image_url: Some("  ".to_owned()),
        ..ProjectRequest::default()
    })
    .expect("valid project");

    assert_eq!(project.tags.as_slice(), ["Go", "Rust", "TypeScript"]);
    assert_eq!(project.demo_url, "");
    assert_eq!(project.image_url, None);
}

#[rstest]
#[actix_web::test]
async fn post_adds_project_at_front() {
    let (state, store) = seeded_state();
    let app = test::init_service(api_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({
                "title": "Portfolio API",
                "description": "Content service",
                "tags": "Rust, Actix",
                "repoUrl": "https://github.com/example/portfolio"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"ok": true, "message": "Project added successfully!"}));
    let stored = store.snapshot().expect("store readable");
    assert_eq!(stored.projects.len(), 7);
    assert_eq!(stored.projects[0].title, "Portfolio API");
    assert_eq!(
        stored.projects[0].image_url.as_deref(),
        Some(PLACEHOLDER_IMAGE_URL)
    );
}

#[rstest]
#[actix_web::test]
async fn post_without_tags_is_bad_request() {
    let (state, store) = seeded_state();
    let app = test::init_service(api_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({"title": "Untagged", "description": "No tags"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"]["field"], json!("tags"));
    assert_eq!(body["details"]["code"], json!("missing_field"));
    assert_eq!(store.snapshot().expect("store readable").projects.len(), 6);
}

#[rstest]
#[actix_web::test]
async fn put_and_delete_unknown_project_are_not_found() {
    let (state, _) = seeded_state();
    let app = test::init_service(api_app(state)).await;

    let update = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/projects/unknown")
            .set_json(json!({"title": "Ghost"}))
            .to_request(),
    )
    .await;
    let delete = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/v1/projects/unknown")
            .to_request(),
    )
    .await;

    assert_eq!(update.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(delete).await;
    assert_eq!(body, json!({"ok": false, "message": "Project not found."}));
}

#[rstest]
#[actix_web::test]
async fn put_updates_tags_and_delete_removes() {
    let (state, store) = seeded_state();
    let app = test::init_service(api_app(state)).await;

    let update = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/v1/projects/2")
            .set_json(json!({"tags": "Svelte, Rust"}))
            .to_request(),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);

    let delete = test::call_service(
        &app,
        test::TestRequest::delete().uri("/api/v1/projects/1").to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::OK);

    let listed: Vec<ProjectResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1/projects").to_request(),
    )
    .await;
    assert_eq!(listed.len(), 5);
    let updated = listed.iter().find(|p| p.id == "2").expect("project 2 kept");
    assert_eq!(updated.tags, ["Svelte", "Rust"]);
    assert_eq!(updated.title, "Task Management App");
    assert!(
        store
            .snapshot()
            .expect("store readable")
            .projects
            .iter()
            .all(|p| p.id.as_str() != "1")
    );
}

#[rstest]
#[actix_web::test]
async fn store_fault_surfaces_as_internal_error_outcome() {
    let mut command = MockContentCommand::new();
    command
        .expect_add_project()
        .times(1)
        .returning(|_| WriteOutcome::failure(&Error::internal("content store lock poisoned")));
    let state = web::Data::new(HttpState::new(
        Arc::new(MockContentQuery::new()),
        Arc::new(command),
        Arc::new(PageCache::new()),
    ));
    let app = test::init_service(api_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/projects")
            .set_json(json!({"title": "T", "description": "D", "tags": "Rust"}))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"ok": false, "message": "content store lock poisoned"})
    );
}
