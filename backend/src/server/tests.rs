//! Tests for server construction and readiness signalling.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

use super::create_server;
use portfolio_backend::domain::ports::FixtureViewInvalidator;
use portfolio_backend::domain::{ContentService, ContentStore, PortfolioContent};
use portfolio_backend::inbound::http::health::HealthState;
use portfolio_backend::inbound::http::page_cache::PageCache;
use portfolio_backend::inbound::http::state::HttpState;

#[fixture]
fn store() -> Arc<ContentStore> {
    Arc::new(ContentStore::new(PortfolioContent::default()))
}

#[fixture]
fn health_state(store: Arc<ContentStore>) -> web::Data<HealthState> {
    web::Data::new(HealthState::new(store))
}

#[fixture]
fn http_state(store: Arc<ContentStore>) -> web::Data<HttpState> {
    let service = Arc::new(ContentService::new(
        store,
        Arc::new(FixtureViewInvalidator),
        Arc::new(DefaultClock) as Arc<dyn Clock>,
    ));
    web::Data::new(HttpState::new(
        service.clone(),
        service,
        Arc::new(PageCache::new()),
    ))
}

#[rstest]
#[actix_web::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(
        health_state.clone(),
        http_state,
        "127.0.0.1:0".parse().expect("valid address"),
    )
    .expect("server should bind an ephemeral port");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}
