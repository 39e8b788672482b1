//! Test helpers for inbound HTTP handlers.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};
use mockable::Clock;
use portfolio_seed::SeedDocument;

use crate::Trace;
use crate::content_seed::build_content;
use crate::domain::ContentService;
use crate::domain::ContentStore;
use crate::domain::ports::FixtureViewInvalidator;
use crate::inbound::http::page_cache::{PageCache, PageCacheInvalidator};
use crate::inbound::http::routes::configure_api;
use crate::inbound::http::state::HttpState;
use crate::test_support::clock::MutableClock;

pub(crate) fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

/// Handler state over a store seeded from the built-in document.
pub(crate) fn seeded_state() -> (web::Data<HttpState>, Arc<ContentStore>) {
    let document = SeedDocument::builtin().expect("built-in seed parses");
    let content = build_content(&document, seeded_at()).expect("seed content builds");
    let store = Arc::new(ContentStore::new(content));
    let page_cache = Arc::new(PageCache::new());
    let invalidator = PageCacheInvalidator::new(
        Arc::clone(&page_cache),
        Arc::new(FixtureViewInvalidator),
    );
    let service = Arc::new(ContentService::new(
        Arc::clone(&store),
        Arc::new(invalidator),
        Arc::new(MutableClock::new(seeded_at())) as Arc<dyn Clock>,
    ));
    let state = HttpState::new(service.clone(), service, page_cache);
    (web::Data::new(state), store)
}

/// API app wired the way the server wires it.
pub(crate) fn api_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(configure_api)
}
