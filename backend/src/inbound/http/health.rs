//! Health endpoints for orchestration.
//!
//! Liveness tracks the content store: once a writer has panicked while
//! holding its lock every read comes back empty and every write fails, so
//! the process should be restarted. Readiness additionally waits for the
//! listener to be bound.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ContentStore;

/// Probe state shared by the health handlers.
pub struct HealthState {
    ready: AtomicBool,
    store: Arc<ContentStore>,
}

impl HealthState {
    /// Create a state over `store` that is not yet ready.
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            store,
        }
    }

    /// Mark the service as ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire) && self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        !self.store.is_poisoned()
    }
}

fn probe_response(probe: &'static str, probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        warn!(probe, "health probe failing");
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Content is seeded and the listener is bound"),
        (status = 503, description = "Not bound yet or content store unusable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response("ready", state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Content store is usable"),
        (status = 503, description = "Content store lock poisoned")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response("live", state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::PortfolioContent;

    #[fixture]
    fn store() -> Arc<ContentStore> {
        Arc::new(ContentStore::new(PortfolioContent::default()))
    }

    async fn probe(state: web::Data<HealthState>, uri: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(ready)
                .service(live),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        res.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_follows_mark_ready(store: Arc<ContentStore>) {
        let state = web::Data::new(HealthState::new(store));
        assert_eq!(
            probe(state.clone(), "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.mark_ready();
        assert_eq!(probe(state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn poisoned_store_fails_both_probes(store: Arc<ContentStore>) {
        let state = web::Data::new(HealthState::new(Arc::clone(&store)));
        state.mark_ready();
        assert_eq!(probe(state.clone(), "/health/live").await, StatusCode::OK);

        store.poison();

        assert_eq!(
            probe(state.clone(), "/health/live").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            probe(state, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
