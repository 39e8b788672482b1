//! Backend entry-point: seeds the content store, wires the page cache into
//! the write path and serves the REST endpoints.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portfolio_backend::content_seed::{SeedSettings, seed_content_store};
use portfolio_backend::domain::ContentService;
use portfolio_backend::inbound::http::health::HealthState;
use portfolio_backend::inbound::http::page_cache::{PageCache, PageCacheInvalidator};
use portfolio_backend::inbound::http::state::HttpState;
use portfolio_backend::outbound::cache::BroadcastViewInvalidator;
use server::{ServerSettings, create_server};

/// Settings are read from the environment and configuration files; command
/// line flags are not parsed.
fn program_name() -> Vec<OsString> {
    std::env::args_os().take(1).collect()
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server_settings = ServerSettings::load_from_iter(program_name())
        .map_err(|e| std::io::Error::other(format!("server settings: {e}")))?;
    let seed_settings = SeedSettings::load_from_iter(program_name())
        .map_err(|e| std::io::Error::other(format!("seed settings: {e}")))?;

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = Arc::new(
        seed_content_store(&seed_settings, clock.as_ref()).map_err(std::io::Error::other)?,
    );

    let page_cache = Arc::new(PageCache::new());
    let invalidator = Arc::new(PageCacheInvalidator::new(
        Arc::clone(&page_cache),
        Arc::new(BroadcastViewInvalidator::default()),
    ));

    let health_state = web::Data::new(HealthState::new(Arc::clone(&store)));
    let service = Arc::new(ContentService::new(store, invalidator, clock));
    let http_state = web::Data::new(HttpState::new(service.clone(), service, page_cache));

    let bind_addr = server_settings.bind_addr();
    let server = create_server(health_state, http_state, bind_addr)?;
    info!(%bind_addr, "portfolio backend listening");
    server.await
}
