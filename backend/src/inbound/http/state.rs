//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the content ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::{ContentCommand, ContentQuery};
use crate::inbound::http::page_cache::PageCache;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub query: Arc<dyn ContentQuery>,
    pub command: Arc<dyn ContentCommand>,
    pub page_cache: Arc<PageCache>,
}

impl HttpState {
    /// Bundle the ports with the page cache shared with the eviction task.
    pub fn new(
        query: Arc<dyn ContentQuery>,
        command: Arc<dyn ContentCommand>,
        page_cache: Arc<PageCache>,
    ) -> Self {
        Self {
            query,
            command,
            page_cache,
        }
    }
}
