//! Memoised response bodies for rendered views.
//!
//! Bodies are keyed by [`ViewPath`]. [`PageCacheInvalidator`] evicts the
//! paths an invalidation event names before the write that raised it
//! returns, then forwards the event downstream. Every eviction bumps a
//! generation counter; a render records the generation it started under and
//! its body is only stored if no eviction happened in between.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use actix_web::web::Bytes;
use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ViewInvalidationError, ViewInvalidator};
use crate::domain::{InvalidationEvent, ViewPath};

/// Eviction counter observed by renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug, Default)]
struct Pages {
    generation: u64,
    bodies: HashMap<ViewPath, Bytes>,
}

/// In-memory cache of rendered response bodies.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: Mutex<Pages>,
}

impl PageCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn pages(&self) -> MutexGuard<'_, Pages> {
        // Entries are replaced whole; a poisoned map is still consistent.
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached body for `path`, if any.
    pub fn get(&self, path: ViewPath) -> Option<Bytes> {
        self.pages().bodies.get(&path).cloned()
    }

    /// Generation to pass to [`Self::insert_if_current`] once rendered.
    pub fn generation(&self) -> Generation {
        Generation(self.pages().generation)
    }

    /// Store `body` unless an eviction ran since `rendered_at` was taken.
    ///
    /// Returns whether the body was stored.
    pub fn insert_if_current(&self, path: ViewPath, body: Bytes, rendered_at: Generation) -> bool {
        let mut pages = self.pages();
        if pages.generation != rendered_at.0 {
            return false;
        }
        pages.bodies.insert(path, body);
        true
    }

    /// Drop the cached bodies for `paths` and advance the generation.
    ///
    /// Returns how many bodies were present.
    pub fn evict(&self, paths: &[ViewPath]) -> usize {
        let mut pages = self.pages();
        pages.generation = pages.generation.wrapping_add(1);
        paths
            .iter()
            .filter(|path| pages.bodies.remove(*path).is_some())
            .count()
    }

    /// Number of cached bodies.
    pub fn len(&self) -> usize {
        self.pages().bodies.len()
    }

    /// Whether no body is cached.
    pub fn is_empty(&self) -> bool {
        self.pages().bodies.is_empty()
    }
}

/// [`ViewInvalidator`] that evicts the page cache, then forwards the event.
pub struct PageCacheInvalidator<V> {
    cache: Arc<PageCache>,
    downstream: Arc<V>,
}

impl<V> PageCacheInvalidator<V> {
    /// Evict from `cache`, then forward every event to `downstream`.
    pub fn new(cache: Arc<PageCache>, downstream: Arc<V>) -> Self {
        Self { cache, downstream }
    }
}

#[async_trait]
impl<V: ViewInvalidator> ViewInvalidator for PageCacheInvalidator<V> {
    async fn invalidate(&self, event: InvalidationEvent) -> Result<(), ViewInvalidationError> {
        let evicted = self.cache.evict(event.paths());
        debug!(section = ?event.section(), evicted, "page cache eviction");
        self.downstream.invalidate(event).await
    }
}
