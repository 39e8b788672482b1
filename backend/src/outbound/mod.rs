//! Outbound adapters implementing driven domain ports.
//!
//! - **cache**: broadcast channel carrying view invalidation events to page
//!   caches.

pub mod cache;
