//! In-process cache invalidation adapter.
//!
//! [`BroadcastViewInvalidator`] implements the `ViewInvalidator` port over a
//! `tokio` broadcast channel so other in-process listeners can follow content
//! writes. The HTTP page cache is evicted before the event reaches this
//! adapter. Publishing with no subscribers is not an error.

use async_trait::async_trait;
use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::debug;

use crate::domain::InvalidationEvent;
use crate::domain::ports::{ViewInvalidationError, ViewInvalidator};

/// Default number of events buffered per subscriber.
pub const DEFAULT_INVALIDATION_CAPACITY: usize = 64;

/// Broadcast-backed [`ViewInvalidator`].
#[derive(Debug, Clone)]
pub struct BroadcastViewInvalidator {
    sender: Sender<InvalidationEvent>,
}

impl BroadcastViewInvalidator {
    /// Create a channel buffering `capacity` events per subscriber.
    ///
    /// # Panics
    /// Panics when `capacity` is zero, as [`broadcast::channel`] does.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receive every event published after this call.
    pub fn subscribe(&self) -> Receiver<InvalidationEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastViewInvalidator {
    fn default() -> Self {
        Self::new(DEFAULT_INVALIDATION_CAPACITY)
    }
}

#[async_trait]
impl ViewInvalidator for BroadcastViewInvalidator {
    async fn invalidate(&self, event: InvalidationEvent) -> Result<(), ViewInvalidationError> {
        let section = event.section();
        match self.sender.send(event) {
            Ok(receivers) => debug!(?section, receivers, "view invalidation published"),
            Err(_) => debug!(?section, "view invalidation dropped; no subscribers"),
        }
        Ok(())
    }
}
