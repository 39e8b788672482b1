//! Driven port notifying renderers that views are stale.
use async_trait::async_trait;

use super::define_port_error;
use crate::domain::InvalidationEvent;

define_port_error! {
    /// Errors surfaced while publishing invalidation events.
    pub enum ViewInvalidationError {
        /// The event could not be delivered.
        Publish { message: String } => "view invalidation failed: {message}",
    }
}

/// Port for announcing that rendered views must be refreshed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewInvalidator: Send + Sync {
    /// Publish an invalidation event.
    async fn invalidate(&self, event: InvalidationEvent) -> Result<(), ViewInvalidationError>;
}

/// Fixture invalidator that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureViewInvalidator;

#[async_trait]
impl ViewInvalidator for FixtureViewInvalidator {
    async fn invalidate(&self, _event: InvalidationEvent) -> Result<(), ViewInvalidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentSection;

    #[tokio::test]
    async fn fixture_accepts_events() {
        let result = FixtureViewInvalidator
            .invalidate(InvalidationEvent::for_section(ContentSection::Hero))
            .await;
        assert!(result.is_ok());
    }
}
