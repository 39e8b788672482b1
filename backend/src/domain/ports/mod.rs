//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`ContentQuery`], [`ContentCommand`]) are what inbound
//! adapters call; the driven port [`ViewInvalidator`] is what the domain
//! calls out through after a write.

mod macros;
pub(crate) use macros::define_port_error;

mod content_command;
mod content_query;
mod view_invalidator;

pub use content_command::ContentCommand;
#[cfg(test)]
pub use content_command::MockContentCommand;
#[cfg(test)]
pub use content_query::MockContentQuery;
pub use content_query::{ContentQuery, FixtureContentQuery};
#[cfg(test)]
pub use view_invalidator::MockViewInvalidator;
pub use view_invalidator::{FixtureViewInvalidator, ViewInvalidationError, ViewInvalidator};
