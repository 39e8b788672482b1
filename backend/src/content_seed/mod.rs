//! Startup wiring for the initial portfolio content.

mod config;
mod startup;

pub use config::SeedSettings;
pub use startup::{StartupSeedingError, build_content, load_seed_document, seed_content_store};
