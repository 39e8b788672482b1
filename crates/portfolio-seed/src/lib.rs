//! Versioned seed documents describing the initial portfolio content.
//!
//! This crate parses and validates the JSON document used to populate the
//! in-memory content store at process start. Records are plain data; the
//! backend maps them into its own entities.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed documents from JSON strings or files
//! - A built-in document holding the default site content
//! - Validation of identifiers, skill levels, and document version
//!
//! # Example
//!
//! ```
//! use portfolio_seed::SeedDocument;
//!
//! let document = SeedDocument::builtin().expect("built-in seed is valid");
//!
//! assert_eq!(document.skills().len(), 12);
//! assert_eq!(document.about_me().id, "1");
//! ```

mod document;
mod error;
mod records;
mod validation;

pub use document::{BUILTIN_SEED_JSON, SUPPORTED_VERSION, SeedDocument};
pub use error::SeedError;
pub use records::{
    AboutMeSeed, ContactInfoSeed, ExperienceSeed, HeroSectionSeed, ProjectSeed, SkillSeed,
};
pub use validation::MAX_SKILL_LEVEL;
