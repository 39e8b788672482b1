//! Domain primitives, aggregates and services.
//!
//! Purpose: define the portfolio records, the store that owns them, and the
//! service that enforces ordering, identity and invalidation rules. Types
//! here are transport agnostic; adapters map them to JSON or other envelopes.
//!
//! Public surface:
//! - Records: [`AboutMe`], [`Project`], [`Skill`], [`Experience`],
//!   [`ContactInfo`], [`HeroSection`] with their `New*`/`*Changes` payloads.
//! - [`ContentStore`] and [`ContentService`].
//! - [`Error`]/[`ErrorCode`] and [`WriteOutcome`].
//! - [`InvalidationEvent`] and [`ViewPath`].

mod about_me;
mod changes;
mod contact_info;
mod content_id;
mod content_service;
mod content_store;
mod dashboard;
pub mod error;
mod experience;
mod hero_section;
mod invalidation;
pub mod ports;
mod project;
mod skill;
pub mod trace_id;
mod write_outcome;

pub use self::about_me::{AboutMe, AboutMeChanges};
pub use self::contact_info::{ContactInfo, ContactInfoChanges};
pub use self::content_id::{ContentId, ContentIdValidationError, Identified};
pub use self::content_service::ContentService;
pub use self::content_store::{ContentStore, ContentStoreError, PortfolioContent};
pub use self::dashboard::DashboardStats;
pub use self::error::{Error, ErrorCode};
pub use self::experience::{Experience, ExperienceChanges, NewExperience};
pub use self::hero_section::{HeroSection, HeroSectionChanges, ImageUpload};
pub use self::invalidation::{ContentSection, InvalidationEvent, PUBLIC_HOME_PATH, ViewPath};
pub use self::project::{NewProject, PLACEHOLDER_IMAGE_URL, Project, ProjectChanges, Tags};
pub use self::skill::{NewSkill, Skill, SkillChanges, SkillLevel, SkillLevelError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::write_outcome::WriteOutcome;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use portfolio_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Project not found."))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
