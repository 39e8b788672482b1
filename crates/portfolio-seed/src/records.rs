//! Plain seed records, one per content entity.
//!
//! Records mirror the JSON layout (camelCase keys) and carry no timestamps
//! beyond the optional project creation time; the backend stamps
//! `updated_at` from its clock when it builds the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Seed values for the about-me singleton.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutMeSeed {
    /// Singleton identifier callers must echo back on update.
    pub id: String,
    /// Owner's display name.
    pub name: String,
    /// Owner's email address.
    pub email: String,
    /// Free-form location text.
    pub location: String,
    /// Availability headline.
    pub availability: String,
    /// Long-form biography.
    pub content: String,
}

/// Seed values for a project entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectSeed {
    /// Identifier, unique among projects.
    pub id: String,
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Technology tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional preview image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Live demo link.
    pub demo_url: String,
    /// Source repository link.
    pub repo_url: String,
    /// Creation time; the loader falls back to the startup time when absent.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Seed values for a skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillSeed {
    /// Identifier, unique among skills.
    pub id: String,
    /// Skill name.
    pub name: String,
    /// Proficiency percentage, at most [`crate::MAX_SKILL_LEVEL`].
    pub level: u8,
}

/// Seed values for a work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceSeed {
    /// Identifier, unique among experience entries.
    pub id: String,
    /// Role title.
    pub title: String,
    /// Employer name.
    pub company: String,
    /// Human readable period such as `2019 - 2021`.
    pub period: String,
    /// Role summary.
    pub description: String,
    /// First day in the role, if known.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day in the role; absent while the role is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Seed values for the contact-info singleton.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInfoSeed {
    /// Singleton identifier callers must echo back on update.
    pub id: String,
    /// Public contact email.
    pub email: String,
    /// LinkedIn profile link.
    pub linkedin_url: String,
    /// GitHub profile link.
    pub github_url: String,
    /// Instagram profile link.
    pub instagram_url: String,
    /// Availability statement shown next to the links.
    pub availability_status: String,
}

/// Seed values for the hero banner singleton.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroSectionSeed {
    /// Singleton identifier callers must echo back on update.
    pub id: String,
    /// Banner headline.
    pub headline: String,
    /// Banner sub-heading.
    pub description: String,
    /// Avatar image link.
    pub profile_picture_url: String,
}
