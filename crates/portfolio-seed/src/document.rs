//! Seed document type and JSON parsing.
//!
//! A document holds one record for each singleton and an ordered list for
//! each collection. Collection order is preserved exactly as written.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SeedError;
use crate::records::{
    AboutMeSeed, ContactInfoSeed, ExperienceSeed, HeroSectionSeed, ProjectSeed, SkillSeed,
};
use crate::validation::{validate_ids, validate_singleton_id, validate_skill_levels};

/// Current supported document version.
pub const SUPPORTED_VERSION: u32 = 1;

/// Built-in document with the default portfolio content.
pub const BUILTIN_SEED_JSON: &str = include_str!("../seeds/portfolio.json");

/// A validated seed document.
///
/// # Example
///
/// ```
/// use portfolio_seed::SeedDocument;
///
/// let json = r#"{
///     "version": 1,
///     "aboutMe": {"id": "1", "name": "Ada", "email": "ada@example.com",
///                 "location": "London", "availability": "Open", "content": "Hi"},
///     "projects": [],
///     "skills": [{"id": "1", "name": "Rust", "level": 80}],
///     "experience": [],
///     "contactInfo": {"id": "1", "email": "ada@example.com", "linkedinUrl": "",
///                     "githubUrl": "", "instagramUrl": "", "availabilityStatus": "Open"},
///     "heroSection": {"id": "1", "headline": "Hello", "description": "World",
///                     "profilePictureUrl": "/avatar.png"}
/// }"#;
///
/// let document = SeedDocument::from_json(json).expect("valid document");
/// assert_eq!(document.skills().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDocument {
    about_me: AboutMeSeed,
    projects: Vec<ProjectSeed>,
    skills: Vec<SkillSeed>,
    experience: Vec<ExperienceSeed>,
    contact_info: ContactInfoSeed,
    hero_section: HeroSectionSeed,
}

impl SeedDocument {
    /// Parses a seed document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if:
    /// - The JSON is malformed or a date is not `YYYY-MM-DD`
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Any identifier is empty or repeated within its collection
    /// - Any skill level exceeds the maximum
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeedDocument =
            serde_json::from_str(json).map_err(|e| SeedError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path).map_err(|e| SeedError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Parses the built-in document shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] only if the embedded document has been edited
    /// into an invalid state.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED_JSON)
    }

    fn from_raw(raw: RawSeedDocument) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        validate_singleton_id("aboutMe", &raw.about_me.id)?;
        validate_singleton_id("contactInfo", &raw.contact_info.id)?;
        validate_singleton_id("heroSection", &raw.hero_section.id)?;
        validate_ids("projects", raw.projects.iter().map(|p| p.id.as_str()))?;
        validate_ids("skills", raw.skills.iter().map(|s| s.id.as_str()))?;
        validate_ids("experience", raw.experience.iter().map(|e| e.id.as_str()))?;
        validate_skill_levels(&raw.skills)?;

        Ok(Self {
            about_me: raw.about_me,
            projects: raw.projects,
            skills: raw.skills,
            experience: raw.experience,
            contact_info: raw.contact_info,
            hero_section: raw.hero_section,
        })
    }

    /// Returns the about-me record.
    #[must_use]
    pub const fn about_me(&self) -> &AboutMeSeed {
        &self.about_me
    }

    /// Returns the project records in document order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSeed] {
        &self.projects
    }

    /// Returns the skill records in document order.
    #[must_use]
    pub fn skills(&self) -> &[SkillSeed] {
        &self.skills
    }

    /// Returns the experience records in document order.
    #[must_use]
    pub fn experience(&self) -> &[ExperienceSeed] {
        &self.experience
    }

    /// Returns the contact-info record.
    #[must_use]
    pub const fn contact_info(&self) -> &ContactInfoSeed {
        &self.contact_info
    }

    /// Returns the hero banner record.
    #[must_use]
    pub const fn hero_section(&self) -> &HeroSectionSeed {
        &self.hero_section
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSeedDocument {
    version: u32,
    about_me: AboutMeSeed,
    #[serde(default)]
    projects: Vec<ProjectSeed>,
    #[serde(default)]
    skills: Vec<SkillSeed>,
    #[serde(default)]
    experience: Vec<ExperienceSeed>,
    contact_info: ContactInfoSeed,
    hero_section: HeroSectionSeed,
}
