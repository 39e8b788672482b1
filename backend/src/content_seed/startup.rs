//! Build the content store from a seed document at startup.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use chrono::{DateTime, Utc};
use mockable::Clock;
use portfolio_seed::{SeedDocument, SeedError};
use thiserror::Error;
use tracing::info;

use crate::content_seed::config::SeedSettings;
use crate::domain::{
    AboutMe, ContactInfo, ContentId, ContentIdValidationError, ContentStore, Experience,
    HeroSection, PortfolioContent, Project, Skill, SkillLevel, SkillLevelError, Tags,
};

/// Errors returned while seeding the content store.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read seed document at {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed document failed to parse or validate.
    #[error("seed document error: {0}")]
    Seed(#[from] SeedError),
    /// A seed id is not a valid content id.
    #[error("{collection} id '{id}' is invalid: {source}")]
    InvalidId {
        /// Collection holding the record.
        collection: &'static str,
        /// The rejected identifier.
        id: String,
        /// Validation failure.
        #[source]
        source: ContentIdValidationError,
    },
    /// A seed skill level is outside the accepted range.
    #[error("skill '{id}' is invalid: {source}")]
    SkillLevel {
        /// Identifier of the skill.
        id: String,
        /// Validation failure.
        #[source]
        source: SkillLevelError,
    },
}

/// Load the configured seed document, or the built-in one when no path is
/// configured.
pub fn load_seed_document(settings: &SeedSettings) -> Result<SeedDocument, StartupSeedingError> {
    match settings.path() {
        Some(path) => {
            let contents = read_seed_file(path)?;
            let document = SeedDocument::from_json(&contents)?;
            info!(path = %path.display(), "loaded seed document");
            Ok(document)
        }
        None => {
            info!(source = "built-in", "loaded seed document");
            Ok(SeedDocument::builtin()?)
        }
    }
}

/// Map seed records into domain records, stamping timestamps with `now`.
///
/// Projects without a creation time are stamped with `now`, so they share
/// one timestamp and keep their seed order when read.
pub fn build_content(
    document: &SeedDocument,
    now: DateTime<Utc>,
) -> Result<PortfolioContent, StartupSeedingError> {
    let about = document.about_me();
    let contact = document.contact_info();
    let hero = document.hero_section();

    let projects = document
        .projects()
        .iter()
        .map(|seed| {
            Ok(Project {
                id: content_id("projects", &seed.id)?,
                title: seed.title.clone(),
                description: seed.description.clone(),
                tags: Tags::new(seed.tags.clone()),
                image_url: seed.image_url.clone(),
                demo_url: seed.demo_url.clone(),
                repo_url: seed.repo_url.clone(),
                created_at: seed.created_at.unwrap_or(now),
                updated_at: now,
            })
        })
        .collect::<Result<Vec<_>, StartupSeedingError>>()?;

    let skills = document
        .skills()
        .iter()
        .map(|seed| {
            let level = SkillLevel::new(seed.level).map_err(|source| {
                StartupSeedingError::SkillLevel {
                    id: seed.id.clone(),
                    source,
                }
            })?;
            Ok(Skill {
                id: content_id("skills", &seed.id)?,
                name: seed.name.clone(),
                level,
                updated_at: now,
            })
        })
        .collect::<Result<Vec<_>, StartupSeedingError>>()?;

    let experience = document
        .experience()
        .iter()
        .map(|seed| {
            Ok(Experience {
                id: content_id("experience", &seed.id)?,
                title: seed.title.clone(),
                company: seed.company.clone(),
                period: seed.period.clone(),
                description: seed.description.clone(),
                start_date: seed.start_date,
                end_date: seed.end_date,
                updated_at: now,
            })
        })
        .collect::<Result<Vec<_>, StartupSeedingError>>()?;

    Ok(PortfolioContent {
        about_me: Some(AboutMe {
            id: content_id("aboutMe", &about.id)?,
            name: about.name.clone(),
            email: about.email.clone(),
            location: about.location.clone(),
            availability: about.availability.clone(),
            content: about.content.clone(),
            updated_at: now,
        }),
        projects,
        skills,
        experience,
        contact_info: Some(ContactInfo {
            id: content_id("contactInfo", &contact.id)?,
            email: contact.email.clone(),
            linkedin_url: contact.linkedin_url.clone(),
            github_url: contact.github_url.clone(),
            instagram_url: contact.instagram_url.clone(),
            availability_status: contact.availability_status.clone(),
            updated_at: now,
        }),
        hero_section: Some(HeroSection {
            id: content_id("heroSection", &hero.id)?,
            headline: hero.headline.clone(),
            description: hero.description.clone(),
            profile_picture_url: hero.profile_picture_url.clone(),
            updated_at: now,
        }),
    })
}

/// Load the configured seed and build a store from it.
///
/// # Examples
///
/// ```rust
/// use mockable::DefaultClock;
/// use portfolio_backend::content_seed::{SeedSettings, seed_content_store};
///
/// let store = seed_content_store(&SeedSettings::default(), &DefaultClock)?;
/// assert!(!store.snapshot()?.projects.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn seed_content_store(
    settings: &SeedSettings,
    clock: &dyn Clock,
) -> Result<ContentStore, StartupSeedingError> {
    let document = load_seed_document(settings)?;
    let content = build_content(&document, clock.utc())?;
    info!(
        projects = content.projects.len(),
        skills = content.skills.len(),
        experience = content.experience.len(),
        "content store seeded"
    );
    Ok(ContentStore::new(content))
}

fn content_id(collection: &'static str, raw: &str) -> Result<ContentId, StartupSeedingError> {
    ContentId::new(raw).map_err(|source| StartupSeedingError::InvalidId {
        collection,
        id: raw.to_owned(),
        source,
    })
}

fn read_seed_file(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    #[rstest]
    fn builtin_document_builds_full_store(now: DateTime<Utc>) {
        let document = SeedDocument::builtin().expect("built-in seed parses");

        let content = build_content(&document, now).expect("content builds");

        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.skills.len(), 12);
        assert_eq!(content.experience.len(), 4);
        assert!(content.projects.iter().all(|p| p.created_at == now));
        let about = content.about_me.expect("about me seeded");
        assert_eq!(about.id.as_str(), "1");
        assert_eq!(about.updated_at, now);
        assert!(content.hero_section.is_some());
        assert!(content.contact_info.is_some());
    }

    #[rstest]
    fn whitespace_ids_are_rejected(now: DateTime<Utc>) {
        let json = portfolio_seed::BUILTIN_SEED_JSON.replacen("\"id\": \"1\"", "\"id\": \" 1\"", 1);
        let document = SeedDocument::from_json(&json).expect("non-empty ids pass seed validation");

        let err = build_content(&document, now).expect_err("whitespace id rejected");
        assert!(matches!(
            err,
            StartupSeedingError::InvalidId {
                collection: "aboutMe",
                ..
            }
        ));
    }

    #[rstest]
    fn missing_seed_file_reports_path() {
        let settings = SeedSettings {
            path: Some(PathBuf::from("/nonexistent/portfolio/seed.json")),
        };

        let err = load_seed_document(&settings).expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/portfolio/seed.json"));
    }
}
