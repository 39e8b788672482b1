//! Response payloads for portfolio records.
//!
//! Keys are camelCase, timestamps RFC 3339 strings and dates `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AboutMe, ContactInfo, Experience, HeroSection, Project, Skill};

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// About-me section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutMeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub availability: String,
    pub content: String,
    pub updated_at: String,
}

impl From<AboutMe> for AboutMeResponse {
    fn from(value: AboutMe) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            email: value.email,
            location: value.location,
            availability: value.availability,
            content: value.content,
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: String,
    pub repo_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(value: Project) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            description: value.description,
            tags: value.tags.into_inner(),
            image_url: value.image_url,
            demo_url: value.demo_url,
            repo_url: value.repo_url,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Skill with proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    #[schema(minimum = 0, maximum = 100)]
    pub level: u8,
    pub updated_at: String,
}

impl From<Skill> for SkillResponse {
    fn from(value: Skill) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            level: value.level.value(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[schema(example = "2021-03-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub updated_at: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(value: Experience) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            company: value.company,
            period: value.period,
            description: value.description,
            start_date: value.start_date.map(format_date),
            end_date: value.end_date.map(format_date),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Contact links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoResponse {
    pub id: String,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_url: String,
    pub availability_status: String,
    pub updated_at: String,
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(value: ContactInfo) -> Self {
        Self {
            id: value.id.into(),
            email: value.email,
            linkedin_url: value.linkedin_url,
            github_url: value.github_url,
            instagram_url: value.instagram_url,
            availability_status: value.availability_status,
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Hero section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionResponse {
    pub id: String,
    pub headline: String,
    pub description: String,
    pub profile_picture_url: String,
    pub updated_at: String,
}

impl From<HeroSection> for HeroSectionResponse {
    fn from(value: HeroSection) -> Self {
        Self {
            id: value.id.into(),
            headline: value.headline,
            description: value.description,
            profile_picture_url: value.profile_picture_url,
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
