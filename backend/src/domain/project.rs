//! Project collection entries and tag parsing.

use chrono::{DateTime, Utc};

use super::changes::overwrite;
use super::{ContentId, Identified};

/// Image shown for projects created without one.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg?height=400&width=600";

/// Ordered technology tags attached to a project.
///
/// Forms submit tags as a single comma-delimited string; [`Tags::parse`]
/// splits it, trims each element, and drops empty elements while keeping the
/// submitted order.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::Tags;
///
/// let tags = Tags::parse("Go, Rust,  TypeScript,");
/// assert_eq!(tags.as_slice(), ["Go", "Rust", "TypeScript"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Split a comma-delimited tag string.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Wrap tags that are already split.
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Borrow the tags in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the wrapper, returning the tags in order.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub tags: Tags,
    pub image_url: Option<String>,
    pub demo_url: String,
    pub repo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Project {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Fields submitted when adding a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tags: Tags,
    pub demo_url: String,
    pub repo_url: String,
    /// Falls back to [`PLACEHOLDER_IMAGE_URL`] when absent.
    pub image_url: Option<String>,
}

impl NewProject {
    pub(crate) fn into_project(self, id: ContentId, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            image_url: Some(
                self.image_url
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned()),
            ),
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields submitted when editing a project. The image is not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Tags>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

impl ProjectChanges {
    pub(crate) fn apply_to(self, project: &mut Project, now: DateTime<Utc>) {
        overwrite(&mut project.title, self.title);
        overwrite(&mut project.description, self.description);
        overwrite(&mut project.tags, self.tags);
        overwrite(&mut project.demo_url, self.demo_url);
        overwrite(&mut project.repo_url, self.repo_url);
        project.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case("Go, Rust,  TypeScript", &["Go", "Rust", "TypeScript"])]
    #[case("Rust,,  ,Go,", &["Rust", "Go"])]
    #[case("  single  ", &["single"])]
    #[case("", &[])]
    fn parse_splits_and_trims(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(Tags::parse(raw).as_slice(), expected);
    }

    #[rstest]
    fn new_project_defaults_to_placeholder_image() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let project = NewProject {
            title: "CLI".to_owned(),
            description: "A tool".to_owned(),
            tags: Tags::parse("Rust"),
            demo_url: String::new(),
            repo_url: "https://github.com".to_owned(),
            image_url: None,
        }
        .into_project(ContentId::random(), now);

        assert_eq!(project.image_url.as_deref(), Some(PLACEHOLDER_IMAGE_URL));
        assert_eq!(project.created_at, now);
        assert_eq!(project.updated_at, now);
    }
}
