//! View invalidation events published after content writes.

use std::fmt;

/// Path of the public home page.
pub const PUBLIC_HOME_PATH: &str = "/";

/// Dashboard sections, one per record group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentSection {
    AboutMe,
    Projects,
    Skills,
    Experience,
    Contact,
    Hero,
}

impl ContentSection {
    /// Every section, in dashboard navigation order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::AboutMe,
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Contact,
    ];

    /// Path of the dashboard page editing this section.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::AboutMe => "/dashboard/about",
            Self::Projects => "/dashboard/projects",
            Self::Skills => "/dashboard/skills",
            Self::Experience => "/dashboard/experience",
            Self::Contact => "/dashboard/contact",
            Self::Hero => "/dashboard/hero",
        }
    }
}

/// A rendered view that may hold stale content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPath {
    PublicHome,
    Dashboard(ContentSection),
}

impl ViewPath {
    /// The route path of the view.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PublicHome => PUBLIC_HOME_PATH,
            Self::Dashboard(section) => section.dashboard_path(),
        }
    }
}

impl fmt::Display for ViewPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notice that the listed views must be re-rendered.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::{ContentSection, InvalidationEvent, ViewPath};
///
/// let event = InvalidationEvent::for_section(ContentSection::Skills);
/// let paths: Vec<&str> = event.paths().iter().map(|p| p.as_str()).collect();
/// assert_eq!(paths, ["/dashboard/skills", "/"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationEvent {
    section: ContentSection,
    paths: Vec<ViewPath>,
}

impl InvalidationEvent {
    /// Event raised by a write to `section`: its dashboard page and the
    /// public home page.
    pub fn for_section(section: ContentSection) -> Self {
        Self {
            section,
            paths: vec![ViewPath::Dashboard(section), ViewPath::PublicHome],
        }
    }

    /// Section whose write raised the event.
    pub fn section(&self) -> ContentSection {
        self.section
    }

    /// Views to invalidate.
    pub fn paths(&self) -> &[ViewPath] {
        &self.paths
    }
}
