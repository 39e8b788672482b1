//! About-me singleton.

use chrono::{DateTime, Utc};

use super::{ContentId, Identified};
use super::changes::overwrite;

/// Biography block shown on the public site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutMe {
    pub id: ContentId,
    pub name: String,
    pub email: String,
    pub location: String,
    pub availability: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl Identified for AboutMe {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Fields submitted when editing the about-me section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutMeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub content: Option<String>,
}

impl AboutMeChanges {
    pub(crate) fn apply_to(self, about_me: &mut AboutMe, now: DateTime<Utc>) {
        overwrite(&mut about_me.name, self.name);
        overwrite(&mut about_me.email, self.email);
        overwrite(&mut about_me.location, self.location);
        overwrite(&mut about_me.availability, self.availability);
        overwrite(&mut about_me.content, self.content);
        about_me.updated_at = now;
    }
}
