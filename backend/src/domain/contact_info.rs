//! Contact-info singleton.

use chrono::{DateTime, Utc};

use super::{ContentId, Identified};
use super::changes::overwrite;

/// Public contact links and availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub id: ContentId,
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_url: String,
    pub availability_status: String,
    pub updated_at: DateTime<Utc>,
}

impl Identified for ContactInfo {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Fields submitted when editing contact information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfoChanges {
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub instagram_url: Option<String>,
    pub availability_status: Option<String>,
}

impl ContactInfoChanges {
    pub(crate) fn apply_to(self, contact: &mut ContactInfo, now: DateTime<Utc>) {
        overwrite(&mut contact.email, self.email);
        overwrite(&mut contact.linkedin_url, self.linkedin_url);
        overwrite(&mut contact.github_url, self.github_url);
        overwrite(&mut contact.instagram_url, self.instagram_url);
        overwrite(&mut contact.availability_status, self.availability_status);
        contact.updated_at = now;
    }
}
