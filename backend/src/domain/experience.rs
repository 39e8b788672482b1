//! Work experience collection entries.

use chrono::{DateTime, NaiveDate, Utc};

use super::changes::overwrite;
use super::{ContentId, Identified};

/// A role held at a company.
///
/// `start_date` is optional; undated entries sort after dated ones when the
/// collection is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: ContentId,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Experience {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Fields submitted when adding an experience entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl NewExperience {
    pub(crate) fn into_experience(self, id: ContentId, now: DateTime<Utc>) -> Experience {
        Experience {
            id,
            title: self.title,
            company: self.company,
            period: self.period,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            updated_at: now,
        }
    }
}

/// Fields submitted when editing an experience entry.
///
/// The date fields are doubly optional: `Some(None)` clears a stored date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceChanges {
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

impl ExperienceChanges {
    pub(crate) fn apply_to(self, experience: &mut Experience, now: DateTime<Utc>) {
        overwrite(&mut experience.title, self.title);
        overwrite(&mut experience.company, self.company);
        overwrite(&mut experience.period, self.period);
        overwrite(&mut experience.description, self.description);
        overwrite(&mut experience.start_date, self.start_date);
        overwrite(&mut experience.end_date, self.end_date);
        experience.updated_at = now;
    }
}
