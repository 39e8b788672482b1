//! Skill collection entries.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::changes::overwrite;
use super::{ContentId, Identified};

/// Proficiency percentage in the inclusive range `0..=100`.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::SkillLevel;
///
/// assert_eq!(SkillLevel::new(85).map(SkillLevel::value), Ok(85));
/// assert!(SkillLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SkillLevel(u8);

/// Error returned when a skill level is outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("skill level must be between 0 and {max}, got {value}", max = SkillLevel::MAX)]
pub struct SkillLevelError {
    pub value: i64,
}

impl SkillLevel {
    /// Highest allowed level.
    pub const MAX: u8 = 100;

    /// Validate and construct a level.
    pub fn new(value: impl Into<i64>) -> Result<Self, SkillLevelError> {
        let value = value.into();
        match u8::try_from(value) {
            Ok(level) if level <= Self::MAX => Ok(Self(level)),
            _ => Err(SkillLevelError { value }),
        }
    }

    /// The level as a percentage.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A technical skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: ContentId,
    pub name: String,
    pub level: SkillLevel,
    pub updated_at: DateTime<Utc>,
}

impl Identified for Skill {
    fn id(&self) -> &ContentId {
        &self.id
    }
}

/// Fields submitted when adding a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub level: SkillLevel,
}

impl NewSkill {
    pub(crate) fn into_skill(self, id: ContentId, now: DateTime<Utc>) -> Skill {
        Skill {
            id,
            name: self.name,
            level: self.level,
            updated_at: now,
        }
    }
}

/// Fields submitted when editing a skill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
}

impl SkillChanges {
    pub(crate) fn apply_to(self, skill: &mut Skill, now: DateTime<Utc>) {
        overwrite(&mut skill.name, self.name);
        overwrite(&mut skill.level, self.level);
        skill.updated_at = now;
    }
}
