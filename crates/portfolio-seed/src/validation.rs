//! Structural checks applied to a parsed seed document.
//!
//! # Validation Rules
//!
//! - Identifiers must not be empty or whitespace-only
//! - Identifiers must be unique within a collection
//! - Skill levels must not exceed [`MAX_SKILL_LEVEL`]

use std::collections::HashSet;

use crate::error::SeedError;
use crate::records::SkillSeed;

/// Highest proficiency percentage a skill may carry.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Checks that every identifier is present and unique within `collection`.
pub(crate) fn validate_ids<'a>(
    collection: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.into_iter().enumerate() {
        if id.trim().is_empty() {
            return Err(SeedError::EmptyId { collection, index });
        }
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

/// Checks that a singleton identifier is present.
pub(crate) fn validate_singleton_id(collection: &'static str, id: &str) -> Result<(), SeedError> {
    validate_ids(collection, [id])
}

pub(crate) fn validate_skill_levels(skills: &[SkillSeed]) -> Result<(), SeedError> {
    match skills.iter().find(|skill| skill.level > MAX_SKILL_LEVEL) {
        Some(skill) => Err(SeedError::SkillLevelOutOfRange {
            id: skill.id.clone(),
            level: skill.level,
            max: MAX_SKILL_LEVEL,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn skill(id: &str, level: u8) -> SkillSeed {
        SkillSeed {
            id: id.to_owned(),
            name: "Rust".to_owned(),
            level,
        }
    }

    #[rstest]
    #[case::empty(vec!["1", ""], SeedError::EmptyId { collection: "projects", index: 1 })]
    #[case::whitespace(vec!["  "], SeedError::EmptyId { collection: "projects", index: 0 })]
    #[case::duplicate(
        vec!["1", "2", "1"],
        SeedError::DuplicateId { collection: "projects", id: "1".to_owned() }
    )]
    fn rejects_bad_ids(#[case] ids: Vec<&str>, #[case] expected: SeedError) {
        assert_eq!(validate_ids("projects", ids), Err(expected));
    }

    #[test]
    fn accepts_unique_ids() {
        assert_eq!(validate_ids("skills", ["1", "2", "10"]), Ok(()));
    }

    #[rstest]
    #[case(0)]
    #[case(55)]
    #[case(MAX_SKILL_LEVEL)]
    fn accepts_levels_in_range(#[case] level: u8) {
        assert_eq!(validate_skill_levels(&[skill("1", level)]), Ok(()));
    }

    #[test]
    fn rejects_level_above_maximum() {
        let result = validate_skill_levels(&[skill("1", 90), skill("2", 101)]);
        assert_eq!(
            result,
            Err(SeedError::SkillLevelOutOfRange {
                id: "2".to_owned(),
                level: 101,
                max: MAX_SKILL_LEVEL,
            })
        );
    }
}
