//! Error types for the portfolio-seed crate.
//!
//! Seed loading fails either while reading/parsing the document or while
//! validating its contents. Both are reported through [`SeedError`] using
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    IoError {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The document JSON is malformed or missing required fields.
    #[error("invalid seed JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The document version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A record has an empty or whitespace-only identifier.
    #[error("{collection} record at index {index} has an empty id")]
    EmptyId {
        /// Collection holding the record.
        collection: &'static str,
        /// Position of the record within the collection.
        index: usize,
    },

    /// Two records in the same collection share an identifier.
    #[error("{collection} id '{id}' appears more than once")]
    DuplicateId {
        /// Collection holding the records.
        collection: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A skill level exceeds the allowed maximum.
    #[error("skill '{id}' has level {level}, expected at most {max}")]
    SkillLevelOutOfRange {
        /// Identifier of the offending skill.
        id: String,
        /// The submitted level.
        level: u8,
        /// The allowed maximum.
        max: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = SeedError::IoError {
            path: PathBuf::from("/tmp/portfolio.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read seed file at '/tmp/portfolio.json': file not found"
        );
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = SeedError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported seed version: expected 1, found 3"
        );
    }

    #[test]
    fn duplicate_id_formats_correctly() {
        let err = SeedError::DuplicateId {
            collection: "skills",
            id: "7".to_owned(),
        };
        assert_eq!(err.to_string(), "skills id '7' appears more than once");
    }

    #[test]
    fn skill_level_formats_correctly() {
        let err = SeedError::SkillLevelOutOfRange {
            id: "3".to_owned(),
            level: 120,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "skill '3' has level 120, expected at most 100"
        );
    }
}
