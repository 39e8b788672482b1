//! Identifiers for portfolio content records.
//!
//! Seeded records keep whatever identifier the seed document assigns (often
//! short strings such as `"1"`); records created at runtime receive a random
//! UUID v4 token. Either way the identifier is opaque, non-empty, and free of
//! surrounding whitespace.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors returned by [`ContentId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIdValidationError {
    /// Identifier is empty.
    #[error("content id must not be empty")]
    Empty,
    /// Identifier has leading or trailing whitespace.
    #[error("content id must not contain surrounding whitespace")]
    SurroundingWhitespace,
}

/// Opaque identifier for a content record.
///
/// # Examples
/// ```
/// use portfolio_backend::domain::ContentId;
///
/// let seeded = ContentId::new("1").expect("valid id");
/// let fresh = ContentId::random();
/// assert_ne!(seeded, fresh);
/// assert!(ContentId::new(" 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentId(String);

impl ContentId {
    /// Validate and construct a [`ContentId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ContentIdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ContentIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(ContentIdValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }

    /// Generate a fresh identifier that has never been issued before.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentId> for String {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContentId {
    type Error = ContentIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Records stored in an ordered collection and addressed by [`ContentId`].
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> &ContentId;
}
