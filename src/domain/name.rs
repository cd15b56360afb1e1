//! PersonName value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a name, counted after trimming.
pub const MIN_NAME_CHARS: usize = 2;

/// A validated, trimmed person name.
///
/// # Example
///
/// ```
/// use contact_form::domain::PersonName;
///
/// let name = PersonName::new("  Al ").unwrap();
/// assert_eq!(name.as_str(), "Al");
/// assert!(PersonName::new("A").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName from raw input.
    ///
    /// Surrounding whitespace is removed first, so a whitespace-only name fails.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` if fewer than two characters remain.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();

        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = PersonName::new("Al").unwrap();
        assert_eq!(name.as_str(), "Al");
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(PersonName::new(""), Err(ValidationError::NameTooShort));
        assert_eq!(PersonName::new("A"), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_name_whitespace_only_fails() {
        assert!(PersonName::new("   ").is_err());
        assert!(PersonName::new(" A ").is_err());
        assert!(PersonName::new("\t\n").is_err());
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = PersonName::new("  Ada Lovelace  ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // One character, two bytes
        assert!(PersonName::new("é").is_err());
        assert!(PersonName::new("Зо").is_ok());
    }

    #[test]
    fn test_name_serialization() {
        let name = PersonName::new("Al").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Al\"");
    }
}
