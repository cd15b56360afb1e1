//! EmailAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::ValidateEmail;

/// A type-safe wrapper for email addresses.
///
/// The grammar check is delegated to the `validator` crate (HTML5 / RFC 5322
/// style local-part "@" domain rules), applied to the trimmed input. On top of
/// that the domain must be dotted (`email.domain`), with no empty labels.
///
/// # Example
///
/// ```
/// use contact_form::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = email.as_ref().trim();

        if trimmed.is_empty() || !trimmed.validate_email() || !Self::has_dotted_domain(trimmed) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Domain part must contain at least one '.' and no empty labels.
    fn has_dotted_domain(email: &str) -> bool {
        match email.rsplit_once('@') {
            Some((_, domain)) => {
                domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
            }
            None => false,
        }
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
