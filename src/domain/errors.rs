//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The `Display` output is the exact message shown next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name has fewer than two non-whitespace-padded characters.
    NameTooShort,

    /// The email address does not match the email grammar.
    InvalidEmail,

    /// The phone number is not a plausible number.
    InvalidPhone,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "Name must contain at least 2 characters"),
            Self::InvalidEmail => write!(f, "Email must be of the format example@email.domain"),
            Self::InvalidPhone => write!(f, "Enter a valid phone number"),
        }
    }
}

impl std::error::Error for ValidationError {}
