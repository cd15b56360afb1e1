//! The closed set of contact form fields.

use std::fmt;
use std::str::FromStr;

/// One of the four fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Key casing expected by the receiving endpoint.
///
/// The spreadsheet script this form was built for reads `Name`, `Email`,
/// `Phone` and `Message`, so that is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCase {
    #[default]
    Capitalized,
    Lowercase,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "example@email.domain",
            Field::Phone => "Enter your phone number",
            Field::Message => "Your message for us...",
        }
    }

    /// Whether the field has a validation gate. `Message` is free text.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    /// Key used for this field in the transport payload.
    pub fn key(self, case: FieldCase) -> &'static str {
        match (case, self) {
            (FieldCase::Capitalized, field) => field.label(),
            (FieldCase::Lowercase, Field::Name) => "name",
            (FieldCase::Lowercase, Field::Email) => "email",
            (FieldCase::Lowercase, Field::Phone) => "phone",
            (FieldCase::Lowercase, Field::Message) => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Parse a field name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown field: {}", s.trim()))
    }
}

impl FromStr for FieldCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "capitalized" => Ok(FieldCase::Capitalized),
            "lowercase" => Ok(FieldCase::Lowercase),
            other => Err(format!(
                "Must be 'capitalized' or 'lowercase', got: {}",
                other
            )),
        }
    }
}
