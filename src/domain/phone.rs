//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// ISO 3166-1 alpha-2 region used to interpret numbers written without a
/// `+` country prefix.
pub type PhoneRegion = phonenumber::country::Id;

/// Country calling codes are at most three digits.
const MAX_CALLING_CODE: u16 = 999;

/// A type-safe wrapper for phone numbers.
///
/// Plausibility is decided by the `phonenumber` crate (libphonenumber
/// metadata): the number must parse and be a valid number for its region.
/// With no region configured, a number typed without a `+` prefix is accepted
/// if it is valid as a national number of any region. The trimmed input is kept as typed; [`PhoneNumber::e164`] gives the
/// canonical form.
///
/// # Example
///
/// ```
/// use contact_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 415-555-2671", None).unwrap();
/// assert_eq!(phone.as_str(), "+1 415-555-2671");
/// assert_eq!(phone.e164(), "+14155552671");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    raw: String,
    e164: String,
}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating plausibility.
    ///
    /// A number starting with `+` is read as international. Otherwise it is
    /// read as national to `region`, or, without a `region`, to whichever
    /// country calling code makes it valid (lowest code first).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not parse or
    /// is not valid for its region.
    pub fn new(phone: impl AsRef<str>, region: Option<PhoneRegion>) -> Result<Self, ValidationError> {
        let trimmed = phone.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidPhone);
        }

        let parsed = match phonenumber::parse(region, trimmed) {
            Ok(number) if phonenumber::is_valid(&number) => Some(number),
            _ if region.is_none() && !trimmed.starts_with('+') => Self::parse_any_region(trimmed),
            _ => None,
        }
        .ok_or(ValidationError::InvalidPhone)?;

        let e164 = parsed
            .format()
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self {
            raw: trimmed.to_string(),
            e164,
        })
    }

    /// Try a national number against every country calling code, also
    /// without a leading trunk prefix `0`.
    fn parse_any_region(national: &str) -> Option<phonenumber::PhoneNumber> {
        if !national.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let without_trunk = national.strip_prefix('0');
        (1..=MAX_CALLING_CODE).find_map(|code| {
            std::iter::once(national)
                .chain(without_trunk)
                .filter_map(|candidate| phonenumber::parse(None, format!("+{} {}", code, candidate)).ok())
                .find(|number| phonenumber::is_valid(number))
        })
    }

    /// Get the phone number as typed (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the number in E.164 form, e.g. `+14155552671`.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
