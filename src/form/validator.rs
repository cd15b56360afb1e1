//! Field validation.
//!
//! Rules are applied independently per field; there is no cross-field check.

use super::{ContactSubmission, FieldErrors, FormFields};
use crate::domain::{EmailAddress, Field, PersonName, PhoneNumber, PhoneRegion, ValidationError};

/// Validates raw form fields into a [`ContactSubmission`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FormValidator {
    phone_region: Option<PhoneRegion>,
}

impl FormValidator {
    /// Create a validator. `phone_region` pins how national numbers (no `+`
    /// prefix) are read; without it they may belong to any region.
    pub fn new(phone_region: Option<PhoneRegion>) -> Self {
        Self { phone_region }
    }

    pub fn phone_region(&self) -> Option<PhoneRegion> {
        self.phone_region
    }

    /// Check a single field's raw value. `Message` always passes.
    pub fn check_field(&self, field: Field, raw: &str) -> Result<(), ValidationError> {
        match field {
            Field::Name => PersonName::new(raw).map(drop),
            Field::Email => EmailAddress::new(raw).map(drop),
            Field::Phone => PhoneNumber::new(raw, self.phone_region).map(drop),
            Field::Message => Ok(()),
        }
    }

    /// Validate every field.
    ///
    /// Returns the normalized record, or every failing field with its message.
    pub fn validate(&self, fields: &FormFields) -> Result<ContactSubmission, FieldErrors> {
        let name = PersonName::new(&fields.name);
        let email = EmailAddress::new(&fields.email);
        let phone = PhoneNumber::new(&fields.phone, self.phone_region);

        match (name, email, phone) {
            (Ok(name), Ok(email), Ok(phone)) => Ok(ContactSubmission {
                name,
                email,
                phone,
                message: fields.message.clone(),
            }),
            (name, email, phone) => {
                let mut errors = FieldErrors::new();
                if let Err(e) = name {
                    errors.insert(Field::Name, e);
                }
                if let Err(e) = email {
                    errors.insert(Field::Email, e);
                }
                if let Err(e) = phone {
                    errors.insert(Field::Phone, e);
                }
                Err(errors)
            }
        }
    }
}
