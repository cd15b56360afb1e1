//! Raw form field values.

use crate::domain::Field;
use serde::Deserialize;

/// The current, unvalidated contents of the four form inputs.
///
/// Deserializes from a map keyed by either `name` or `Name` style keys;
/// missing keys are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormFields {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Email")]
    pub email: String,

    #[serde(alias = "Phone")]
    pub phone: String,

    #[serde(alias = "Message")]
    pub message: String,
}

impl FormFields {
    /// Empty fields, as shown by a fresh form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Replace the raw value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Whether every field is empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (field, value) in iter {
            fields.set(field, value);
        }
        fields
    }
}
