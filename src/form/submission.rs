//! The normalized contact submission record.

use crate::domain::{EmailAddress, Field, FieldCase, PersonName, PhoneNumber};
use serde::Serialize;

/// A validated contact submission.
///
/// Built transiently from the form at submit time, serialized once, and
/// dropped. It is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub message: String,
}

type Accessor = fn(&ContactSubmission) -> &str;

fn name_value(submission: &ContactSubmission) -> &str {
    submission.name.as_str()
}

fn email_value(submission: &ContactSubmission) -> &str {
    submission.email.as_str()
}

fn phone_value(submission: &ContactSubmission) -> &str {
    submission.phone.as_str()
}

fn message_value(submission: &ContactSubmission) -> &str {
    &submission.message
}

/// Wire order and value accessor for every payload field.
const FIELD_ACCESSORS: [(Field, Accessor); 4] = [
    (Field::Name, name_value),
    (Field::Email, email_value),
    (Field::Phone, phone_value),
    (Field::Message, message_value),
];

impl ContactSubmission {
    /// Value carried on the wire for a field.
    pub fn value(&self, field: Field) -> &str {
        FIELD_ACCESSORS
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, accessor)| accessor(self))
            .unwrap_or_default()
    }

    /// All four `(key, value)` payload entries, `message` included even when empty.
    pub fn entries(&self, case: FieldCase) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIELD_ACCESSORS
            .iter()
            .map(move |(field, accessor)| (field.key(case), accessor(self)))
    }
}
