//! Per-field validation errors.

use crate::domain::{Field, ValidationError};
use std::collections::BTreeMap;

/// Mapping from field to the error currently attached to it.
///
/// Each field's entry is independent; setting or clearing one never touches
/// the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error to a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// Remove the error from a field.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Set or clear a field's error from a single-field check.
    pub fn update(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => self.clear(field),
            Err(error) => self.insert(field, error),
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Iterate `(field, error)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}
