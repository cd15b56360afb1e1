//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated parts of a
//! contact submission: person names, email addresses and phone numbers.
//! These value objects provide validation at construction time and prevent
//! invalid data from being represented in the system. It also declares the
//! closed set of form fields.

pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{Field, FieldCase};
pub use name::PersonName;
pub use phone::{PhoneNumber, PhoneRegion};
