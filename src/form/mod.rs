//! Form schema and validation.
//!
//! - **fields**: raw, unvalidated field values as typed by the user
//! - **errors**: per-field validation errors
//! - **validator**: the pure validation function
//! - **submission**: the normalized record produced by a successful validation

pub mod errors;
pub mod fields;
pub mod submission;
pub mod validator;

pub use errors::FieldErrors;
pub use fields::FormFields;
pub use submission::ContactSubmission;
pub use validator::FormValidator;
