//! Contact Form - a validated contact form that forwards each submission to a
//! spreadsheet web app endpoint.
//!
//! The form collects a name, email, phone number and message, validates them
//! field by field, and sends a valid submission as one `multipart/form-data`
//! POST. The endpoint's response is opaque; only whether the request went out
//! is observed.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects and the field set
//! - **form**: Raw fields, per-field errors, the validator and the submission record
//! - **client**: HTTP client, multipart encoding and the async transport seam
//! - **controller**: The `Idle -> Loading -> Submitted` state machine
//! - **view**: Terminal rendering of the current screen
//! - **session**: Interactive line-based front end
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Submission counters

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod session;
pub mod view;

pub use client::{AsyncSubmissionClient, SubmissionClient, SubmissionTransport};
pub use config::Config;
pub use controller::{FormState, SubmissionController, SubmitAttempt, SubmitOutcome};
pub use domain::{Field, FieldCase, ValidationError};
pub use error::{ConfigError, TransportError};
pub use form::{ContactSubmission, FieldErrors, FormFields, FormValidator};
pub use metrics::{Metrics, MetricsSummary};
pub use session::FormSession;
pub use view::Screen;
