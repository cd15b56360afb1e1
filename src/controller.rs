//! Submission controller.
//!
//! Owns the form state (`Idle`, `Loading`, `Submitted`), the current field
//! values and the current field errors, and drives the single outbound request.
//!
//! ```text
//! Idle --submit(valid)--> Loading --dispatched--> Submitted
//!   ^                        |
//!   +------transport error---+   (inline notice, fields kept)
//! ```
//!
//! `Submitted` is terminal; [`SubmissionController::restart`] yields a new
//! controller instead of moving this one backwards.

use crate::client::SubmissionTransport;
use crate::domain::Field;
use crate::error::TransportError;
use crate::form::{ContactSubmission, FieldErrors, FormFields, FormValidator};
use crate::metrics::Metrics;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Notice shown above the form after a failed dispatch.
pub const FAILURE_NOTICE: &str = "Your form could not be sent. Please try again.";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Form visible and editable.
    Idle,
    /// A submission is in flight; no edits, no further submits.
    Loading,
    /// Confirmation shown; only restart is possible.
    Submitted,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormState::Idle => write!(f, "idle"),
            FormState::Loading => write!(f, "loading"),
            FormState::Submitted => write!(f, "submitted"),
        }
    }
}

/// Result of a submit event before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed and the controller entered `Loading`.
    Ready(ContactSubmission),
    /// Validation failed; the controller stays `Idle`.
    Invalid(FieldErrors),
    /// The controller was not `Idle`; the event was ignored.
    Busy(FormState),
}

/// Final result of [`SubmissionController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid(FieldErrors),
    Failed(TransportError),
    Busy(FormState),
}

/// State machine for one rendered form instance.
pub struct SubmissionController {
    transport: Arc<dyn SubmissionTransport>,
    validator: FormValidator,
    metrics: Metrics,
    state: FormState,
    fields: FormFields,
    errors: FieldErrors,
    notice: Option<String>,
}

impl SubmissionController {
    /// Create a fresh, empty, `Idle` form.
    pub fn new(transport: Arc<dyn SubmissionTransport>, validator: FormValidator) -> Self {
        Self {
            transport,
            validator,
            metrics: Metrics::new(),
            state: FormState::Idle,
            fields: FormFields::new(),
            errors: FieldErrors::new(),
            notice: None,
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error currently shown next to a field, if any.
    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    /// Inline notice left by a failed dispatch.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Edit a field and re-check only that field.
    ///
    /// Returns `false` and changes nothing unless the form is `Idle`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.state != FormState::Idle {
            debug!(%field, state = %self.state, "Ignoring edit while form is not editable");
            return false;
        }

        self.fields.set(field, value);
        let check = self.validator.check_field(field, self.fields.get(field));
        self.errors.update(field, check);
        debug!(%field, valid = !self.errors.contains(field), "Field updated");
        true
    }

    /// Handle a submit event.
    ///
    /// Re-validates every field from the current values. On success the form
    /// enters `Loading` and the captured submission is returned for dispatch.
    /// Any submit event outside `Idle` is a no-op.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.state != FormState::Idle {
            debug!(state = %self.state, "Ignoring submit while form is busy");
            return SubmitAttempt::Busy(self.state);
        }

        self.notice = None;

        match self.validator.validate(&self.fields) {
            Ok(submission) => {
                self.errors = FieldErrors::new();
                self.state = FormState::Loading;
                debug!("Form entered loading state");
                SubmitAttempt::Ready(submission)
            }
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "Submit blocked by validation");
                self.metrics.record_validation_rejection();
                self.errors = errors.clone();
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Perform the single outbound request for a submission captured by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Success moves to `Submitted`. A transport error returns the form to
    /// `Idle` with its values intact and an inline notice.
    pub async fn dispatch(&mut self, submission: ContactSubmission) -> Result<(), TransportError> {
        if self.state != FormState::Loading {
            warn!(state = %self.state, "Dispatch requested outside loading state");
            return Err(TransportError::Other(format!(
                "form is {}, not loading",
                self.state
            )));
        }

        match self.transport.dispatch(&submission).await {
            Ok(()) => {
                info!("Submission dispatched");
                self.state = FormState::Submitted;
                Ok(())
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                self.state = FormState::Idle;
                self.notice = Some(FAILURE_NOTICE.to_string());
                Err(e)
            }
        }
    }

    /// Validate, then dispatch if valid.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitAttempt::Ready(submission) => match self.dispatch(submission).await {
                Ok(()) => SubmitOutcome::Submitted,
                Err(e) => SubmitOutcome::Failed(e),
            },
            SubmitAttempt::Invalid(errors) => SubmitOutcome::Invalid(errors),
            SubmitAttempt::Busy(state) => SubmitOutcome::Busy(state),
        }
    }

    /// Start over with a fresh, empty form sharing this one's transport,
    /// validator and metrics.
    pub fn restart(self) -> Self {
        debug!(previous = %self.state, "Starting a new form");
        Self::new(self.transport, self.validator).with_metrics(self.metrics)
    }
}
