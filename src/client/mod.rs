//! HTTP client for dispatching submissions to the spreadsheet web app.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. A submission is sent as a single
//! `multipart/form-data` POST. The receiver's response is treated as opaque: any
//! HTTP status means the request went out, and only transport failures are errors.

mod async_wrapper;
pub mod multipart;

pub use async_wrapper::{AsyncSubmissionClient, SubmissionTransport};
pub use multipart::MultipartBody;

use crate::config::Config;
use crate::domain::FieldCase;
use crate::error::{TransportError, TransportResult};
use crate::form::ContactSubmission;
use crate::metrics::{DispatchTimer, Metrics};
use std::sync::Arc;

/// HTTP client for the submission endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. No retry and no
/// timeout beyond ureq's default connect timeout: each call makes exactly one
/// attempt, and a stalled response is waited on indefinitely.
#[derive(Clone)]
pub struct SubmissionClient {
    /// Endpoint URL submissions are POSTed to
    endpoint_url: String,

    /// Payload key casing expected by the endpoint
    field_case: FieldCase,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SubmissionClient {
    /// Create a new SubmissionClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.endpoint_url.clone(), config.field_case)
    }

    /// Create a SubmissionClient for an explicit endpoint (useful for testing).
    pub fn with_endpoint(endpoint_url: String, field_case: FieldCase) -> Self {
        let agent = ureq::AgentBuilder::new().build();

        Self {
            endpoint_url,
            field_case,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Send a submission once.
    ///
    /// Returns `Ok(())` as soon as the endpoint produced any response; the
    /// status and body are not inspected.
    pub fn dispatch(&self, submission: &ContactSubmission) -> TransportResult<()> {
        let timer = DispatchTimer::new(self.metrics.clone());
        let payload = MultipartBody::encode(submission, self.field_case);

        // Field keys and size only; values are personal data
        let keys: Vec<&str> = submission.entries(self.field_case).map(|(key, _)| key).collect();
        tracing::debug!(
            fields = ?keys,
            body_bytes = payload.as_bytes().len(),
            "POST {}",
            self.endpoint_url
        );

        let result = self
            .agent
            .post(&self.endpoint_url)
            .set("Content-Type", &payload.content_type())
            .send_bytes(payload.as_bytes());

        match result {
            Ok(response) => {
                tracing::info!(
                    "POST {} - Dispatched (status: {})",
                    self.endpoint_url,
                    response.status()
                );
                timer.complete();
                Ok(())
            }
            Err(ureq::Error::Status(code, _)) => {
                // Opaque response: the request reached the endpoint
                tracing::info!("POST {} - Dispatched (status: {})", self.endpoint_url, code);
                timer.complete();
                Ok(())
            }
            Err(ureq::Error::Transport(transport)) => {
                let error = Self::map_transport_error(&transport);
                tracing::warn!("POST {} - Error: {}", self.endpoint_url, error);
                timer.complete_with_error();
                Err(error)
            }
        }
    }

    /// Map a ureq transport failure to a TransportError.
    fn map_transport_error(transport: &ureq::Transport) -> TransportError {
        let detail = transport.to_string();
        match transport.kind() {
            ureq::ErrorKind::Dns => TransportError::Dns(detail),
            ureq::ErrorKind::ConnectionFailed => TransportError::ConnectionFailed(detail),
            ureq::ErrorKind::Io => TransportError::Io(detail),
            ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                TransportError::InvalidEndpoint(detail)
            }
            _ => TransportError::Other(detail),
        }
    }
}
