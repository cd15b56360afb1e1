//! Async wrapper around synchronous SubmissionClient.
//!
//! This module provides an async interface to the synchronous SubmissionClient by using
//! `tokio::task::spawn_blocking` to run the HTTP request on a dedicated thread pool,
//! preventing blocking of the event loop that drives the form.

use crate::client::SubmissionClient;
use crate::error::{TransportError, TransportResult};
use crate::form::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Outbound transport for validated submissions.
///
/// The controller depends on this trait, not on the HTTP client, so tests can
/// substitute an in-memory transport.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send one submission. A single attempt; no retry.
    async fn dispatch(&self, submission: &ContactSubmission) -> TransportResult<()>;
}

/// Async wrapper around synchronous SubmissionClient.
#[derive(Clone)]
pub struct AsyncSubmissionClient {
    client: Arc<SubmissionClient>,
}

impl AsyncSubmissionClient {
    pub fn new(client: SubmissionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &SubmissionClient {
        &self.client
    }
}

#[async_trait]
impl SubmissionTransport for AsyncSubmissionClient {
    async fn dispatch(&self, submission: &ContactSubmission) -> TransportResult<()> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.dispatch(&submission))
            .await
            .map_err(|e| TransportError::Other(format!("Task join error: {}", e)))?
    }
}
