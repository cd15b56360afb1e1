use async_trait::async_trait;
use contact_form::error::{TransportError, TransportResult};
use contact_form::{ContactSubmission, SubmissionTransport};
use std::sync::{Arc, Mutex};

/// In-memory transport that records every dispatched submission.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockTransport {
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
    failures_remaining: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` dispatches with a connection error.
    pub fn failing(count: usize) -> Self {
        let mock = Self::new();
        *mock.failures_remaining.lock().unwrap() = count;
        mock
    }

    /// Number of dispatch calls, failed ones included.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionTransport for MockTransport {
    async fn dispatch(&self, submission: &ContactSubmission) -> TransportResult<()> {
        self.sent.lock().unwrap().push(submission.clone());

        let mut remaining = self.failures_remaining.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(TransportError::ConnectionFailed(
                "mock endpoint unreachable".to_string(),
            ));
        }
        Ok(())
    }
}
