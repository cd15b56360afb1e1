//! Basic metrics instrumentation for submissions.
//!
//! Provides counters and duration tracking for dispatches and validation rejections.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking form submissions.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Requests that left the client (any response counts)
    submissions_dispatched: Arc<AtomicU64>,

    /// Requests that failed at the transport level
    transport_failures: Arc<AtomicU64>,

    /// Submit events blocked by field validation
    validation_rejections: Arc<AtomicU64>,

    /// Total duration of all dispatch attempts in milliseconds
    dispatch_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_dispatched: Arc::new(AtomicU64::new(0)),
            transport_failures: Arc::new(AtomicU64::new(0)),
            validation_rejections: Arc::new(AtomicU64::new(0)),
            dispatch_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a dispatched submission with its duration.
    pub fn record_dispatch(&self, duration: Duration) {
        self.submissions_dispatched.fetch_add(1, Ordering::Relaxed);
        self.dispatch_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed dispatch attempt with its duration.
    pub fn record_transport_failure(&self, duration: Duration) {
        self.transport_failures.fetch_add(1, Ordering::Relaxed);
        self.dispatch_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a submit blocked by validation.
    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_dispatched(&self) -> u64 {
        self.submissions_dispatched.load(Ordering::Relaxed)
    }

    pub fn transport_failures(&self) -> u64 {
        self.transport_failures.load(Ordering::Relaxed)
    }

    pub fn validation_rejections(&self) -> u64 {
        self.validation_rejections.load(Ordering::Relaxed)
    }

    pub fn dispatch_duration_total_ms(&self) -> u64 {
        self.dispatch_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average dispatch duration in milliseconds, over successes and failures.
    pub fn dispatch_duration_avg_ms(&self) -> f64 {
        let total = self.dispatch_duration_total_ms();
        let count = self.submissions_dispatched() + self.transport_failures();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.submissions_dispatched.store(0, Ordering::Relaxed);
        self.transport_failures.store(0, Ordering::Relaxed);
        self.validation_rejections.store(0, Ordering::Relaxed);
        self.dispatch_duration_total_ms.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_dispatched: self.submissions_dispatched(),
            transport_failures: self.transport_failures(),
            validation_rejections: self.validation_rejections(),
            dispatch_duration_total_ms: self.dispatch_duration_total_ms(),
            dispatch_duration_avg_ms: self.dispatch_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub submissions_dispatched: u64,
    pub transport_failures: u64,
    pub validation_rejections: u64,
    pub dispatch_duration_total_ms: u64,
    pub dispatch_duration_avg_ms: f64,
}

/// Helper for timing a dispatch.
pub struct DispatchTimer {
    start: Instant,
    metrics: Metrics,
}

impl DispatchTimer {
    /// Start timing a dispatch.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record a dispatched submission.
    pub fn complete(self) {
        self.metrics.record_dispatch(self.start.elapsed());
    }

    /// Complete the timing and record a transport failure.
    pub fn complete_with_error(self) {
        self.metrics.record_transport_failure(self.start.elapsed());
    }
}
