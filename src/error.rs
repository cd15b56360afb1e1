//! Error types for the contact form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation failures live in [`crate::domain::ValidationError`]; they never
//! reach the network layer.

use thiserror::Error;

/// Errors that can occur when dispatching a submission to the endpoint.
///
/// The endpoint's response is opaque, so every variant describes a failure to
/// get the request out, never a status code returned by the receiver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not open a connection to the endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Endpoint host name did not resolve
    #[error("DNS lookup failed: {0}")]
    Dns(String),

    /// Connection dropped while sending the request
    #[error("I/O error while sending request: {0}")]
    Io(String),

    /// Endpoint URL could not be used for a request
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Any other dispatch failure
    #[error("Transport error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with TransportError
pub type TransportResult<T> = Result<T, TransportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
