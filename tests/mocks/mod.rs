//! Shared test doubles.

mod mock_transport;

pub use mock_transport::MockTransport;
