//! Contact Form - Main entry point
//!
//! Runs the contact form interactively on the terminal and sends each valid
//! submission to the configured endpoint.

use anyhow::Result;
use contact_form::{
    AsyncSubmissionClient, Config, FormSession, FormValidator, Metrics, SubmissionClient,
    SubmissionController, SubmissionTransport,
};
use std::sync::Arc;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout is the form)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Submissions will be sent to {}", config.endpoint_url);

    let metrics = Metrics::new();
    let client = SubmissionClient::new(&config).with_metrics(metrics.clone());
    let transport = Arc::new(AsyncSubmissionClient::new(client)) as Arc<dyn SubmissionTransport>;
    let validator = FormValidator::new(config.phone_region);
    let controller = SubmissionController::new(transport, validator).with_metrics(metrics.clone());

    let mut session = FormSession::new(BufReader::new(stdin()), stdout());
    let last = session.run(controller).await?;

    let summary = metrics.summary();
    info!(
        final_state = %last.state(),
        dispatched = summary.submissions_dispatched,
        failed = summary.transport_failures,
        rejected = summary.validation_rejections,
        "Contact form session ended"
    );
    Ok(())
}
