pub mod config;
pub mod encoding;
pub mod error;
pub mod payload;
pub mod signing;
pub mod submit;

use chrono::{DateTime, Utc};

pub use config::ApplicationConfig;
pub use encoding::{CanonicalJsonEncoder, PayloadEncoder};
pub use error::SubmitError;
pub use payload::ApplicationPayload;
pub use signing::{HmacSha256Signer, PayloadSigner};
pub use submit::{Receipt, Submitter};

/// Builds, signs and submits the application stamped with the current time.
pub async fn run(config: &ApplicationConfig) -> Result<Receipt, SubmitError> {
    run_at(config, Utc::now()).await
}

/// Same as [`run`] with a fixed timestamp.
///
/// Configuration is checked in pipeline order: payload fields, then the
/// signing secret, then the submission URL.
pub async fn run_at(
    config: &ApplicationConfig,
    timestamp: DateTime<Utc>,
) -> Result<Receipt, SubmitError> {
    let payload = ApplicationPayload::from_config(config, timestamp)?;
    let signer = HmacSha256Signer::from_config(config)?;
    let submitter = Submitter::from_config(config)?;

    let encoder = CanonicalJsonEncoder;
    let body = encoder.encode(&payload.to_value()?)?;
    tracing::info!(
        url = submitter.url(),
        payload = %String::from_utf8_lossy(&body),
        "Encoded application payload"
    );

    let receipt = submitter
        .submit(&body, encoder.content_type(), &signer)
        .await?;
    tracing::info!(receipt = %receipt, "Submission successful");

    Ok(receipt)
}
