#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("missing required environment variables: {}", missing.join(", "))]
    Configuration { missing: Vec<String> },
    #[error("unexpected response format: {0}")]
    ResponseFormat(String),
    #[error("submission failed with status {status}: {body}")]
    Submission { status: u16, body: String },
    #[error("failed to reach submission endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode payload: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("failed to initialise signer: {0}")]
    Signing(String),
}

impl SubmitError {
    pub(crate) fn missing(names: &[&str]) -> Self {
        Self::Configuration {
            missing: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}
