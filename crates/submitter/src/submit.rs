use std::fmt;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::ApplicationConfig;
use crate::error::SubmitError;
use crate::signing::PayloadSigner;

/// The receipt returned by the endpoint for an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt(Value);

impl Receipt {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(receipt) => f.write_str(receipt),
            other => write!(f, "{other}"),
        }
    }
}

/// Posts a signed body to the submission endpoint. One attempt, no retries.
pub struct Submitter {
    client: reqwest::Client,
    url: String,
}

impl Submitter {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &ApplicationConfig) -> Result<Self, SubmitError> {
        let url = config
            .submission_url()
            .ok_or_else(|| SubmitError::missing(&["SUBMISSION_URL"]))?;
        Ok(Self::new(url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn submit(
        &self,
        body: &[u8],
        content_type: &str,
        signer: &dyn PayloadSigner,
    ) -> Result<Receipt, SubmitError> {
        let signature = signer.sign(body);
        tracing::info!(
            url = %self.url,
            algorithm = signer.algorithm(),
            signature = %signature,
            "Submitting application"
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, content_type)
            .header(signer.header_name(), &signature)
            .body(body.to_vec())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = status.as_u16(), body = %text, "Submission response");

        if status != StatusCode::OK {
            return Err(SubmitError::Submission {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_receipt(&text).ok_or(SubmitError::ResponseFormat(text))
    }
}

/// Extracts the receipt from `{"success": true, "receipt": ...}`.
fn parse_receipt(text: &str) -> Option<Receipt> {
    let response: Value = serde_json::from_str(text).ok()?;
    let response = response.as_object()?;
    if response.get("success") != Some(&Value::Bool(true)) {
        return None;
    }
    response.get("receipt").cloned().map(Receipt)
}
