use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::ApplicationConfig;
use crate::encoding::{CanonicalJsonEncoder, PayloadEncoder};
use crate::error::SubmitError;

/// The application document that gets signed and submitted.
///
/// Built once per run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationPayload {
    pub action_run_link: String,
    pub email: String,
    pub name: String,
    pub repository_link: String,
    pub resume_link: String,
    pub timestamp: String,
}

impl ApplicationPayload {
    /// Collects the payload fields from `config`.
    ///
    /// Fails with a configuration error naming every field that is unset or
    /// empty, not just the first one.
    pub fn from_config(
        config: &ApplicationConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, SubmitError> {
        let fields = [
            ("name", config.name()),
            ("email", config.email()),
            ("resume_link", config.resume_link()),
            ("repository_link", config.repository_link()),
            ("action_run_link", config.action_run_link()),
        ];

        let [
            (_, Some(name)),
            (_, Some(email)),
            (_, Some(resume_link)),
            (_, Some(repository_link)),
            (_, Some(action_run_link)),
        ] = fields
        else {
            let missing: Vec<&str> = fields
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(field, _)| *field)
                .collect();
            return Err(SubmitError::missing(&missing));
        };

        Ok(Self {
            action_run_link: action_run_link.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            repository_link: repository_link.to_string(),
            resume_link: resume_link.to_string(),
            timestamp: format_timestamp(timestamp),
        })
    }

    pub fn to_value(&self) -> Result<serde_json::Value, SubmitError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The canonical JSON bytes: the exact body that is signed and sent.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, SubmitError> {
        CanonicalJsonEncoder.encode(&self.to_value()?)
    }
}

/// RFC 3339, UTC, microsecond precision, `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}
