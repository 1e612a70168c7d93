mod json;

pub use json::CanonicalJsonEncoder;

use crate::error::SubmitError;

/// Trait for turning a payload into the exact bytes that get signed and sent.
///
/// The receiving side recomputes the signature over the raw body, so an
/// encoder must be deterministic for a given value.
pub trait PayloadEncoder: Send + Sync {
    /// Encode the payload value.
    fn encode(&self, value: &serde_json::Value) -> Result<Vec<u8>, SubmitError>;

    /// Media type of the encoded body (e.g. "application/json").
    fn content_type(&self) -> &str;
}
