use serde_json::{Map, Value};

use super::PayloadEncoder;
use crate::error::SubmitError;

/// Encodes values as canonical JSON: keys sorted at every level, compact
/// separators, non-ASCII text written as raw UTF-8.
pub struct CanonicalJsonEncoder;

impl PayloadEncoder for CanonicalJsonEncoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, SubmitError> {
        Ok(serde_json::to_vec(&sorted(value))?)
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}

// Rebuilt explicitly so the order holds even if serde_json's map keeps
// insertion order.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sorted(value)))
                    .collect::<Map<_, _>>(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}
