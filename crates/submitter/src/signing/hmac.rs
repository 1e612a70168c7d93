use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::signer::PayloadSigner;
use crate::config::ApplicationConfig;
use crate::error::SubmitError;

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Signature-256";
const SIGNATURE_PREFIX: &str = "sha256=";

/// HMAC-SHA256 signer keyed with a shared secret.
///
/// Signatures are rendered as `sha256=<lowercase hex>`.
#[derive(Clone)]
pub struct HmacSha256Signer {
    mac: HmacSha256,
}

impl HmacSha256Signer {
    pub fn new(secret: &str) -> Result<Self, SubmitError> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| SubmitError::Signing(e.to_string()))?;
        Ok(Self { mac })
    }

    pub fn from_config(config: &ApplicationConfig) -> Result<Self, SubmitError> {
        let secret = config
            .signing_secret()
            .ok_or_else(|| SubmitError::missing(&["SIGNING_SECRET"]))?;
        Self::new(secret)
    }

    /// Check a `sha256=<hex>` header against a body in constant time.
    pub fn verify(&self, data: &[u8], signature: &str) -> bool {
        let Some(digest) = signature.strip_prefix(SIGNATURE_PREFIX) else {
            return false;
        };
        let Ok(expected) = hex::decode(digest) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(data);
        mac.verify_slice(&expected).is_ok()
    }
}

impl PayloadSigner for HmacSha256Signer {
    fn sign(&self, data: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(data);
        format!("{SIGNATURE_PREFIX}{}", hex::encode(mac.finalize().into_bytes()))
    }

    fn header_name(&self) -> &str {
        SIGNATURE_HEADER
    }

    fn algorithm(&self) -> &str {
        "hmac-sha256"
    }
}

// Keeps the key material out of logs.
impl fmt::Debug for HmacSha256Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSha256Signer").finish_non_exhaustive()
    }
}
