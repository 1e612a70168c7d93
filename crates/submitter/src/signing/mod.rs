mod signer;
mod hmac;

pub use signer::PayloadSigner;
pub use self::hmac::{HmacSha256Signer, SIGNATURE_HEADER};
