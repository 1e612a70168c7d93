/// Trait for signing an encoded payload body.
///
/// Implementations are sync since signing is CPU-bound.
pub trait PayloadSigner: Send + Sync {
    /// Sign the exact body bytes. Returns the header value to send.
    fn sign(&self, data: &[u8]) -> String;

    /// Name of the request header carrying the signature.
    fn header_name(&self) -> &str;

    /// Algorithm identifier string (e.g. "hmac-sha256").
    fn algorithm(&self) -> &str;
}
