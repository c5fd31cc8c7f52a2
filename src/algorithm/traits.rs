use super::{ecdsa, hmac, rsa, AlgorithmId};
use crate::error::Result;
use crate::keys::Key;

/// Core algorithm trait that all JWS signature algorithms implement
///
/// Different algorithm families (HMAC, RSA, ECDSA) implement this trait.
/// Both directions work on raw signature bytes; Base64URL handling belongs
/// to the compact serialization.
pub trait Algorithm {
    /// The algorithm identifier (e.g., "HS256", "PS384")
    fn name(&self) -> &'static str;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.payload)
    /// * `signature` - The decoded signature bytes
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()>;

    /// Sign the signing input, returning raw signature bytes
    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureAlgorithm = Box<dyn Algorithm + Send + Sync>;

/// Get the signature algorithm for the given algorithm ID
pub fn get_algorithm(algorithm: AlgorithmId) -> SignatureAlgorithm {
    match algorithm {
        AlgorithmId::HS256 => Box::new(hmac::HS256),
        AlgorithmId::HS384 => Box::new(hmac::HS384),
        AlgorithmId::HS512 => Box::new(hmac::HS512),

        AlgorithmId::RS256 => Box::new(rsa::RS256),
        AlgorithmId::RS384 => Box::new(rsa::RS384),
        AlgorithmId::RS512 => Box::new(rsa::RS512),

        AlgorithmId::PS256 => Box::new(rsa::PS256),
        AlgorithmId::PS384 => Box::new(rsa::PS384),
        AlgorithmId::PS512 => Box::new(rsa::PS512),

        AlgorithmId::ES256 => Box::new(ecdsa::ES256),
        AlgorithmId::ES384 => Box::new(ecdsa::ES384),
        AlgorithmId::ES512 => Box::new(ecdsa::ES512),
    }
}
