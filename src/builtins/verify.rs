use super::JwtBuiltins;
use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::CompactToken;

impl JwtBuiltins {
    /// `io.jwt.verify_<alg>`: check a signature with a fixed algorithm
    ///
    /// The header is not consulted. HMAC algorithms take the secret text
    /// verbatim; the others take a PEM certificate, a JWK or a JWK set. A
    /// key of the wrong family is an error, a bad signature is `false`.
    pub fn verify(&self, algorithm: AlgorithmId, token: &str, key: &str) -> Result<bool> {
        let compact = CompactToken::split(token, &self.config)?;
        let key = if algorithm.is_symmetric() {
            Key::symmetric(key.as_bytes())
        } else {
            Key::from_cert_or_jwk(key)?
        };
        let signature = compact.decode_signature()?;

        match get_algorithm(algorithm).verify(compact.signing_input(), &signature, &key) {
            Ok(()) => {
                tracing::debug!(%algorithm, "signature verified");
                Ok(true)
            }
            Err(Error::SignatureInvalid) => {
                tracing::debug!(%algorithm, "signature mismatch");
                Ok(false)
            }
            Err(Error::KeyTypeMismatch { .. }) => Err(Error::IncorrectKeyType),
            Err(err) => Err(err),
        }
    }
}
