use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS256, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_hmac(AlgorithmId::HS256, signing_input, key)
    }
}

impl Algorithm for HS384 {
    fn name(&self) -> &'static str {
        "HS384"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS384, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_hmac(AlgorithmId::HS384, signing_input, key)
    }
}

impl Algorithm for HS512 {
    fn name(&self) -> &'static str {
        "HS512"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_hmac(AlgorithmId::HS512, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_hmac(AlgorithmId::HS512, signing_input, key)
    }
}

fn sign_hmac(algorithm: AlgorithmId, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
    let secret = key.as_symmetric(algorithm)?.as_bytes();
    let input = signing_input.as_bytes();
    match algorithm {
        AlgorithmId::HS384 => mac::<Hmac<Sha384>>(secret, input),
        AlgorithmId::HS512 => mac::<Hmac<Sha512>>(secret, input),
        _ => mac::<Hmac<Sha256>>(secret, input),
    }
}

/// Verify an HMAC signature with constant-time comparison
fn verify_hmac(
    algorithm: AlgorithmId,
    signing_input: &str,
    signature: &[u8],
    key: &Key,
) -> Result<()> {
    let expected_signature = sign_hmac(algorithm, signing_input, key)?;

    if constant_time_eq(signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}

fn mac<M: Mac + KeyInit>(secret: &[u8], input: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        <M as Mac>::new_from_slice(secret).map_err(|_| Error::SigningFailed("HMAC key"))?;
    mac.update(input);
    Ok(mac.finalize().into_bytes().to_vec())
}
