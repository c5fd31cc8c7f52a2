use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, EcdsaKeyPair, EcdsaSigningAlgorithm, UnparsedPublicKey};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

/// ES512 algorithm (ECDSA with P-521 and SHA-512)
pub struct ES512;

impl Algorithm for ES256 {
    fn name(&self) -> &'static str {
        "ES256"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(AlgorithmId::ES256, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(AlgorithmId::ES256, signing_input, key)
    }
}

impl Algorithm for ES384 {
    fn name(&self) -> &'static str {
        "ES384"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(AlgorithmId::ES384, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(AlgorithmId::ES384, signing_input, key)
    }
}

impl Algorithm for ES512 {
    fn name(&self) -> &'static str {
        "ES512"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_ecdsa(AlgorithmId::ES512, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(AlgorithmId::ES512, signing_input, key)
    }
}

/// JWS ECDSA signatures are the fixed-length `R || S` concatenation
/// (RFC 7518 Section 3.4), not ASN.1 DER
fn verification_algorithm(algorithm: AlgorithmId) -> &'static dyn signature::VerificationAlgorithm {
    match algorithm {
        AlgorithmId::ES384 => &signature::ECDSA_P384_SHA384_FIXED,
        AlgorithmId::ES512 => &signature::ECDSA_P521_SHA512_FIXED,
        _ => &signature::ECDSA_P256_SHA256_FIXED,
    }
}

fn signing_algorithm(algorithm: AlgorithmId) -> &'static EcdsaSigningAlgorithm {
    match algorithm {
        AlgorithmId::ES384 => &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        AlgorithmId::ES512 => &signature::ECDSA_P521_SHA512_FIXED_SIGNING,
        _ => &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
    }
}

/// Generic ECDSA signature verification
fn verify_ecdsa(
    algorithm: AlgorithmId,
    signing_input: &str,
    signature: &[u8],
    key: &Key,
) -> Result<()> {
    let ecdsa_key = key.as_ecdsa(algorithm)?;
    let public_key = UnparsedPublicKey::new(verification_algorithm(algorithm), ecdsa_key.point());

    public_key
        .verify(signing_input.as_bytes(), signature)
        .map_err(|_| Error::SignatureInvalid)
}

/// Generic ECDSA signing with a key that carries its private scalar
fn sign_ecdsa(algorithm: AlgorithmId, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
    let ecdsa_key = key.as_ecdsa(algorithm)?;
    let scalar = ecdsa_key
        .private_scalar()
        .ok_or_else(|| Error::KeyRejected("EC key has no private scalar".to_string()))?;

    let key_pair = EcdsaKeyPair::from_private_key_and_public_key(
        signing_algorithm(algorithm),
        scalar,
        ecdsa_key.point(),
    )
    .map_err(|e| Error::KeyRejected(e.to_string()))?;

    let signature = key_pair
        .sign(&SystemRandom::new(), signing_input.as_bytes())
        .map_err(|_| Error::SigningFailed("ECDSA"))?;
    Ok(signature.as_ref().to_vec())
}
