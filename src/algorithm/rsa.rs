use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, RsaEncoding, RsaKeyPair, RsaParameters, RsaPublicKeyComponents};

/// RS256 algorithm (RSASSA-PKCS1-v1_5 with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSASSA-PKCS1-v1_5 with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSASSA-PKCS1-v1_5 with SHA-512)
pub struct RS512;

/// PS256 algorithm (RSASSA-PSS with SHA-256)
pub struct PS256;

/// PS384 algorithm (RSASSA-PSS with SHA-384)
pub struct PS384;

/// PS512 algorithm (RSASSA-PSS with SHA-512)
pub struct PS512;

impl Algorithm for RS256 {
    fn name(&self) -> &'static str {
        "RS256"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::RS256, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::RS256, signing_input, key)
    }
}

impl Algorithm for RS384 {
    fn name(&self) -> &'static str {
        "RS384"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::RS384, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::RS384, signing_input, key)
    }
}

impl Algorithm for RS512 {
    fn name(&self) -> &'static str {
        "RS512"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::RS512, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::RS512, signing_input, key)
    }
}

impl Algorithm for PS256 {
    fn name(&self) -> &'static str {
        "PS256"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::PS256, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::PS256, signing_input, key)
    }
}

impl Algorithm for PS384 {
    fn name(&self) -> &'static str {
        "PS384"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::PS384, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::PS384, signing_input, key)
    }
}

impl Algorithm for PS512 {
    fn name(&self) -> &'static str {
        "PS512"
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(AlgorithmId::PS512, signing_input, signature, key)
    }

    fn sign(&self, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
        sign_rsa(AlgorithmId::PS512, signing_input, key)
    }
}

/// Verification parameters; PSS uses MGF1 with the same hash and a salt as
/// long as the digest
fn verification_parameters(algorithm: AlgorithmId) -> &'static RsaParameters {
    match algorithm {
        AlgorithmId::RS384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        AlgorithmId::RS512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        AlgorithmId::PS256 => &signature::RSA_PSS_2048_8192_SHA256,
        AlgorithmId::PS384 => &signature::RSA_PSS_2048_8192_SHA384,
        AlgorithmId::PS512 => &signature::RSA_PSS_2048_8192_SHA512,
        _ => &signature::RSA_PKCS1_2048_8192_SHA256,
    }
}

fn signing_encoding(algorithm: AlgorithmId) -> &'static dyn RsaEncoding {
    match algorithm {
        AlgorithmId::RS384 => &signature::RSA_PKCS1_SHA384,
        AlgorithmId::RS512 => &signature::RSA_PKCS1_SHA512,
        AlgorithmId::PS256 => &signature::RSA_PSS_SHA256,
        AlgorithmId::PS384 => &signature::RSA_PSS_SHA384,
        AlgorithmId::PS512 => &signature::RSA_PSS_SHA512,
        _ => &signature::RSA_PKCS1_SHA256,
    }
}

/// Generic RSA signature verification
fn verify_rsa(
    algorithm: AlgorithmId,
    signing_input: &str,
    signature: &[u8],
    key: &Key,
) -> Result<()> {
    let rsa_key = key.as_rsa(algorithm)?;
    let public_key = RsaPublicKeyComponents {
        n: rsa_key.modulus(),
        e: rsa_key.exponent(),
    };

    public_key
        .verify(
            verification_parameters(algorithm),
            signing_input.as_bytes(),
            signature,
        )
        .map_err(|_| Error::SignatureInvalid)
}

/// Generic RSA signing with a key that carries its private components
fn sign_rsa(algorithm: AlgorithmId, signing_input: &str, key: &Key) -> Result<Vec<u8>> {
    let rsa_key = key.as_rsa(algorithm)?;
    let der = rsa_key
        .private_key_der()?
        .ok_or_else(|| Error::KeyRejected("RSA key has no private components".to_string()))?;
    let key_pair = RsaKeyPair::from_der(&der).map_err(|e| Error::KeyRejected(e.to_string()))?;

    let mut signature = vec![0u8; key_pair.public_modulus_len()];
    key_pair
        .sign(
            signing_encoding(algorithm),
            &SystemRandom::new(),
            signing_input.as_bytes(),
            &mut signature,
        )
        .map_err(|_| Error::SigningFailed("RSA"))?;
    Ok(signature)
}
