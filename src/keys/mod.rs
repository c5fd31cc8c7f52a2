//! Key material for JWT signing and verification
//!
//! Keys arrive as text: a shared secret, a PEM certificate, a JWK or a JWK
//! set. [`Key::from_cert_or_jwk`] turns the latter three into one of:
//! - Symmetric keys (for HMAC algorithms)
//! - RSA keys, public or with private components
//! - ECDSA keys on P-256, P-384 or P-521, public or with the private scalar

mod jwk;
mod pem;

pub use jwk::{Jwk, JwkSet};

use std::fmt;

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::der::{self, RsaPrivateComponents};

/// Key material resolved from a constraint, an argument or a JWK
#[derive(Clone)]
pub enum Key {
    /// Shared secret for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA key for RS* and PS* algorithms
    Rsa(RsaKey),

    /// Elliptic curve key for ES* algorithms
    Ecdsa(EcdsaKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Resolve a PEM certificate, a JWK or a JWK set into a key
    ///
    /// Text containing a PEM block must hold a `CERTIFICATE`; anything else
    /// is parsed as JSON. A JWK set resolves to its first key.
    pub fn from_cert_or_jwk(text: &str) -> Result<Self> {
        if pem::looks_like_pem(text) {
            pem::public_key_from_certificate(text)
        } else {
            Jwk::parse_first(text)?.to_key()
        }
    }

    /// Key family name as used by the JWK `kty` member
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "oct",
            Key::Rsa(_) => "RSA",
            Key::Ecdsa(_) => "EC",
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self, algorithm: AlgorithmId) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch(algorithm)),
        }
    }

    /// Get as RSA key or return error
    pub fn as_rsa(&self, algorithm: AlgorithmId) -> Result<&RsaKey> {
        match self {
            Key::Rsa(key) => Ok(key),
            _ => Err(self.mismatch(algorithm)),
        }
    }

    /// Get as ECDSA key or return error
    ///
    /// The key's curve must be the one the algorithm is defined over.
    pub fn as_ecdsa(&self, algorithm: AlgorithmId) -> Result<&EcdsaKey> {
        match self {
            Key::Ecdsa(key) if Some(key.curve()) == EcdsaCurve::for_algorithm(algorithm) => Ok(key),
            Key::Ecdsa(key) => Err(Error::KeyTypeMismatch {
                algorithm: algorithm.as_str(),
                expected: algorithm.key_type(),
                actual: key.curve().name(),
            }),
            _ => Err(self.mismatch(algorithm)),
        }
    }

    fn mismatch(&self, algorithm: AlgorithmId) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.as_str(),
            expected: algorithm.key_type(),
            actual: self.key_type(),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Symmetric(key) => key.fmt(f),
            Key::Rsa(key) => key.fmt(f),
            Key::Ecdsa(key) => key.fmt(f),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish()
    }
}

/// RSA key: the public modulus and exponent, plus the private components
/// when the key can sign
#[derive(Clone)]
pub struct RsaKey {
    n: Vec<u8>,
    e: Vec<u8>,
    private: Option<RsaPrivateParts>,
}

#[derive(Clone)]
pub(crate) struct RsaPrivateParts {
    pub(crate) d: Vec<u8>,
    pub(crate) p: Vec<u8>,
    pub(crate) q: Vec<u8>,
    pub(crate) dp: Vec<u8>,
    pub(crate) dq: Vec<u8>,
    pub(crate) qi: Vec<u8>,
}

impl RsaKey {
    /// Create a public RSA key from big-endian modulus and exponent
    pub fn public(n: &[u8], e: &[u8]) -> Self {
        Self {
            n: der::strip_leading_zeros(n).to_vec(),
            e: der::strip_leading_zeros(e).to_vec(),
            private: None,
        }
    }

    pub(crate) fn with_private(mut self, private: RsaPrivateParts) -> Self {
        self.private = Some(private);
        self
    }

    /// Modulus, without leading zero octets
    pub fn modulus(&self) -> &[u8] {
        &self.n
    }

    /// Public exponent, without leading zero octets
    pub fn exponent(&self) -> &[u8] {
        &self.e
    }

    /// Whether the private components are present
    pub fn is_private(&self) -> bool {
        self.private.is_some()
    }

    /// PKCS#1 `RSAPrivateKey` DER, if the key holds private components
    pub(crate) fn private_key_der(&self) -> Result<Option<Vec<u8>>> {
        let Some(private) = &self.private else {
            return Ok(None);
        };
        der::rsa_private_key_der(&RsaPrivateComponents {
            n: &self.n,
            e: &self.e,
            d: &private.d,
            p: &private.p,
            q: &private.q,
            dp: &private.dp,
            dq: &private.dq,
            qi: &private.qi,
        })
        .map(Some)
    }
}

impl fmt::Debug for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKey")
            .field("bits", &(self.n.len() * 8))
            .field("private", &self.is_private())
            .finish()
    }
}

/// Elliptic curve key: the uncompressed public point, plus the private
/// scalar when the key can sign
#[derive(Clone)]
pub struct EcdsaKey {
    curve: EcdsaCurve,
    point: Vec<u8>,
    private: Option<Vec<u8>>,
}

impl EcdsaKey {
    /// Create a public key from affine coordinates, padding each to the
    /// curve's field size
    pub fn public(curve: EcdsaCurve, x: &[u8], y: &[u8]) -> Self {
        let size = curve.field_size();
        let mut point = Vec::with_capacity(1 + 2 * size);
        point.push(0x04); // Uncompressed point marker
        point.extend_from_slice(&der::left_pad(x, size));
        point.extend_from_slice(&der::left_pad(y, size));
        Self {
            curve,
            point,
            private: None,
        }
    }

    /// Create a public key from an uncompressed SEC1 point, inferring the
    /// curve from its length
    pub fn from_point(point: &[u8]) -> Result<Self> {
        let curve = EcdsaCurve::from_point_len(point.len())
            .filter(|_| point.first() == Some(&0x04))
            .ok_or_else(|| {
                Error::UnsupportedCurve(format!("{}-byte public point", point.len()))
            })?;
        Ok(Self {
            curve,
            point: point.to_vec(),
            private: None,
        })
    }

    pub(crate) fn with_private(mut self, d: &[u8]) -> Self {
        self.private = Some(der::left_pad(d, self.curve.field_size()));
        self
    }

    /// The curve this key lives on
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// Uncompressed SEC1 public point (`04 || x || y`)
    pub fn point(&self) -> &[u8] {
        &self.point
    }

    pub(crate) fn private_scalar(&self) -> Option<&[u8]> {
        self.private.as_deref()
    }
}

impl fmt::Debug for EcdsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaKey")
            .field("curve", &self.curve)
            .field("private", &self.private.is_some())
            .finish()
    }
}

/// Supported ECDSA curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// NIST P-521
    P521,
}

impl EcdsaCurve {
    /// Parse a JWK `crv` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "P-256" => Some(EcdsaCurve::P256),
            "P-384" => Some(EcdsaCurve::P384),
            "P-521" => Some(EcdsaCurve::P521),
            _ => None,
        }
    }

    /// JWK `crv` name
    pub fn name(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "P-256",
            EcdsaCurve::P384 => "P-384",
            EcdsaCurve::P521 => "P-521",
        }
    }

    /// Coordinate and scalar size in bytes
    pub fn field_size(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 32,
            EcdsaCurve::P384 => 48,
            EcdsaCurve::P521 => 66,
        }
    }

    fn from_point_len(len: usize) -> Option<Self> {
        [EcdsaCurve::P256, EcdsaCurve::P384, EcdsaCurve::P521]
            .into_iter()
            .find(|curve| 1 + 2 * curve.field_size() == len)
    }

    fn for_algorithm(algorithm: AlgorithmId) -> Option<Self> {
        match algorithm {
            AlgorithmId::ES256 => Some(EcdsaCurve::P256),
            AlgorithmId::ES384 => Some(EcdsaCurve::P384),
            AlgorithmId::ES512 => Some(EcdsaCurve::P521),
            _ => None,
        }
    }
}
