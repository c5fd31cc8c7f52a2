mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use traits::{get_algorithm, Algorithm, SignatureAlgorithm};

use crate::error::{Error, Result};

/// Algorithm identifier from a JOSE header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,

    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,

    /// RSASSA-PSS with SHA-256 and MGF1 with SHA-256
    PS256,
    /// RSASSA-PSS with SHA-384 and MGF1 with SHA-384
    PS384,
    /// RSASSA-PSS with SHA-512 and MGF1 with SHA-512
    PS512,

    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
}

impl AlgorithmId {
    /// Every supported algorithm
    pub const ALL: [AlgorithmId; 12] = [
        AlgorithmId::HS256,
        AlgorithmId::HS384,
        AlgorithmId::HS512,
        AlgorithmId::RS256,
        AlgorithmId::RS384,
        AlgorithmId::RS512,
        AlgorithmId::PS256,
        AlgorithmId::PS384,
        AlgorithmId::PS512,
        AlgorithmId::ES256,
        AlgorithmId::ES384,
        AlgorithmId::ES512,
    ];

    /// Parse algorithm string from a JOSE header
    ///
    /// `none` and the empty string are refused as unsupported; any other
    /// unrecognised name is unknown.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "none" => Err(Error::UnsupportedAlgorithm(s.to_string())),
            _ => Self::ALL
                .into_iter()
                .find(|alg| alg.as_str() == s)
                .ok_or_else(|| Error::UnknownAlgorithm(s.to_string())),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
            AlgorithmId::PS256 => "PS256",
            AlgorithmId::PS384 => "PS384",
            AlgorithmId::PS512 => "PS512",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
            AlgorithmId::ES512 => "ES512",
        }
    }

    /// JWK `kty` of the keys this algorithm works with
    pub const fn key_type(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => "oct",
            AlgorithmId::RS256
            | AlgorithmId::RS384
            | AlgorithmId::RS512
            | AlgorithmId::PS256
            | AlgorithmId::PS384
            | AlgorithmId::PS512 => "RSA",
            AlgorithmId::ES256 | AlgorithmId::ES384 | AlgorithmId::ES512 => "EC",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        self.key_type() == "oct"
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
