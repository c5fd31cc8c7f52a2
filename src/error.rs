//! Errors for the JWT built-ins
//!
//! Every variant here is a hard failure that aborts the calling evaluation.
//! Bad signatures and failed claim checks never surface as errors; they are
//! reported as `false` by the operations in [`crate::builtins`].
//!
//! Display strings are part of the external contract and are matched by
//! callers as substrings, so change them with care.

use thiserror::Error;

/// Errors raised by the JWT built-ins
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("encoded JWT had no period separators")]
    NoPeriodSeparators,

    #[error("encoded JWT must have 3 sections, found {0}")]
    SectionCount(usize),

    #[error("JWT is a JWE object, which is not supported")]
    JweUnsupported,

    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("JWT {section} had invalid encoding: {source}")]
    SectionEncoding {
        section: Section,
        source: Base64Error,
    },

    #[error("bad JWT header: {0}")]
    BadHeader(Box<Error>),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Decoder message surfaced without a prefix (raw-mode headers)
    #[error("{0}")]
    JsonSyntax(String),

    #[error("decoded JSON type was not an Object")]
    NotAnObject,

    #[error("nested JWT exceeds maximum depth of {0}")]
    NestingTooDeep(usize),

    // ============================================================================
    // Header and Constraint Errors
    // ============================================================================
    #[error("{0} header: must be a string")]
    HeaderFieldType(&'static str),

    #[error("token constraints must be object")]
    ConstraintsNotObject,

    #[error("unrecognized constraint: {0}")]
    UnrecognizedConstraint(String),

    #[error("{name} constraint: must be a {expected}")]
    ConstraintType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("duplicate key constraints")]
    DuplicateKeyConstraints,

    #[error("no key constraint")]
    NoKeyConstraint,

    #[error("{0} value must be a number")]
    ClaimType(&'static str),

    // ============================================================================
    // Key Material Errors
    // ============================================================================
    #[error("failed to decode PEM block containing certificate")]
    PemCertificate,

    #[error("unsupported public key in certificate: {0}")]
    UnsupportedCertificateKey(String),

    #[error("JWK set contains no keys")]
    JwkSetEmpty,

    #[error("JWK is missing required field: {0}")]
    JwkMissingField(&'static str),

    #[error("JWK is missing RSA private key component: {0}")]
    JwkMissingRsaComponent(&'static str),

    #[error("JWK field `{field}` had invalid encoding: {source}")]
    JwkFieldEncoding {
        field: &'static str,
        source: Base64Error,
    },

    #[error("unsupported JWK key type: {0}")]
    UnsupportedKeyType(String),

    #[error("unsupported elliptic curve: {0}")]
    UnsupportedCurve(String),

    #[error("key rejected: {0}")]
    KeyRejected(String),

    #[error("incorrect public key type")]
    IncorrectKeyType,

    #[error("invalid key type for {algorithm}: expected {expected}, got {actual}")]
    KeyTypeMismatch {
        algorithm: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    // ============================================================================
    // Algorithm and Signing Errors
    // ============================================================================
    #[error("Unknown signature algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unsupported signature algorithm{}", alg_suffix(.0))]
    UnsupportedAlgorithm(String),

    #[error("type is JWT but payload is not JSON")]
    PayloadNotJson,

    #[error("signing failed: {0}")]
    SigningFailed(&'static str),

    /// Internal to the signature engine; operations report `false` instead
    #[error("signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Host Interface Errors
    // ============================================================================
    #[error("unknown built-in function: {0}")]
    UnknownBuiltin(String),

    #[error("{name}: expected {expected} arguments, got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("operand {position} must be {expected}")]
    OperandType {
        position: usize,
        expected: &'static str,
    },
}

fn alg_suffix(alg: &str) -> String {
    if alg.is_empty() {
        String::new()
    } else {
        format!(": {alg}")
    }
}

/// Compact token section named in encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Payload,
    Signature,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Header => f.write_str("header"),
            Section::Payload => f.write_str("payload"),
            Section::Signature => f.write_str("signature"),
        }
    }
}

/// Base64URL decode failures, worded like the classic decoder so callers can
/// match on the offset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("illegal base64 data at input byte {0}")]
    IllegalByte(usize),

    #[error("illegal base64url string: {0}")]
    IllegalLength(String),
}

/// Why a token was reported as invalid rather than failing
///
/// Rejections are soft: they turn into `false` results and are only
/// surfaced through `tracing` events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("header has no alg")]
    MissingAlgorithm,

    #[error("header carries unsupported critical parameters")]
    CriticalHeader,

    #[error("alg {found} does not match constraint {expected}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("alg {0} cannot be verified")]
    UnverifiableAlgorithm(String),

    #[error("key type does not fit {0}")]
    KeyMismatch(&'static str),

    #[error("signature mismatch")]
    BadSignature,

    #[error("iss claim does not match constraint {0}")]
    IssuerMismatch(String),

    #[error("aud claim does not include constraint {0}")]
    AudienceMismatch(String),

    #[error("aud constraint {0} given but token has no aud claim")]
    AudienceMissing(String),

    #[error("token has an aud claim but no aud constraint was given")]
    AudienceUnexpected,

    #[error("token expired at {0}")]
    Expired(f64),

    #[error("token not valid before {0}")]
    NotYetValid(f64),
}

/// Result type alias for the JWT built-ins
pub type Result<T> = std::result::Result<T, Error>;
