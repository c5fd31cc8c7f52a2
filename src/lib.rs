//! # jwt-builtins - JWT functions for policy evaluation
//!
//! The `io.jwt.*` built-in functions of a policy engine: decoding, verifying
//! and signing JSON Web Tokens in compact JWS serialization.
//!
//! ## Overview
//!
//! Policies receive tokens as strings and need to answer two questions: what
//! does the token say, and can it be trusted. [`JwtBuiltins`] answers both
//! with five operations:
//!
//! | Built-in | Method | Result |
//! |---|---|---|
//! | `io.jwt.decode` | [`JwtBuiltins::decode`] | `[header, payload, signature]` |
//! | `io.jwt.verify_<alg>` | [`JwtBuiltins::verify`] | `bool` |
//! | `io.jwt.decode_verify` | [`JwtBuiltins::decode_verify`] | `[valid, header, payload]` |
//! | `io.jwt.encode_sign` | [`JwtBuiltins::encode_sign`] | token |
//! | `io.jwt.encode_sign_raw` | [`JwtBuiltins::encode_sign_raw`] | token |
//!
//! Hosts that pass untyped values use [`JwtBuiltins::call`] with the
//! registered name instead.
//!
//! ## Quick Start
//!
//! ```
//! use jwt_builtins::*;
//! use serde_json::json;
//!
//! let builtins = JwtBuiltins::new().with_clock(FixedClock::from_secs(1_000));
//!
//! let token = builtins.encode_sign(
//!     &json!({"alg": "HS256", "typ": "JWT"}),
//!     &json!({"iss": "issuer", "exp": 2_000}),
//!     &json!({"kty": "oct", "k": "c2VjcmV0"}),
//! )?;
//!
//! let result = builtins.decode_verify(&token, &json!({"secret": "secret", "iss": "issuer"}))?;
//! assert!(result.valid);
//! assert_eq!(result.payload["iss"], "issuer");
//! # Ok::<(), jwt_builtins::Error>(())
//! ```
//!
//! ## Errors versus `false`
//!
//! Malformed input fails the call with an [`Error`]: wrong section counts,
//! bad base64url, header JSON that is not an object, unknown constraints or
//! unusable key text. A well-formed token that does not verify is not an
//! error. It yields `false` (or `valid: false` with empty header and
//! payload), and the [`Rejection`] reason is logged through `tracing` at
//! `debug` level.
//!
//! ## Nested Tokens
//!
//! A header with `cty: JWT` marks a payload that is itself a token. Both
//! `decode` and `decode_verify` follow the chain to the innermost token;
//! `decode_verify` checks the signature of every level with the same key and
//! validates claims on the innermost payload only. Chains are bounded by
//! [`Config::max_nesting_depth`].
//!
//! ## Algorithm Support
//!
//! All algorithms implement the [`Algorithm`](algorithm::Algorithm) trait:
//!
//! - **HMAC**: HS256, HS384, HS512
//! - **RSA PKCS#1 v1.5**: RS256, RS384, RS512
//! - **RSA-PSS**: PS256, PS384, PS512
//! - **ECDSA**: ES256 (P-256), ES384 (P-384), ES512 (P-521)
//!
//! `none` is never accepted. HMAC verification compares in constant time.
//!
//! ## Keys
//!
//! Verification keys are PEM certificates, JWKs or JWK sets; HMAC secrets are
//! plain text. Signing keys are JWKs (`oct`, or `RSA` / `EC` with private
//! members). See [`Key::from_cert_or_jwk`].
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) JSON Web Signature (JWS)
//! - [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517) JSON Web Key (JWK)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518) JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) JSON Web Token (JWT)

// Core modules
pub mod clock;
pub mod config;
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Token decoding and checks
pub mod claims;
pub mod constraints;
pub mod token;

// Built-in functions (main public API)
pub mod builtins;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use builtins::{DecodedToken, JwtBuiltins, Verification, BUILTIN_NAMES};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use constraints::VerificationConstraints;

pub use algorithm::AlgorithmId;
pub use error::{Error, Rejection, Result};
pub use keys::{EcdsaCurve, Key};
pub use token::TokenHeader;
