//! Verification constraints accepted by `decode_verify`

use serde_json::Value;

use crate::error::{Error, Result};
use crate::keys::Key;

/// Parsed `decode_verify` constraints
///
/// Certificate and JWK text is resolved to key material while parsing, so a
/// malformed key fails even for tokens that would be rejected anyway.
#[derive(Debug, Clone, Default)]
pub struct VerificationConstraints {
    /// Expected header `alg`
    pub alg: Option<String>,
    /// Key resolved from the `cert` constraint
    pub cert: Option<Key>,
    /// HMAC secret; an empty string counts as absent
    pub secret: Option<String>,
    /// Expected `iss` claim
    pub iss: Option<String>,
    /// Audience the `aud` claim must contain
    pub aud: Option<String>,
    /// Evaluation time in nanoseconds since the epoch
    pub time: Option<f64>,
}

impl VerificationConstraints {
    /// Parse a constraints object
    ///
    /// Unknown members and mistyped values are hard errors. The key source
    /// rule is checked separately by [`key`](Self::key).
    pub fn parse(value: &Value) -> Result<Self> {
        let members = value.as_object().ok_or(Error::ConstraintsNotObject)?;
        let mut constraints = Self::default();

        for (name, value) in members {
            match name.as_str() {
                "alg" => constraints.alg = Some(string_constraint("alg", value)?.to_string()),
                "cert" => {
                    let text = string_constraint("cert", value)?;
                    constraints.cert = Some(Key::from_cert_or_jwk(text)?);
                }
                "secret" => {
                    let secret = string_constraint("secret", value)?;
                    constraints.secret = (!secret.is_empty()).then(|| secret.to_string());
                }
                "iss" => constraints.iss = Some(string_constraint("iss", value)?.to_string()),
                "aud" => constraints.aud = Some(string_constraint("aud", value)?.to_string()),
                "time" => {
                    let time = value.as_f64().ok_or(Error::ConstraintType {
                        name: "time",
                        expected: "number",
                    })?;
                    constraints.time = Some(time);
                }
                other => return Err(Error::UnrecognizedConstraint(other.to_string())),
            }
        }

        Ok(constraints)
    }

    /// The single key the token must be verified with
    pub fn key(&self) -> Result<Key> {
        match (&self.cert, &self.secret) {
            (Some(_), Some(_)) => Err(Error::DuplicateKeyConstraints),
            (Some(cert), None) => Ok(cert.clone()),
            (None, Some(secret)) => Ok(Key::symmetric(secret.as_bytes())),
            (None, None) => Err(Error::NoKeyConstraint),
        }
    }
}

fn string_constraint<'a>(name: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or(Error::ConstraintType {
        name,
        expected: "string",
    })
}
