use std::ops::ControlFlow;

use serde_json::{Map, Value};

use super::JwtBuiltins;
use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::claims::ClaimsValidator;
use crate::constraints::VerificationConstraints;
use crate::error::{Error, Rejection, Result};
use crate::keys::Key;
use crate::token::{self, CompactToken, TokenHeader};
use crate::utils::json;

/// Result of `io.jwt.decode_verify`
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub valid: bool,
    /// Innermost header, empty unless valid
    pub header: Value,
    /// Innermost claims, empty unless valid
    pub payload: Value,
}

impl Verification {
    fn rejected(reason: Rejection) -> Self {
        tracing::debug!(%reason, "token rejected");
        Self {
            valid: false,
            header: Value::Object(Map::new()),
            payload: Value::Object(Map::new()),
        }
    }

    /// `[valid, header, payload]`
    pub fn into_value(self) -> Value {
        Value::Array(vec![Value::Bool(self.valid), self.header, self.payload])
    }
}

impl JwtBuiltins {
    /// `io.jwt.decode_verify`: decode a token and check it against constraints
    ///
    /// Every level of a nested token must carry a valid header, match the
    /// `alg` constraint and verify with the constraint key. Claims are only
    /// checked on the innermost payload, at the `time` constraint or the
    /// clock's current time.
    pub fn decode_verify(&self, token: &str, constraints: &Value) -> Result<Verification> {
        let constraints = VerificationConstraints::parse(constraints)?;
        let key = constraints.key()?;
        tracing::debug!(key_type = key.key_type(), "verifying token");

        let walked = token::walk(token, &self.config, |compact, header| {
            check_level(compact, header, &constraints, &key)
        })?;
        let innermost = match walked {
            ControlFlow::Continue(innermost) => innermost,
            ControlFlow::Break(reason) => return Ok(Verification::rejected(reason)),
        };

        let claims = json::parse_object(&innermost.payload)?;
        let now_ns = constraints.time.unwrap_or_else(|| self.now_ns() as f64);
        if let Some(reason) = ClaimsValidator::new(&constraints, now_ns).validate(&claims)? {
            return Ok(Verification::rejected(reason));
        }

        tracing::debug!("token verified");
        Ok(Verification {
            valid: true,
            header: innermost.header.into_value(),
            payload: Value::Object(claims),
        })
    }
}

/// Header and signature checks for one level of the token
fn check_level(
    compact: &CompactToken<'_>,
    header: &TokenHeader,
    constraints: &VerificationConstraints,
    key: &Key,
) -> Result<ControlFlow<Rejection>> {
    if !header.is_valid() {
        return Ok(ControlFlow::Break(if header.has_critical() {
            Rejection::CriticalHeader
        } else {
            Rejection::MissingAlgorithm
        }));
    }

    let alg = header.algorithm_str().unwrap_or_default();
    if let Some(expected) = constraints.alg.as_deref() {
        if expected != alg {
            return Ok(ControlFlow::Break(Rejection::AlgorithmMismatch {
                expected: expected.to_string(),
                found: alg.to_string(),
            }));
        }
    }

    let Ok(algorithm) = AlgorithmId::from_str(alg) else {
        return Ok(ControlFlow::Break(Rejection::UnverifiableAlgorithm(
            alg.to_string(),
        )));
    };

    let signature = compact.decode_signature()?;
    match get_algorithm(algorithm).verify(compact.signing_input(), &signature, key) {
        Ok(()) => Ok(ControlFlow::Continue(())),
        Err(Error::SignatureInvalid) => Ok(ControlFlow::Break(Rejection::BadSignature)),
        Err(Error::KeyTypeMismatch { algorithm, .. }) => {
            Ok(ControlFlow::Break(Rejection::KeyMismatch(algorithm)))
        }
        Err(err) => Err(err),
    }
}
