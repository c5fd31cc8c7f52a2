use serde_json::{Map, Value};

use crate::constraints::VerificationConstraints;
use crate::error::{Error, Rejection, Result};

/// Checks decoded claims against `decode_verify` constraints
///
/// A failed check is a [`Rejection`], not an error. Errors are reserved for
/// claims of the wrong type.
#[derive(Debug, Clone, Copy)]
pub struct ClaimsValidator<'a> {
    constraints: &'a VerificationConstraints,
    now_secs: f64,
}

impl<'a> ClaimsValidator<'a> {
    /// Create a validator evaluating time claims at `now_ns`
    pub fn new(constraints: &'a VerificationConstraints, now_ns: f64) -> Self {
        Self {
            constraints,
            now_secs: now_ns / 1e9,
        }
    }

    /// Run all checks in order: issuer, audience, expiry, not-before
    pub fn validate(&self, claims: &Map<String, Value>) -> Result<Option<Rejection>> {
        if let Some(rejection) = self.check_issuer(claims) {
            return Ok(Some(rejection));
        }
        if let Some(rejection) = self.check_audience(claims) {
            return Ok(Some(rejection));
        }
        self.check_time_window(claims)
    }

    /// `iss` only applies when both the constraint and the claim are present
    fn check_issuer(&self, claims: &Map<String, Value>) -> Option<Rejection> {
        let expected = self.constraints.iss.as_deref()?;
        let claim = claims.get("iss")?;
        tracing::trace!(claim = "iss", "checking issuer");

        match claim {
            Value::String(iss) if iss == expected => None,
            _ => Some(Rejection::IssuerMismatch(expected.to_string())),
        }
    }

    /// A token naming an audience needs a matching `aud` constraint and vice
    /// versa
    fn check_audience(&self, claims: &Map<String, Value>) -> Option<Rejection> {
        match (self.constraints.aud.as_deref(), claims.get("aud")) {
            (None, None) => None,
            (None, Some(_)) => Some(Rejection::AudienceUnexpected),
            (Some(expected), None) => Some(Rejection::AudienceMissing(expected.to_string())),
            (Some(expected), Some(claim)) => {
                tracing::trace!(claim = "aud", "checking audience");
                let matched = match claim {
                    Value::String(aud) => aud == expected,
                    Value::Array(auds) => auds.iter().any(|aud| aud.as_str() == Some(expected)),
                    _ => false,
                };
                (!matched).then(|| Rejection::AudienceMismatch(expected.to_string()))
            }
        }
    }

    fn check_time_window(&self, claims: &Map<String, Value>) -> Result<Option<Rejection>> {
        if let Some(exp) = numeric_claim(claims, "exp")? {
            tracing::trace!(claim = "exp", exp, now = self.now_secs, "checking expiry");
            if self.now_secs >= exp {
                return Ok(Some(Rejection::Expired(exp)));
            }
        }

        if let Some(nbf) = numeric_claim(claims, "nbf")? {
            tracing::trace!(claim = "nbf", nbf, now = self.now_secs, "checking not-before");
            if self.now_secs < nbf {
                return Ok(Some(Rejection::NotYetValid(nbf)));
            }
        }

        Ok(None)
    }
}

fn numeric_claim(claims: &Map<String, Value>, name: &'static str) -> Result<Option<f64>> {
    match claims.get(name) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or(Error::ClaimType(name)),
    }
}
