use std::convert::Infallible;
use std::ops::ControlFlow;

use serde_json::Value;

use super::JwtBuiltins;
use crate::error::Result;
use crate::token;
use crate::utils::json;

/// Result of `io.jwt.decode`
///
/// For nested tokens this is the innermost token.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    /// Lowercase hex of the signature bytes
    pub signature: String,
}

impl DecodedToken {
    /// `[header, payload, signature]`
    pub fn into_value(self) -> Value {
        Value::Array(vec![
            self.header,
            self.payload,
            Value::String(self.signature),
        ])
    }
}

impl JwtBuiltins {
    /// Decode a token without verifying it
    ///
    /// Nested tokens are followed to the innermost level. The payload must
    /// be a JSON object.
    pub fn decode(&self, token: &str) -> Result<DecodedToken> {
        tracing::debug!(len = token.len(), "decoding token");

        let innermost = match token::walk(token, &self.config, |_, _| {
            Ok(ControlFlow::<Infallible>::Continue(()))
        })? {
            ControlFlow::Continue(innermost) => innermost,
            ControlFlow::Break(never) => match never {},
        };
        let payload = json::parse_object(&innermost.payload)?;

        Ok(DecodedToken {
            header: innermost.header.into_value(),
            payload: Value::Object(payload),
            signature: hex::encode(&innermost.signature),
        })
    }
}
