use serde::de::IgnoredAny;
use serde_json::{Map, Value};

use super::JwtBuiltins;
use crate::algorithm::get_algorithm;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::TokenHeader;
use crate::utils::{base64url, json};

impl JwtBuiltins {
    /// `io.jwt.encode_sign`: sign structured header and payload with a JWK
    ///
    /// All three values are serialized as canonical JSON (sorted keys) before
    /// signing, so equal inputs always produce the same signing input.
    pub fn encode_sign(&self, header: &Value, payload: &Value, key: &Value) -> Result<String> {
        let header = json::canonical(header)?;
        let payload = json::canonical(payload)?;
        let key = json::canonical(key)?;
        self.encode_sign_raw(&header, &payload, &key)
    }

    /// `io.jwt.encode_sign_raw`: sign header and payload text verbatim
    ///
    /// The payload is only required to be JSON when the header `typ` is
    /// `JWT`.
    pub fn encode_sign_raw(&self, header: &str, payload: &str, key: &str) -> Result<String> {
        let key = Key::from_cert_or_jwk(key)?;

        let fields: Map<String, Value> =
            serde_json::from_str(header).map_err(|e| Error::JsonSyntax(json::describe(&e)))?;
        let parsed = TokenHeader::from_fields(fields)?;

        let algorithm = match parsed.parse_algorithm() {
            Err(Error::UnknownAlgorithm(alg)) => return Err(Error::UnknownAlgorithm(alg)),
            other => other,
        };

        if parsed.token_type() == Some("JWT") && serde_json::from_str::<IgnoredAny>(payload).is_err()
        {
            return Err(Error::PayloadNotJson);
        }

        let algorithm = algorithm?;
        tracing::debug!(%algorithm, key_type = key.key_type(), "signing token");

        let signing_input = format!(
            "{}.{}",
            base64url::encode(header),
            base64url::encode(payload)
        );
        let signature = get_algorithm(algorithm).sign(&signing_input, &key)?;

        Ok(format!(
            "{signing_input}.{}",
            base64url::encode_bytes(&signature)
        ))
    }
}
