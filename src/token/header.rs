use serde_json::{Map, Value};

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

/// JOSE header of a compact token
///
/// The full member set is kept for output; the registered members this
/// crate acts on are lifted out and type-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHeader {
    fields: Map<String, Value>,
    algorithm: Option<String>,
    token_type: Option<String>,
    content_type: Option<String>,
    key_id: Option<String>,
    critical: bool,
}

impl TokenHeader {
    /// Build a header from its decoded JSON members
    ///
    /// `alg`, `typ`, `cty` and `kid` must be strings when present. A header
    /// carrying `enc` belongs to an encrypted token and is refused.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self> {
        if fields.contains_key("enc") {
            return Err(Error::JweUnsupported);
        }

        Ok(Self {
            algorithm: string_member(&fields, "alg")?,
            token_type: string_member(&fields, "typ")?,
            content_type: string_member(&fields, "cty")?,
            key_id: string_member(&fields, "kid")?,
            critical: fields.contains_key("crit"),
            fields,
        })
    }

    /// Raw `alg` value, if present
    pub fn algorithm_str(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// Parse the `alg` value
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(self.algorithm_str().unwrap_or_default())
    }

    /// Get token type (`typ`) if present
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Get content type (`cty`) if present
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get key ID if present
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Whether a `crit` member is present, whatever its content
    pub fn has_critical(&self) -> bool {
        self.critical
    }

    /// A header is usable for verification when it names an algorithm and
    /// asks for no critical extensions
    pub fn is_valid(&self) -> bool {
        self.algorithm.as_deref().is_some_and(|alg| !alg.is_empty()) && !self.critical
    }

    /// Whether the payload is itself a compact token
    pub fn is_nested(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|cty| cty.eq_ignore_ascii_case("JWT"))
    }

    /// All header members
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

fn string_member(fields: &Map<String, Value>, name: &'static str) -> Result<Option<String>> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(Error::HeaderFieldType(name)),
    }
}
