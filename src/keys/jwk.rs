//! JWK (JSON Web Key) struct and conversion

use serde::Deserialize;
use serde_json::Value;

use super::{EcdsaCurve, EcdsaKey, Key, RsaKey, RsaPrivateParts};
use crate::error::{Error, Result};
use crate::utils::{base64url, json};

/// JSON Web Key (JWK) structure
///
/// All members except `kty` are optional so that any key family parses.
/// Which members are required is decided during conversion to [`Key`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Jwk {
    /// Key type (`oct`, `RSA` or `EC`)
    pub kty: Option<String>,
    /// Key ID
    pub kid: Option<String>,
    /// Algorithm
    pub alg: Option<String>,
    // Symmetric key
    /// Shared secret (Base64URL-encoded)
    pub k: Option<String>,
    // RSA fields
    /// RSA modulus (Base64URL-encoded)
    pub n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    pub e: Option<String>,
    /// RSA private exponent, or the EC private scalar (Base64URL-encoded)
    pub d: Option<String>,
    /// First RSA prime factor
    pub p: Option<String>,
    /// Second RSA prime factor
    pub q: Option<String>,
    /// First factor CRT exponent
    pub dp: Option<String>,
    /// Second factor CRT exponent
    pub dq: Option<String>,
    /// First CRT coefficient
    pub qi: Option<String>,
    // ECDSA fields
    /// ECDSA curve name
    pub crv: Option<String>,
    /// ECDSA x coordinate (Base64URL-encoded)
    pub x: Option<String>,
    /// ECDSA y coordinate (Base64URL-encoded)
    pub y: Option<String>,
}

/// Decoder errors surface as the bare decoder message
fn decode_error(err: serde_json::Error) -> Error {
    Error::JsonSyntax(json::describe(&err))
}

/// JSON Web Key Set
#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    /// Keys in the set, in document order
    pub keys: Vec<Jwk>,
}

impl Jwk {
    /// Parse a JWK, or a JWK set whose first key is returned
    pub fn parse_first(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(decode_error)?;

        if value.get("keys").is_some() {
            let set: JwkSet = serde_json::from_value(value).map_err(decode_error)?;
            tracing::trace!(keys = set.keys.len(), "parsed JWK set");
            return set.keys.into_iter().next().ok_or(Error::JwkSetEmpty);
        }

        serde_json::from_value(value).map_err(decode_error)
    }

    /// Convert the JWK to key material
    pub fn to_key(&self) -> Result<Key> {
        let kty = self.kty.as_deref().ok_or(Error::JwkMissingField("kty"))?;
        tracing::debug!(kty, kid = self.kid.as_deref(), "resolving JWK");

        match kty {
            "oct" => Ok(Key::symmetric(required("k", &self.k)?)),
            "RSA" => self.to_rsa_key(),
            "EC" => self.to_ecdsa_key(),
            other => Err(Error::UnsupportedKeyType(other.to_string())),
        }
    }

    /// Convert JWK to RSA Key
    fn to_rsa_key(&self) -> Result<Key> {
        let n = required("n", &self.n)?;
        let e = required("e", &self.e)?;
        let key = RsaKey::public(&n, &e);

        if self.d.is_none() {
            return Ok(Key::Rsa(key));
        }

        let private = RsaPrivateParts {
            d: rsa_component("d", &self.d)?,
            p: rsa_component("p", &self.p)?,
            q: rsa_component("q", &self.q)?,
            dp: rsa_component("dp", &self.dp)?,
            dq: rsa_component("dq", &self.dq)?,
            qi: rsa_component("qi", &self.qi)?,
        };
        Ok(Key::Rsa(key.with_private(private)))
    }

    /// Convert JWK to ECDSA Key
    fn to_ecdsa_key(&self) -> Result<Key> {
        let crv = self.crv.as_deref().ok_or(Error::JwkMissingField("crv"))?;
        let curve =
            EcdsaCurve::from_name(crv).ok_or_else(|| Error::UnsupportedCurve(crv.to_string()))?;

        let x = required("x", &self.x)?;
        let y = required("y", &self.y)?;
        let key = EcdsaKey::public(curve, &x, &y);

        match &self.d {
            Some(d) => Ok(Key::Ecdsa(key.with_private(&field("d", d)?))),
            None => Ok(Key::Ecdsa(key)),
        }
    }
}

fn field(name: &'static str, value: &str) -> Result<Vec<u8>> {
    base64url::decode_bytes(value).map_err(|source| Error::JwkFieldEncoding {
        field: name,
        source,
    })
}

fn required(name: &'static str, value: &Option<String>) -> Result<Vec<u8>> {
    let value = value.as_deref().ok_or(Error::JwkMissingField(name))?;
    field(name, value)
}

fn rsa_component(name: &'static str, value: &Option<String>) -> Result<Vec<u8>> {
    let value = value
        .as_deref()
        .ok_or(Error::JwkMissingRsaComponent(name))?;
    field(name, value)
}
