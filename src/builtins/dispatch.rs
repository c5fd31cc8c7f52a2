//! Name-based dispatch over untyped arguments

use serde_json::{Map, Value};

use super::JwtBuiltins;
use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

const NAMESPACE: &str = "io.jwt.";

/// Every built-in [`JwtBuiltins::call`] answers to
pub const BUILTIN_NAMES: [&str; 16] = [
    "io.jwt.decode",
    "io.jwt.decode_verify",
    "io.jwt.encode_sign",
    "io.jwt.encode_sign_raw",
    "io.jwt.verify_hs256",
    "io.jwt.verify_hs384",
    "io.jwt.verify_hs512",
    "io.jwt.verify_rs256",
    "io.jwt.verify_rs384",
    "io.jwt.verify_rs512",
    "io.jwt.verify_ps256",
    "io.jwt.verify_ps384",
    "io.jwt.verify_ps512",
    "io.jwt.verify_es256",
    "io.jwt.verify_es384",
    "io.jwt.verify_es512",
];

impl JwtBuiltins {
    /// Invoke a built-in by its registered name
    ///
    /// Arguments and results use the host value model: decode yields
    /// `[header, payload, signature]`, decode_verify yields
    /// `[valid, header, payload]`, the verify family yields a boolean and the
    /// signing functions yield the token string.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let op = name
            .strip_prefix(NAMESPACE)
            .ok_or_else(|| Error::UnknownBuiltin(name.to_string()))?;
        tracing::trace!(builtin = name, "dispatching");

        match op {
            "decode" => {
                let [token] = arguments(name, args)?;
                Ok(self.decode(string(token, 1)?)?.into_value())
            }
            "decode_verify" => {
                let [token, constraints] = arguments(name, args)?;
                Ok(self
                    .decode_verify(string(token, 1)?, constraints)?
                    .into_value())
            }
            "encode_sign" => {
                let [header, payload, key] = arguments(name, args)?;
                object(header, 1)?;
                object(payload, 2)?;
                object(key, 3)?;
                Ok(Value::String(self.encode_sign(header, payload, key)?))
            }
            "encode_sign_raw" => {
                let [header, payload, key] = arguments(name, args)?;
                Ok(Value::String(self.encode_sign_raw(
                    string(header, 1)?,
                    string(payload, 2)?,
                    string(key, 3)?,
                )?))
            }
            _ => {
                let algorithm = verify_algorithm(op)
                    .ok_or_else(|| Error::UnknownBuiltin(name.to_string()))?;
                let [token, key] = arguments(name, args)?;
                Ok(Value::Bool(self.verify(
                    algorithm,
                    string(token, 1)?,
                    string(key, 2)?,
                )?))
            }
        }
    }
}

/// `verify_hs256` and friends
fn verify_algorithm(op: &str) -> Option<AlgorithmId> {
    let suffix = op.strip_prefix("verify_")?;
    AlgorithmId::ALL
        .into_iter()
        .find(|alg| alg.as_str().to_ascii_lowercase() == suffix)
}

fn arguments<'a, const N: usize>(name: &str, args: &'a [Value]) -> Result<&'a [Value; N]> {
    args.try_into().map_err(|_| Error::Arity {
        name: name.to_string(),
        expected: N,
        found: args.len(),
    })
}

fn string(value: &Value, position: usize) -> Result<&str> {
    value.as_str().ok_or(Error::OperandType {
        position,
        expected: "string",
    })
}

fn object(value: &Value, position: usize) -> Result<&Map<String, Value>> {
    value.as_object().ok_or(Error::OperandType {
        position,
        expected: "object",
    })
}
