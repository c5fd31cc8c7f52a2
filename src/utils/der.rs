//! DER encoding for RSA private keys assembled from JWK components
//!
//! The signing backend loads RSA keys from PKCS#1 `RSAPrivateKey` DER, so a
//! JWK private key is re-encoded here using the RustCrypto `der` crate.

use crate::error::{Error, Result};
use der::{asn1::UintRef, Encode, Sequence};

/// RSA private key structure for DER encoding
///
/// RSAPrivateKey ::= SEQUENCE {
///     version           Version,
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER,  -- e
///     privateExponent   INTEGER,  -- d
///     prime1            INTEGER,  -- p
///     prime2            INTEGER,  -- q
///     exponent1         INTEGER,  -- d mod (p-1)
///     exponent2         INTEGER,  -- d mod (q-1)
///     coefficient       INTEGER   -- (inverse of q) mod p
/// }
#[derive(Sequence)]
struct RsaPrivateKey<'a> {
    version: u8,
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
    private_exponent: UintRef<'a>,
    prime1: UintRef<'a>,
    prime2: UintRef<'a>,
    exponent1: UintRef<'a>,
    exponent2: UintRef<'a>,
    coefficient: UintRef<'a>,
}

/// Big-endian components of an RSA private key
#[derive(Debug, Clone, Copy)]
pub struct RsaPrivateComponents<'a> {
    pub n: &'a [u8],
    pub e: &'a [u8],
    pub d: &'a [u8],
    pub p: &'a [u8],
    pub q: &'a [u8],
    pub dp: &'a [u8],
    pub dq: &'a [u8],
    pub qi: &'a [u8],
}

fn uint<'a>(name: &'static str, bytes: &'a [u8]) -> Result<UintRef<'a>> {
    UintRef::new(bytes).map_err(|e| Error::KeyRejected(format!("RSA {name}: {e}")))
}

/// Build PKCS#1 `RSAPrivateKey` DER from its components
pub fn rsa_private_key_der(components: &RsaPrivateComponents<'_>) -> Result<Vec<u8>> {
    let key = RsaPrivateKey {
        version: 0,
        modulus: uint("n", components.n)?,
        public_exponent: uint("e", components.e)?,
        private_exponent: uint("d", components.d)?,
        prime1: uint("p", components.p)?,
        prime2: uint("q", components.q)?,
        exponent1: uint("dp", components.dp)?,
        exponent2: uint("dq", components.dq)?,
        coefficient: uint("qi", components.qi)?,
    };

    key.to_der()
        .map_err(|e| Error::KeyRejected(format!("failed to encode RSA private key: {e}")))
}

/// Strip leading zero octets from a big-endian unsigned integer
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Left-pad a big-endian unsigned integer to `len` octets
///
/// Inputs longer than `len` are returned unchanged.
pub fn left_pad(bytes: &[u8], len: usize) -> Vec<u8> {
    let bytes = if bytes.len() > len {
        strip_leading_zeros(bytes)
    } else {
        bytes
    };
    let mut out = vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(bytes);
    out
}
