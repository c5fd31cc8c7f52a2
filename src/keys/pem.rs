//! Public keys from PEM-encoded X.509 certificates

use x509_parser::pem::parse_x509_pem;
use x509_parser::public_key::PublicKey;

use super::{EcdsaKey, Key, RsaKey};
use crate::error::{Error, Result};

const PEM_BEGIN: &str = "-----BEGIN";

pub(super) fn looks_like_pem(text: &str) -> bool {
    text.contains(PEM_BEGIN)
}

/// Extract the subject public key of the first PEM block, which must be a
/// certificate
///
/// Certificate validity and chains are not evaluated; the certificate only
/// carries the key.
pub(super) fn public_key_from_certificate(text: &str) -> Result<Key> {
    let start = text.find(PEM_BEGIN).unwrap_or(0);
    let (_, pem) = parse_x509_pem(text[start..].as_bytes()).map_err(|_| Error::PemCertificate)?;
    if pem.label != "CERTIFICATE" {
        return Err(Error::PemCertificate);
    }

    let cert = pem.parse_x509().map_err(|_| Error::PemCertificate)?;
    let parsed = cert
        .public_key()
        .parsed()
        .map_err(|e| Error::UnsupportedCertificateKey(e.to_string()))?;

    match parsed {
        PublicKey::RSA(rsa) => Ok(Key::Rsa(RsaKey::public(rsa.modulus, rsa.exponent))),
        PublicKey::EC(point) => Ok(Key::Ecdsa(EcdsaKey::from_point(point.data())?)),
        _ => Err(Error::UnsupportedCertificateKey(
            cert.public_key().algorithm.algorithm.to_id_string(),
        )),
    }
}
