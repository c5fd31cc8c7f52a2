//! Base64URL encoding/decoding per RFC 4648 §5
//!
//! Encoding never pads. Decoding accepts padded and unpadded input and
//! tolerates non-zero trailing bits, matching what issuers emit in the wild.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine};

use crate::error::Base64Error;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(input)
}

/// Encode a string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes
///
/// An unpadded input whose length is `1 mod 4` can never be valid and is
/// rejected as a whole; other faults report the offset of the first bad byte.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, Base64Error> {
    if !input.ends_with('=') && input.len() % 4 == 1 {
        return Err(Base64Error::IllegalLength(input.to_string()));
    }

    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|e| offset_error(input, e))
}

fn offset_error(input: &str, err: DecodeError) -> Base64Error {
    let offset = match err {
        DecodeError::InvalidByte(offset, _) | DecodeError::InvalidLastSymbol(offset, _) => offset,
        DecodeError::InvalidLength(len) => len.saturating_sub(1),
        DecodeError::InvalidPadding => input.find('=').unwrap_or(input.len()),
    };
    Base64Error::IllegalByte(offset)
}
