use crate::config::Config;
use crate::error::{Error, Result, Section};
use crate::token::TokenHeader;
use crate::utils::{base64url, json};

/// A JWS in compact serialization, split but not yet decoded
///
/// Sections are decoded on demand so that each operation can decide which
/// ones it needs and in which order failures surface.
#[derive(Debug, Clone, Copy)]
pub struct CompactToken<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
    signing_input: &'a str,
}

impl<'a> CompactToken<'a> {
    /// Split a token into its three sections
    ///
    /// Five sections is the shape of an encrypted token and is refused as
    /// such; any other count than three is malformed.
    pub fn split(token: &'a str, config: &Config) -> Result<Self> {
        if token.len() > config.token_length_limit() {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: config.token_length_limit(),
            });
        }

        if !token.contains('.') {
            return Err(Error::NoPeriodSeparators);
        }

        let parts: Vec<&str> = token.split('.').collect();
        match parts.as_slice() {
            [header, payload, signature] => Ok(Self {
                header,
                payload,
                signature,
                signing_input: &token[..header.len() + 1 + payload.len()],
            }),
            parts if parts.len() == 5 => Err(Error::JweUnsupported),
            parts => Err(Error::SectionCount(parts.len())),
        }
    }

    /// The data that was signed (`header.payload`)
    pub fn signing_input(&self) -> &'a str {
        self.signing_input
    }

    /// Base64URL header section
    pub fn header_b64(&self) -> &'a str {
        self.header
    }

    /// Base64URL payload section
    pub fn payload_b64(&self) -> &'a str {
        self.payload
    }

    /// Decode and parse the JOSE header
    pub fn decode_header(&self) -> Result<TokenHeader> {
        let bytes = decode_section(Section::Header, self.header)?;
        let fields = json::parse_object(&bytes).map_err(|e| Error::BadHeader(Box::new(e)))?;
        TokenHeader::from_fields(fields)
    }

    /// Decode the payload bytes
    pub fn decode_payload(&self) -> Result<Vec<u8>> {
        decode_section(Section::Payload, self.payload)
    }

    /// Decode the signature bytes
    pub fn decode_signature(&self) -> Result<Vec<u8>> {
        decode_section(Section::Signature, self.signature)
    }
}

fn decode_section(section: Section, text: &str) -> Result<Vec<u8>> {
    base64url::decode_bytes(text).map_err(|source| Error::SectionEncoding { section, source })
}
