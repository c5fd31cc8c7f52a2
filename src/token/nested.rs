//! Walking `cty: JWT` chains down to the innermost token

use std::ops::ControlFlow;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::token::{CompactToken, TokenHeader};

/// The innermost token of a chain
#[derive(Debug, Clone)]
pub struct Innermost {
    pub header: TokenHeader,
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

/// Decode a token and follow its `cty: JWT` chain
///
/// `inspect` sees every level once its header is decoded and before its
/// signature and payload are. Breaking out of it abandons the walk and hands
/// the break value back to the caller. Chains deeper than the configured
/// limit are an error.
pub fn walk<R, F>(token: &str, config: &Config, mut inspect: F) -> Result<ControlFlow<R, Innermost>>
where
    F: FnMut(&CompactToken<'_>, &TokenHeader) -> Result<ControlFlow<R>>,
{
    let mut current = token.to_string();

    for depth in 0..=config.nesting_depth_limit() {
        let compact = CompactToken::split(&current, config)?;
        let header = compact.decode_header()?;
        if let ControlFlow::Break(reason) = inspect(&compact, &header)? {
            return Ok(ControlFlow::Break(reason));
        }

        let signature = compact.decode_signature()?;
        let payload = compact.decode_payload()?;
        if !header.is_nested() {
            return Ok(ControlFlow::Continue(Innermost {
                header,
                payload,
                signature,
            }));
        }

        tracing::trace!(depth, "descending into nested token");
        current = inner_token(&payload);
    }

    Err(Error::NestingTooDeep(config.nesting_depth_limit()))
}

/// Extract the compact token carried by a nested payload
///
/// The payload is either a JSON string holding the token or the token text
/// itself, possibly wrapped in quotes.
fn inner_token(payload: &[u8]) -> String {
    let text = match serde_json::from_slice::<Value>(payload) {
        Ok(Value::String(text)) => text,
        _ => String::from_utf8_lossy(payload).into_owned(),
    };
    text.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}
