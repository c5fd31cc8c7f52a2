pub mod base64url;
pub mod der;
pub mod json;

pub use base64url::{decode_bytes, encode, encode_bytes};
