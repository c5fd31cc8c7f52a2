//! Compact token handling
//!
//! Splitting, section decoding, header typing and the walk through nested
//! (`cty: JWT`) tokens.

mod compact;
mod header;
mod nested;

pub use compact::CompactToken;
pub use header::TokenHeader;
pub use nested::{walk, Innermost};
