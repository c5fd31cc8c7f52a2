//! Limits applied while decoding tokens

/// Default maximum nesting depth for `cty: JWT` tokens
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 8;

/// Default maximum length for an encoded token (64KB)
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Decoding limits
///
/// ```
/// use jwt_builtins::Config;
///
/// let config = Config::new().max_nesting_depth(4).max_token_length(16 * 1024);
/// assert_eq!(config.nesting_depth_limit(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_nesting_depth: usize,
    max_token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

impl Config {
    /// Create a config with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many tokens deep a `cty: JWT` chain may go
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set the maximum encoded token length in bytes
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Maximum nesting depth
    pub fn nesting_depth_limit(&self) -> usize {
        self.max_nesting_depth
    }

    /// Maximum encoded token length in bytes
    pub fn token_length_limit(&self) -> usize {
        self.max_token_length
    }
}
