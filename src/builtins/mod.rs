//! The `io.jwt.*` built-in functions
//!
//! [`JwtBuiltins`] is the entry point. Each operation is a method; hosts
//! working with untyped arguments go through [`JwtBuiltins::call`].
//!
//! Malformed input is an [`Error`](crate::Error). Tokens that are well
//! formed but fail verification are reported as `false`, with the reason
//! logged at `debug` level.

mod decode;
mod decode_verify;
mod dispatch;
mod encode;
mod verify;

pub use decode::DecodedToken;
pub use decode_verify::Verification;
pub use dispatch::BUILTIN_NAMES;

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;

/// JWT built-in functions bound to a configuration and a time source
///
/// Holds no per-call state and can be shared across evaluation threads.
#[derive(Debug, Clone)]
pub struct JwtBuiltins {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Default for JwtBuiltins {
    fn default() -> Self {
        Self::new()
    }
}

impl JwtBuiltins {
    /// Default limits and the system clock
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the time source used when no `time` constraint is given
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn now_ns(&self) -> i64 {
        self.clock.now_ns()
    }
}
