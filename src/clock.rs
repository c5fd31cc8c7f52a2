//! Time source for claims validation
//!
//! Times are nanoseconds since the Unix epoch, the unit of the `time`
//! verification constraint.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current time when no `time` constraint is given
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time in nanoseconds since the Unix epoch
    fn now_ns(&self) -> i64;
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX),
            // Host clock set before 1970
            Err(before) => -i64::try_from(before.duration().as_nanos()).unwrap_or(i64::MAX),
        }
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    /// Pin the clock to whole seconds since the Unix epoch
    pub fn from_secs(secs: i64) -> Self {
        FixedClock(secs.saturating_mul(1_000_000_000))
    }
}

impl Clock for FixedClock {
    fn now_ns(&self) -> i64 {
        self.0
    }
}
