//! Time source for signature timestamps.
//!
//! Huobi rejects requests whose `Timestamp` parameter drifts too far from
//! server time, and the timestamp is part of the signed payload, so signing is
//! only reproducible when the clock is pinned.

use time::OffsetDateTime;

/// Trait for providing the current UTC instant to the signer.
pub trait Clock: Send + Sync {
    /// Current time in UTC.
    fn now_utc(&self) -> OffsetDateTime;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: OffsetDateTime,
}

impl FixedClock {
    /// Create a clock frozen at `instant`, converted to UTC.
    pub fn new(instant: OffsetDateTime) -> Self {
        Self {
            instant: instant.to_offset(time::UtcOffset::UTC),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> OffsetDateTime {
        self.instant
    }
}
