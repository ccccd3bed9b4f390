//! Expiry conversion
//!
//! Durations with a whole number of seconds use the second-granular commands
//! (EX, EXPIRE, SETEX); anything finer goes through the millisecond variants
//! (PX, PEXPIRE, PSETEX).

use redis::SetExpiry;
use std::time::Duration;

/// A time-to-live in the unit Redis will receive it in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Whole seconds
    Seconds(u64),
    /// Milliseconds, rounded up so a non-zero duration never becomes zero
    Milliseconds(u64),
}

impl Expiry {
    /// Pick the unit for a duration
    pub fn from_duration(duration: Duration) -> Self {
        if duration.subsec_nanos() == 0 {
            Expiry::Seconds(duration.as_secs())
        } else {
            let millis = duration.as_nanos().div_ceil(1_000_000);
            Expiry::Milliseconds(u64::try_from(millis).unwrap_or(u64::MAX))
        }
    }

    /// Amount as the signed argument EXPIRE and PEXPIRE take
    ///
    /// Saturates at `i64::MAX`: a negative TTL makes Redis delete the key.
    pub fn signed_amount(self) -> i64 {
        let amount = match self {
            Expiry::Seconds(amount) | Expiry::Milliseconds(amount) => amount,
        };
        i64::try_from(amount).unwrap_or(i64::MAX)
    }
}

impl From<Duration> for Expiry {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl From<Expiry> for SetExpiry {
    fn from(expiry: Expiry) -> Self {
        match expiry {
            Expiry::Seconds(secs) => SetExpiry::EX(secs),
            Expiry::Milliseconds(millis) => SetExpiry::PX(millis),
        }
    }
}

/// Blocking-pop timeout in fractional seconds; zero blocks indefinitely
pub(crate) fn blocking_timeout(timeout: Duration) -> f64 {
    timeout.as_secs_f64()
}
