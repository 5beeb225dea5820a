//! Time source for feed evaluation
//!
//! Boost state depends on "now", so it is read through a `Clock` instead of
//! being captured implicitly. Tests pin it with [`FixedClock`].

use questboost_core::EpochMillis;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    fn now(&self) -> EpochMillis;
}

/// Wall-clock time, re-read on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> EpochMillis {
        EpochMillis::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    pub fn at(now: EpochMillis) -> Self {
        Self {
            millis: AtomicI64::new(now.as_i64()),
        }
    }

    pub fn set(&self, now: EpochMillis) {
        self.millis.store(now.as_i64(), Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> EpochMillis {
        EpochMillis::new(self.millis.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_moves_only_on_request() {
        let clock = FixedClock::at(EpochMillis::new(10));
        assert_eq!(clock.now(), EpochMillis::new(10));
        clock.advance(5);
        assert_eq!(clock.now(), EpochMillis::new(15));
        clock.set(EpochMillis::new(1));
        assert_eq!(clock.now(), EpochMillis::new(1));
    }
}
