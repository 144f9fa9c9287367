//! Wall-clock sources for event timestamps.

use crate::types::Timestamp;
use chrono::Local;
use parking_lot::Mutex;
use std::sync::Arc;

/// Supplies the timestamp stamped onto each logged event.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Local system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Local::now().naive_local())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to a `MatchState`.
#[derive(Clone, Debug)]
pub struct ManualClock {
    current: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, to: Timestamp) {
        *self.current.lock() = to;
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance(&self, secs: i64) {
        let mut current = self.current.lock();
        *current = current.plus_seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(Timestamp::parse("2024-05-01 10:00:00").unwrap());
        let handle = clock.clone();

        handle.advance(5);
        assert_eq!(clock.now().to_string(), "2024-05-01 10:00:05");

        handle.set(Timestamp::parse("2024-05-02 08:00:00").unwrap());
        assert_eq!(clock.now().to_string(), "2024-05-02 08:00:00");
    }

    #[test]
    fn test_system_clock_has_whole_seconds() {
        let now = SystemClock.now();
        assert_eq!(Timestamp::parse(&now.to_string()).unwrap(), now);
    }
}
