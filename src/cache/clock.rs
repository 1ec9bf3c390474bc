use chrono::{DateTime, Utc};

/// Wall-clock source for expiry checks.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "mock"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "mock"))]
mod manual {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, TimeZone, Utc};
    use parking_lot::Mutex;

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Arc<Mutex<DateTime<Utc>>>,
    }

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self {
                now: Arc::new(Mutex::new(start)),
            }
        }

        /// Starts at 2026-01-01T00:00:00Z.
        pub fn fixed() -> Self {
            let start = Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default();
            Self::new(start)
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock();
            *now += by;
        }

        pub fn set(&self, to: DateTime<Utc>) {
            *self.now.lock() = to;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock()
        }
    }
}
