//! Time source abstraction for the turn loop budget
//!
//! The turn controller takes its notion of elapsed time through the [`Clock`]
//! trait so that budget checks can be driven deterministically in tests
//! without real delays.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock with its origin at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Controllable clock for tests.
///
/// Time only moves when the test calls [`MockClock::advance`] or
/// [`MockClock::set`]. Clones share the same time, so a test can keep one
/// handle while handing another to the component under test.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    current_ms: Arc<AtomicU64>,
}

impl MockClock {
    /// Create a clock starting at 0 ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time to an absolute value.
    pub fn set(&self, ms: u64) {
        self.current_ms.store(ms, Ordering::Relaxed);
    }

    /// Advance the current time.
    pub fn advance(&self, ms: u64) {
        self.current_ms.fetch_add(ms, Ordering::Relaxed);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_clock_starts_at_zero() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn mock_clock_advances() {
        let clock = MockClock::new();
        clock.advance(250);
        clock.advance(250);
        assert_eq!(clock.now_ms(), 500);

        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn mock_clock_clones_share_time() {
        let clock = MockClock::new();
        let handle = clock.clone();
        handle.advance(75);
        assert_eq!(clock.now_ms(), 75);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
