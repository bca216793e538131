//! Time abstraction for the control loop.
//!
//! The Circle mode measures maneuver time against a monotonic millisecond
//! clock. `TimeSource` hides where that clock comes from so the same mode
//! code runs against Embassy on target and `MockTime` in tests.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// # Example
///
/// ```
/// use plane_circle_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let start = time.now_ms();
/// time.advance_ms(5_000);
/// assert_eq!(time.now_ms() - start, 5_000);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;
}

/// Mock time source with manually controlled progression.
///
/// Time only moves when a test calls [`MockTime::set_ms`] or
/// [`MockTime::advance_ms`], which makes tick-by-tick mode tests
/// deterministic.
#[derive(Clone, Default)]
pub struct MockTime {
    current_ms: Cell<u64>,
}

// Safety: MockTime is only used from single-threaded host tests. The
// Send + Sync bounds exist for the embedded implementations.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the given millisecond timestamp.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Sets the current time in milliseconds.
    pub fn set_ms(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Advances the current time by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get() + ms);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}
