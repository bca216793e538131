//! Time sources
//!
//! The trait and the mock live in `plane_circle_core`; this module adds the
//! Embassy-backed clock used on target.

pub use plane_circle_core::traits::{MockTime, TimeSource};

/// Embassy time driver clock.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

#[cfg(feature = "embassy")]
impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
