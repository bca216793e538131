//! Circle controller session
//!
//! State captured when the Circle mode is entered and carried from tick to
//! tick. A fresh session is built on every entry.

use crate::maneuver::{detect_roll_wrap, WrapEvent};

/// Per-entry state of the Circle controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSession {
    start_time_ms: u64,
    /// Recorded for a future altitude-floor check; nothing reads it yet.
    starting_altitude_cm: i32,
    previous_roll_angle_cd: i32,
}

impl ControllerSession {
    /// Capture session state at mode entry.
    ///
    /// # Arguments
    ///
    /// * `start_time_ms` - Monotonic timestamp at entry
    /// * `starting_altitude_cm` - Vehicle altitude at entry
    /// * `roll_angle_cd` - Sensed roll angle at entry
    pub fn new(start_time_ms: u64, starting_altitude_cm: i32, roll_angle_cd: i32) -> Self {
        Self {
            start_time_ms,
            starting_altitude_cm,
            previous_roll_angle_cd: roll_angle_cd,
        }
    }

    /// Timestamp captured at entry (milliseconds)
    pub fn start_time_ms(&self) -> u64 {
        self.start_time_ms
    }

    /// Altitude captured at entry (centimeters)
    pub fn starting_altitude_cm(&self) -> i32 {
        self.starting_altitude_cm
    }

    /// Roll angle stored at the end of the last tick (centi-degrees)
    pub fn previous_roll_angle_cd(&self) -> i32 {
        self.previous_roll_angle_cd
    }

    /// Seconds elapsed since entry.
    pub fn elapsed_s(&self, now_ms: u64) -> f64 {
        now_ms.saturating_sub(self.start_time_ms) as f64 / 1000.0
    }

    /// Store this tick's roll sample and check it against the previous one.
    ///
    /// The sample is stored whether or not a wrap is reported.
    pub fn record_roll(&mut self, current_roll_cd: i32, threshold_cd: u32) -> Option<WrapEvent> {
        let event = detect_roll_wrap(self.previous_roll_angle_cd, current_roll_cd, threshold_cd);
        self.previous_roll_angle_cd = current_roll_cd;
        event
    }
}
