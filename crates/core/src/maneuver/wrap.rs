//! Roll-wrap detection
//!
//! Heuristic rollover detector: a roll reading that jumps by at least the
//! threshold between two ticks is reported. A genuinely fast roll can trip it
//! as well, so events are diagnostics and never feed back into control.

use core::fmt::Write;

use heapless::String;

/// Capacity of a rendered wrap diagnostic.
pub const WRAP_MESSAGE_CAPACITY: usize = 64;

/// A roll jump large enough to look like a ±180° rollover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapEvent {
    /// Roll sample from the previous tick (centi-degrees)
    pub previous_cd: i32,
    /// Roll sample from this tick (centi-degrees)
    pub current_cd: i32,
    /// Absolute change between the two samples (centi-degrees)
    pub change_cd: u32,
}

impl WrapEvent {
    /// Change in degrees.
    pub fn change_deg(&self) -> f64 {
        self.change_cd as f64 * 0.01
    }

    /// Render the diagnostic text sent to the ground station.
    pub fn message(&self) -> String<WRAP_MESSAGE_CAPACITY> {
        let mut text = String::new();
        // Worst case (u32::MAX cd) is 54 chars, well inside the capacity
        let _ = write!(
            text,
            "Roll wrap detected. roll_angle_change = {:.1} deg",
            self.change_deg()
        );
        text
    }
}

/// Compare two consecutive roll samples.
///
/// # Returns
///
/// `Some(WrapEvent)` if `|current - previous| >= threshold_cd`
pub fn detect_roll_wrap(previous_cd: i32, current_cd: i32, threshold_cd: u32) -> Option<WrapEvent> {
    let change_cd = current_cd.abs_diff(previous_cd);

    (change_cd >= threshold_cd).then_some(WrapEvent {
        previous_cd,
        current_cd,
        change_cd,
    })
}
