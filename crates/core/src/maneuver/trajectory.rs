//! Roll/pitch trajectory synthesis
//!
//! The roll trajectory starts from a cosine of the maneuver phase,
//!
//! ```text
//! θ        = 2π · f · t,   f = 1/20 Hz
//! roll_raw = cos(θ) · 18000 cd
//! ```
//!
//! and keeps only its sign: negative values command -170°, zero and positive
//! values command +10°. The command flips at the quarter periods
//! (t = 5 s, 15 s, 25 s, ...).
//!
//! Elapsed time is never re-based, so the phase loses resolution as a session
//! runs for a very long time. The phase is evaluated in `f64`, which pushes
//! that horizon far beyond any flight, but nothing wraps it.

use core::f64::consts::TAU;

use super::config::{CIRCLE_FREQUENCY_HZ, PITCH_CD, ROLL_HIGH_CD, ROLL_LOW_CD, THROTTLE_PERCENT};

/// Amplitude of the intermediate roll cosine (centi-degrees).
pub const ROLL_RAW_AMPLITUDE_CD: f64 = 18_000.0;

/// Setpoints produced for one control tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetpointOutput {
    /// Roll command (centi-degrees)
    pub roll_setpoint_cd: i32,
    /// Pitch command (centi-degrees)
    pub pitch_setpoint_cd: i32,
    /// Throttle output (percent)
    pub throttle_percent: f32,
}

/// Maneuver phase angle in radians.
///
/// `frequency_hz * elapsed_s` is formed first so that quarter periods land on
/// exact multiples of π/2.
pub fn phase_angle(elapsed_s: f64, frequency_hz: f64) -> f64 {
    TAU * (frequency_hz * elapsed_s)
}

/// Intermediate roll cosine in centi-degrees. Never commanded directly.
pub fn roll_raw_cd(elapsed_s: f64) -> f64 {
    libm::cos(phase_angle(elapsed_s, CIRCLE_FREQUENCY_HZ)) * ROLL_RAW_AMPLITUDE_CD
}

/// Reduce the roll cosine to one of the two roll commands.
///
/// Zero takes the non-negative branch.
pub fn quantize_roll(roll_raw_cd: f64) -> i32 {
    if roll_raw_cd < 0.0 {
        ROLL_LOW_CD
    } else {
        ROLL_HIGH_CD
    }
}

/// Compute the full setpoint for a mode-relative time (seconds since entry).
pub fn compute_setpoint(elapsed_s: f64) -> SetpointOutput {
    SetpointOutput {
        roll_setpoint_cd: quantize_roll(roll_raw_cd(elapsed_s)),
        pitch_setpoint_cd: PITCH_CD,
        throttle_percent: THROTTLE_PERCENT,
    }
}
