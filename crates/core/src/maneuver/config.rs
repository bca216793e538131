//! Maneuver constants and configuration
//!
//! The flight profile itself is fixed: a 20 s cycle, a -170° / +10° roll
//! pair, 8° pitch and 50 % throttle. Only the wrap diagnostic threshold is
//! configurable, since it never feeds back into the demands.

/// Period of the roll reversal cycle (seconds)
pub const CIRCLE_PERIOD_S: f64 = 20.0;

/// Roll reversal cycle frequency (Hz)
pub const CIRCLE_FREQUENCY_HZ: f64 = 1.0 / CIRCLE_PERIOD_S;

/// Roll command while the cosine is negative (centi-degrees)
pub const ROLL_LOW_CD: i32 = -17_000;

/// Roll command while the cosine is zero or positive (centi-degrees)
pub const ROLL_HIGH_CD: i32 = 1_000;

/// Constant pitch command (centi-degrees, climb bias)
pub const PITCH_CD: i32 = 800;

/// Constant throttle output (percent)
pub const THROTTLE_PERCENT: f32 = 50.0;

/// Largest roll command magnitude the maneuver may issue (centi-degrees).
///
/// Keeps commands 10° clear of the ±180° discontinuity.
pub const MAX_ROLL_COMMAND_CD: u32 = 17_000;

/// Default roll change per tick reported as a wrap (centi-degrees)
pub const DEFAULT_WRAP_THRESHOLD_CD: u32 = 18_000;

const _: () = assert!(
    ROLL_LOW_CD.unsigned_abs() <= MAX_ROLL_COMMAND_CD
        && ROLL_HIGH_CD.unsigned_abs() <= MAX_ROLL_COMMAND_CD
);

/// Tunable settings of the Circle maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManeuverConfig {
    /// Roll change per tick that is reported as a wrap (centi-degrees)
    pub wrap_threshold_cd: u32,
}

impl Default for ManeuverConfig {
    fn default() -> Self {
        Self {
            wrap_threshold_cd: DEFAULT_WRAP_THRESHOLD_CD,
        }
    }
}

impl ManeuverConfig {
    /// Validate configuration
    ///
    /// # Returns
    ///
    /// true if every field is within its allowed range
    pub fn is_valid(&self) -> bool {
        self.wrap_threshold_cd > 0
    }
}
