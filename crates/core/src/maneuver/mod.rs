//! Circle maneuver logic
//!
//! Pure computation behind the Circle mode:
//!
//! - [`trajectory`]: maps mode-relative time to a roll/pitch/throttle setpoint.
//!   The roll command follows the *sign* of a 20 s cosine, so it is a two-state
//!   square wave that flips between -170° and +10° and never commands the
//!   ±180° discontinuity.
//! - [`wrap`]: compares consecutive roll samples and flags jumps large enough
//!   to look like a ±180° rollover. Advisory only.
//! - [`config`]: the fixed flight profile constants and the wrap threshold
//!   setting.

pub mod config;
pub mod trajectory;
pub mod wrap;

pub use config::{
    ManeuverConfig, CIRCLE_FREQUENCY_HZ, CIRCLE_PERIOD_S, DEFAULT_WRAP_THRESHOLD_CD,
    MAX_ROLL_COMMAND_CD, PITCH_CD, ROLL_HIGH_CD, ROLL_LOW_CD, THROTTLE_PERCENT,
};
pub use trajectory::{compute_setpoint, phase_angle, quantize_roll, roll_raw_cd, SetpointOutput};
pub use wrap::{detect_roll_wrap, WrapEvent, WRAP_MESSAGE_CAPACITY};
