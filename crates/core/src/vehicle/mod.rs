//! Vehicle-wide state shared between the framework and the active mode
//!
//! The attitude estimator and position source fill in `attitude` and
//! `location`; the active mode writes `control_flags` and `nav`. Exactly one
//! mode is active at a time, so the active mode is the only writer of those
//! registers.

use bitflags::bitflags;

bitflags! {
    /// Framework control features a mode may hand over or take back
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ControlFlags: u8 {
        /// Pilot throttle stick may nudge the automatic throttle
        const THROTTLE_NUDGE = 0b0000_0001;
        /// Throttle is computed by the speed/height controller
        const AUTO_THROTTLE = 0b0000_0010;
        /// Roll/pitch demands come from the navigation controller
        const AUTO_NAVIGATION = 0b0000_0100;
    }
}

/// Current vehicle location (only altitude is tracked here)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    /// Altitude in centimeters
    pub altitude_cm: i32,
}

/// Attitude estimate in centi-degrees
///
/// Roll is reported in the range ±18000, so it wraps when the aircraft rolls
/// through inverted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttitudeState {
    pub roll_sensor_cd: i32,
}

/// Attitude demands handed to the attitude controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavSetpoints {
    /// Demanded roll (centi-degrees)
    pub roll_cd: i32,
    /// Demanded pitch (centi-degrees)
    pub pitch_cd: i32,
}

/// Vehicle-wide registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleState {
    pub location: Location,
    pub attitude: AttitudeState,
    pub control_flags: ControlFlags,
    pub nav: NavSetpoints,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            location: Location::default(),
            attitude: AttitudeState::default(),
            control_flags: ControlFlags::all(),
            nav: NavSetpoints::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_framework_owns_everything() {
        let state = VehicleState::default();
        assert_eq!(state.control_flags, ControlFlags::all());
        assert_eq!(state.nav, NavSetpoints::default());
    }

    #[test]
    fn test_control_flags_remove() {
        let mut flags = ControlFlags::all();
        flags.remove(ControlFlags::AUTO_THROTTLE);
        assert!(flags.contains(ControlFlags::THROTTLE_NUDGE));
        assert!(!flags.contains(ControlFlags::AUTO_THROTTLE));
        assert!(flags.contains(ControlFlags::AUTO_NAVIGATION));
    }
}
