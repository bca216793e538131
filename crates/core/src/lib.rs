//! plane_circle_core - Pure no_std control logic for the Circle maneuver
//!
//! This crate holds the platform-agnostic pieces of the fixed-wing Circle
//! mode: the time-driven roll/pitch trajectory, the roll-wrap detector, the
//! per-entry controller session and the vehicle-wide registers the mode
//! writes to. Everything here is testable on host without feature flags.
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`maneuver`]: Trajectory synthesis and roll-wrap detection
//! - [`mode`]: Mode trait and controller session state
//! - [`notify`]: Status text severities and the diagnostic sink trait
//! - [`servo`]: Scaled servo outputs keyed by channel function
//! - [`vehicle`]: Vehicle-wide state (attitude, location, flags, setpoints)

#![no_std]

pub mod maneuver;
pub mod mode;
pub mod notify;
pub mod servo;
pub mod traits;
pub mod vehicle;
