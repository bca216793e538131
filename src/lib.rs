#![cfg_attr(not(test), no_std)]

//! plane_circle - Fixed-wing Circle mode
//!
//! The Circle mode flies a timed roll-reversal maneuver: a square-wave roll
//! command between -170° and +10° with a constant climb pitch and fixed
//! throttle, while watching the sensed roll angle for ±180° rollovers.
//!
//! Pure maneuver logic lives in `plane_circle_core`; this crate adds the
//! framework around it (logging, shared state, status text, parameters and
//! mode scheduling).

// Core infrastructure (logging, shared-state and time traits)
pub mod core;

// Ground station status text
pub mod communication;

// Parameter store and Circle mode parameters
pub mod parameters;

// Fixed-wing modes and mode scheduling
pub mod plane;

pub use plane_circle_core::{maneuver, notify, servo, vehicle};
