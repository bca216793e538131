//! Core traits for platform-agnostic autopilot functionality.
//!
//! Trait definitions here carry no feature gates. Mock implementations are
//! always available for host testing; platform implementations (Embassy)
//! live in the `plane_circle` crate.

pub mod time;

pub use time::{MockTime, TimeSource};
