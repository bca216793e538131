//! Fixed-wing vehicle implementation
//!
//! Plane-specific control logic, following ArduPilot's per-vehicle layout.
//!
//! ## Modules
//!
//! - `mode`: Control mode implementations (Circle)
//! - `mode_manager`: Mode lifecycle management and transitions
//! - `control_task`: 50 Hz Embassy task driving the mode manager

pub mod mode;
pub mod mode_manager;

#[cfg(feature = "embassy")]
pub mod control_task;

pub use mode::{CircleMode, Mode};
pub use mode_manager::ModeManager;
