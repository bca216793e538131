//! Plane control modes
//!
//! Each mode implements the core [`Mode`] trait; the mode manager holds the
//! active one as `&mut dyn Mode`.
//!
//! ## Available Modes
//!
//! - **Circle**: Timed roll-reversal maneuver with roll-wrap diagnostics

pub mod circle;

pub use circle::CircleMode;
pub use plane_circle_core::mode::Mode;
