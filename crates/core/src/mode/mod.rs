//! Mode interface and per-entry session state
//!
//! The host framework drives exactly one active mode through the [`Mode`]
//! trait. Modes keep whatever they need across ticks in an owned session
//! value that is rebuilt on every entry and dropped on exit.

mod session;
mod traits;

pub use session::ControllerSession;
pub use traits::Mode;
