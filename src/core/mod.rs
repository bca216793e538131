//! Core infrastructure
//!
//! Logging macros and the platform-agnostic traits modes use to reach time
//! and shared vehicle state.

pub mod logging;
pub mod traits;
