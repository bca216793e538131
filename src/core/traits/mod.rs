//! Core traits for platform-agnostic mode code.
//!
//! ```text
//!   CircleMode / ModeManager
//!            │
//!            ▼
//!   TimeSource            SharedState<T>
//!   + now_ms()            + with(|&T| ..)
//!                         + with_mut(|&mut T| ..)
//!            │                    │
//!     ┌──────┴──────┐      ┌──────┴───────┐
//!     ▼             ▼      ▼              ▼
//!  EmbassyTime   MockTime  EmbassyState   MockState
//!  (embassy)               (embassy)
//! ```
//!
//! # Features
//!
//! - **`embassy`**: Enables `EmbassyTime` and `EmbassyState<T>`
//! - Mock implementations are always available for host testing

pub mod sync;
pub mod time;

pub use sync::{MockState, SharedState};
pub use time::{MockTime, TimeSource};

#[cfg(feature = "embassy")]
pub use sync::EmbassyState;

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
