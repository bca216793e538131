//! Parameter storage
//!
//! In-memory, name-keyed parameter registry (ArduPilot style: names of at
//! most 16 characters) plus the typed parameter groups that read from it.
//!
//! Persistence is the framework's concern; this store only tracks whether
//! it holds unsaved changes.

pub mod circle;
pub mod error;
pub mod storage;

pub use circle::CircleParams;
pub use error::{ParameterError, Result};
pub use storage::{ParamFlags, ParamValue, ParameterStore};
