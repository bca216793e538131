//! Circle Mode Parameter Definitions
//!
//! # Parameters
//!
//! - `CIRC_WRAP_THR` - Roll change per tick reported as a wrap (cd)
//!
//! The flight profile (20 s cycle, -170°/+10° roll, 8° pitch, 50 % throttle)
//! is fixed and has no parameters.

use super::error::Result;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use plane_circle_core::maneuver::ManeuverConfig;

const WRAP_THRESHOLD: &str = "CIRC_WRAP_THR";

/// Circle mode parameters loaded from the parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleParams {
    pub config: ManeuverConfig,
}

impl CircleParams {
    /// Register circle parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<()> {
        let defaults = ManeuverConfig::default();

        store.register(
            WRAP_THRESHOLD,
            ParamValue::Int(defaults.wrap_threshold_cd as i32),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load circle parameters from the parameter store
    ///
    /// Missing entries take their defaults. Out-of-range values fall back to
    /// defaults.
    pub fn from_store(store: &ParameterStore) -> Self {
        let defaults = ManeuverConfig::default();

        let wrap_threshold = store
            .get(WRAP_THRESHOLD)
            .map_or(defaults.wrap_threshold_cd as i32, |v| v.as_i32());

        let config = ManeuverConfig {
            // Negative thresholds become 0 and fail validation
            wrap_threshold_cd: wrap_threshold.max(0) as u32,
        };

        if !config.is_valid() {
            crate::log_warn!("CIRC_WRAP_THR out of range ({}), using default", wrap_threshold);
            return Self::default();
        }

        Self { config }
    }
}
