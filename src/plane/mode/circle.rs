//! Circle Mode
//!
//! Flies a timed roll-reversal maneuver with the navigation stack bypassed.
//!
//! ## Behavior
//!
//! - On entry: snapshot time, altitude and roll into a fresh session; take
//!   throttle and attitude away from the framework (throttle nudge, auto
//!   throttle and auto navigation off); demand wings level at 8° pitch
//! - Each update: demand the square-wave roll (-170° / +10°) for the current
//!   mode-relative time at 8° pitch, hold 50 % throttle, and report a roll
//!   jump of 180° or more between ticks as a possible wrap
//! - On exit: drop the session
//!
//! The roll pair stays clear of ±180°, so the control law itself never deals
//! with the wrap. Wrap reports are advisory and do not change the demands.

use crate::core::traits::{SharedState, TimeSource};
use plane_circle_core::maneuver::{compute_setpoint, ManeuverConfig, PITCH_CD};
use plane_circle_core::mode::{ControllerSession, Mode};
use plane_circle_core::notify::{Severity, StatusTextSink};
use plane_circle_core::servo::{SrvChannels, SrvFunction};
use plane_circle_core::vehicle::{ControlFlags, VehicleState};

/// Roll demand written on entry (centi-degrees)
const ENTRY_ROLL_CD: i32 = 0;

/// Circle Mode
pub struct CircleMode<'a, T, V, O>
where
    T: TimeSource,
    V: SharedState<VehicleState>,
    O: SharedState<SrvChannels>,
{
    /// Monotonic clock
    time: &'a T,
    /// Vehicle-wide registers (attitude, altitude, flags, setpoints)
    vehicle: &'a V,
    /// Servo outputs
    outputs: &'a O,
    /// Ground station diagnostics
    notifier: &'a dyn StatusTextSink,
    /// Wrap diagnostic settings (fixed for the life of the mode object)
    config: ManeuverConfig,
    /// Session state (set on mode entry)
    session: Option<ControllerSession>,
}

impl<'a, T, V, O> CircleMode<'a, T, V, O>
where
    T: TimeSource,
    V: SharedState<VehicleState>,
    O: SharedState<SrvChannels>,
{
    /// Create new Circle mode
    ///
    /// # Arguments
    ///
    /// * `time` - Monotonic clock
    /// * `vehicle` - Shared vehicle registers
    /// * `outputs` - Shared servo outputs
    /// * `notifier` - Ground station status text sink
    /// * `config` - Wrap diagnostic settings (see `CircleParams::from_store`)
    pub fn new(
        time: &'a T,
        vehicle: &'a V,
        outputs: &'a O,
        notifier: &'a dyn StatusTextSink,
        config: ManeuverConfig,
    ) -> Self {
        Self {
            time,
            vehicle,
            outputs,
            notifier,
            config,
            session: None,
        }
    }

    /// Current session, `None` while the mode is not active
    pub fn session(&self) -> Option<&ControllerSession> {
        self.session.as_ref()
    }
}

impl<'a, T, V, O> Mode for CircleMode<'a, T, V, O>
where
    T: TimeSource,
    V: SharedState<VehicleState>,
    O: SharedState<SrvChannels>,
{
    fn enter(&mut self) -> Result<(), &'static str> {
        let now_ms = self.time.now_ms();

        let session = self.vehicle.with_mut(|v| {
            // This mode sets roll/pitch/throttle directly
            v.control_flags.remove(
                ControlFlags::THROTTLE_NUDGE
                    | ControlFlags::AUTO_THROTTLE
                    | ControlFlags::AUTO_NAVIGATION,
            );
            v.nav.roll_cd = ENTRY_ROLL_CD;
            v.nav.pitch_cd = PITCH_CD;

            ControllerSession::new(now_ms, v.location.altitude_cm, v.attitude.roll_sensor_cd)
        });

        crate::log_info!(
            "Circle mode entered (roll {} cd, alt {} cm)",
            session.previous_roll_angle_cd(),
            session.starting_altitude_cm()
        );

        self.session = Some(session);
        Ok(())
    }

    fn update(&mut self) {
        let Some(session) = self.session.as_mut() else {
            crate::log_warn!("Circle mode update before enter, tick skipped");
            return;
        };

        let now_ms = self.time.now_ms();
        let setpoint = compute_setpoint(session.elapsed_s(now_ms));

        let current_roll_cd = self.vehicle.with_mut(|v| {
            v.nav.roll_cd = setpoint.roll_setpoint_cd;
            v.nav.pitch_cd = setpoint.pitch_setpoint_cd;
            v.attitude.roll_sensor_cd
        });

        if let Some(event) = session.record_roll(current_roll_cd, self.config.wrap_threshold_cd) {
            crate::log_warn!(
                "Roll wrap suspected: {} cd -> {} cd",
                event.previous_cd,
                event.current_cd
            );
            self.notifier
                .send_text(Severity::Notice, event.message().as_str());
        }

        self.outputs.with_mut(|o| {
            o.set_output_scaled(SrvFunction::Throttle, setpoint.throttle_percent)
        });
    }

    fn exit(&mut self) {
        crate::log_info!("Exiting Circle mode");
        self.session = None;
    }

    fn name(&self) -> &'static str {
        "CIRCLE"
    }
}
