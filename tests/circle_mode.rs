//! Circle mode driven through the mode manager with host mocks.

use std::cell::RefCell;

use mavlink::common::MavSeverity;
use plane_circle::communication::{take_pending_statustext_messages, GcsStatusText};
use plane_circle::core::traits::{MockState, MockTime, SharedState, TimeSource};
use plane_circle::maneuver::ManeuverConfig;
use plane_circle::notify::{Severity, StatusTextSink};
use plane_circle::parameters::{CircleParams, ParamValue, ParameterStore};
use plane_circle::plane::{CircleMode, Mode, ModeManager};
use plane_circle::servo::{SrvChannels, SrvFunction};
use plane_circle::vehicle::{AttitudeState, ControlFlags, Location, VehicleState};
use serial_test::serial;

#[derive(Default)]
struct RecordingSink {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl StatusTextSink for RecordingSink {
    fn send_text(&self, severity: Severity, text: &str) {
        self.messages.borrow_mut().push((severity, text.to_string()));
    }
}

/// Stand-in for whatever mode was flying before Circle
struct IdleMode;

impl Mode for IdleMode {
    fn enter(&mut self) -> Result<(), &'static str> {
        Ok(())
    }

    fn update(&mut self) {}

    fn name(&self) -> &'static str {
        "IDLE"
    }
}

fn vehicle_with_roll(roll_cd: i32) -> MockState<VehicleState> {
    MockState::new(VehicleState {
        location: Location { altitude_cm: 12_000 },
        attitude: AttitudeState { roll_sensor_cd: roll_cd },
        ..VehicleState::default()
    })
}

fn nav(vehicle: &MockState<VehicleState>) -> (i32, i32) {
    vehicle.with(|v| (v.nav.roll_cd, v.nav.pitch_cd))
}

#[test]
fn test_entry_through_mode_manager() {
    let time = MockTime::with_initial_ms(1_000);
    let vehicle = vehicle_with_roll(500);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut idle = IdleMode;
    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, ManeuverConfig::default());

    {
        let mut manager = ModeManager::new(&mut idle);
        assert!(manager.set_mode(&mut circle).is_ok());
        assert_eq!(manager.current_mode_name(), "CIRCLE");
    }

    assert_eq!(nav(&vehicle), (0, 800));
    let flags = vehicle.with(|v| v.control_flags);
    assert!(flags.is_empty());

    let session = circle.session().unwrap();
    assert_eq!(session.previous_roll_angle_cd(), 500);
    assert_eq!(session.start_time_ms(), 1_000);
}

#[test]
fn test_trajectory_over_one_period() {
    let time = MockTime::with_initial_ms(250_000);
    let vehicle = vehicle_with_roll(0);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, ManeuverConfig::default());
    let mut manager = ModeManager::new(&mut circle);

    let mut rolls = Vec::new();
    // 50 Hz for 20 s
    for _ in 0..1_000 {
        time.advance_ms(20);
        manager.execute();
        let (roll, pitch) = nav(&vehicle);
        assert!(roll == -17_000 || roll == 1_000);
        assert_eq!(pitch, 800);
        rolls.push(roll);
    }

    // Tick n runs at t = 0.02 * (n + 1) s
    assert_eq!(rolls[248], 1_000); // t = 4.98 s
    assert_eq!(rolls[249], 1_000); // t = 5.00 s
    assert_eq!(rolls[250], -17_000); // t = 5.02 s
    assert_eq!(rolls[549], -17_000); // t = 11.00 s
    assert_eq!(rolls[750], 1_000); // t = 15.02 s
    assert_eq!(rolls[999], 1_000); // t = 20.00 s

    let switches = rolls.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(switches, 2);

    let throttle = outputs.with(|o| o.get_output_scaled(SrvFunction::Throttle));
    assert_eq!(throttle, 50.0);
    assert!(sink.messages.borrow().is_empty());
}

#[test]
fn test_wrap_threshold_boundary() {
    let time = MockTime::new();
    let vehicle = vehicle_with_roll(0);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, ManeuverConfig::default());
    circle.enter().unwrap();

    vehicle.with_mut(|v| v.attitude.roll_sensor_cd = 17_999);
    circle.update();
    assert!(sink.messages.borrow().is_empty());

    vehicle.with_mut(|v| v.attitude.roll_sensor_cd = -1);
    circle.update();
    let messages = sink.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0],
        (
            Severity::Notice,
            "Roll wrap detected. roll_angle_change = 180.0 deg".to_string()
        )
    );
}

#[test]
fn test_wrap_does_not_alter_setpoints() {
    let time = MockTime::new();
    let vehicle = vehicle_with_roll(100);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, ManeuverConfig::default());
    circle.enter().unwrap();

    time.advance_ms(11_000);
    vehicle.with_mut(|v| v.attitude.roll_sensor_cd = 18_200);
    circle.update();

    assert_eq!(nav(&vehicle), (-17_000, 800));
    assert_eq!(circle.session().unwrap().previous_roll_angle_cd(), 18_200);
    assert_eq!(
        sink.messages.borrow()[0].1,
        "Roll wrap detected. roll_angle_change = 181.0 deg"
    );
}

#[test]
fn test_wrap_threshold_from_parameters() {
    let mut store = ParameterStore::new();
    CircleParams::register_defaults(&mut store).unwrap();
    store.set("CIRC_WRAP_THR", ParamValue::Int(4_500)).unwrap();
    let params = CircleParams::from_store(&store);

    let time = MockTime::new();
    let vehicle = vehicle_with_roll(0);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, params.config);
    circle.enter().unwrap();

    vehicle.with_mut(|v| v.attitude.roll_sensor_cd = 4_500);
    circle.update();

    // The threshold only affects the diagnostic, never the demands
    assert_eq!(
        sink.messages.borrow()[0].1,
        "Roll wrap detected. roll_angle_change = 45.0 deg"
    );
    assert_eq!(nav(&vehicle), (1_000, 800));
}

#[test]
fn test_leaving_circle_hands_back_control() {
    let time = MockTime::new();
    let vehicle = vehicle_with_roll(0);
    let outputs = MockState::new(SrvChannels::new());
    let sink = RecordingSink::default();

    let mut idle = IdleMode;
    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &sink, ManeuverConfig::default());

    {
        let mut manager = ModeManager::new(&mut circle);
        manager.execute();
        assert!(manager.set_mode(&mut idle).is_ok());
        assert_eq!(manager.current_mode_name(), "IDLE");

        // Idle ticks leave the Circle demands untouched
        time.advance_ms(11_000);
        manager.execute();
    }

    assert!(circle.session().is_none());
    assert_eq!(nav(&vehicle), (1_000, 800));
    // Flags stay cleared until the next mode claims them
    assert!(!vehicle
        .with(|v| v.control_flags)
        .contains(ControlFlags::AUTO_NAVIGATION));
}

#[test]
#[serial]
fn test_wrap_notice_reaches_mavlink_queue() {
    // Start from an empty queue
    let _ = take_pending_statustext_messages();

    let time = MockTime::new();
    let vehicle = vehicle_with_roll(100);
    let outputs = MockState::new(SrvChannels::new());
    let gcs = GcsStatusText;

    let mut circle = CircleMode::new(&time, &vehicle, &outputs, &gcs, ManeuverConfig::default());
    circle.enter().unwrap();

    vehicle.with_mut(|v| v.attitude.roll_sensor_cd = 18_200);
    time.advance_ms(20);
    assert_eq!(time.now_ms(), 20);
    circle.update();

    let packets = take_pending_statustext_messages();
    assert_eq!(packets.len(), 1);

    let packet = &packets[0];
    let expected = b"Roll wrap detected. roll_angle_change = 181.0 deg";
    assert_eq!(packet.severity, MavSeverity::MAV_SEVERITY_NOTICE);
    assert_eq!(packet.id, 0);
    assert_eq!(&packet.text[..expected.len()], expected);
    assert!(packet.text[expected.len()..].iter().all(|&b| b == 0));
}
