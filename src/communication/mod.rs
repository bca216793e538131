//! Ground station communication
//!
//! Only the STATUSTEXT path is implemented here: modes queue diagnostics and
//! the telemetry transport drains them as MAVLink packets.

pub mod status_notifier;

pub use status_notifier::{take_pending_statustext_messages, GcsStatusText};
