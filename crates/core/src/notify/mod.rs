//! Ground station status text
//!
//! Modes report operator-visible events through a [`StatusTextSink`]. The
//! sink owns queueing, truncation and splitting into telemetry packets.

/// Status text severity (MAVLink `MAV_SEVERITY` numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

/// Destination for status text diagnostics
///
/// Sending is best-effort and never fails from the caller's point of view.
pub trait StatusTextSink {
    /// Queue a message for the ground station.
    fn send_text(&self, severity: Severity, text: &str);
}
