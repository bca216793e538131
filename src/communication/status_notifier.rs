//! MAVLink STATUSTEXT queue
//!
//! Collects operator-visible diagnostics (for example the Circle mode's roll
//! wrap notice) and hands them to the telemetry transport as
//! `STATUSTEXT_DATA` packets.
//!
//! # Behavior
//!
//! - Fixed-capacity queue of 16 messages; when full the oldest message is
//!   dropped and counted
//! - Messages longer than 200 bytes are truncated on a char boundary
//! - Messages up to 50 bytes go out as one packet with `id = 0`; longer ones
//!   are split into up to 4 packets sharing a non-zero `id` with sequential
//!   `chunk_seq`
//!
//! The queue is a global behind a critical-section mutex so any subsystem can
//! report without holding a handle. Modes normally go through
//! [`GcsStatusText`], which implements the core `StatusTextSink` trait.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{Deque, String, Vec};
use mavlink::common::{MavSeverity, STATUSTEXT_DATA};
use plane_circle_core::notify::{Severity, StatusTextSink};

/// Maximum message length (bytes)
const MAX_MESSAGE_LEN: usize = 200;

/// Queue capacity (messages)
const QUEUE_CAPACITY: usize = 16;

/// STATUSTEXT text field size (bytes)
const CHUNK_SIZE: usize = 50;

/// Maximum packets per message (200 / 50)
const MAX_CHUNKS: usize = 4;

/// Maximum packets returned per drain
const MAX_PENDING_CHUNKS: usize = 32;

#[derive(Debug)]
struct QueuedMessage {
    severity: Severity,
    text: String<MAX_MESSAGE_LEN>,
}

/// Pending STATUSTEXT messages
pub struct StatusNotifier {
    queue: Deque<QueuedMessage, QUEUE_CAPACITY>,
    next_chunk_id: u16,
    dropped_count: u32,
}

impl StatusNotifier {
    const fn new() -> Self {
        Self {
            queue: Deque::new(),
            next_chunk_id: 1, // 0 marks a single-packet message
            dropped_count: 0,
        }
    }

    fn enqueue(&mut self, severity: Severity, text: &str) {
        let truncated = truncate_to_char_boundary(text, MAX_MESSAGE_LEN);
        if truncated.len() < text.len() {
            crate::log_warn!(
                "STATUSTEXT truncated to {} bytes (was {} bytes)",
                truncated.len(),
                text.len()
            );
        }

        let mut message_text = String::new();
        // Cannot fail: truncated fits the capacity
        let _ = message_text.push_str(truncated);

        if self.queue.is_full() {
            self.queue.pop_front();
            self.dropped_count += 1;
            crate::log_warn!(
                "STATUSTEXT queue full, dropped {} messages",
                self.dropped_count
            );
        }

        let _ = self.queue.push_back(QueuedMessage {
            severity,
            text: message_text,
        });
    }

    fn allocate_chunk_id(&mut self) -> u16 {
        let id = self.next_chunk_id;
        self.next_chunk_id = match self.next_chunk_id.wrapping_add(1) {
            0 => 1,
            next => next,
        };
        id
    }

    /// Convert queued messages to packets, oldest first.
    ///
    /// A message is only taken off the queue when all of its packets fit, so
    /// nothing is lost when the result fills up.
    fn drain_chunks(&mut self) -> Vec<STATUSTEXT_DATA, MAX_PENDING_CHUNKS> {
        let mut result = Vec::new();

        while let Some(front) = self.queue.front() {
            let needed = chunk_count(front.text.len());
            if result.len() + needed > result.capacity() {
                break;
            }

            let Some(message) = self.queue.pop_front() else {
                break;
            };
            let chunk_id = if needed > 1 {
                self.allocate_chunk_id()
            } else {
                0
            };

            for chunk in chunk_message(message.severity, message.text.as_str(), chunk_id) {
                let _ = result.push(chunk);
            }
        }

        result
    }
}

static NOTIFIER: Mutex<RefCell<StatusNotifier>> = Mutex::new(RefCell::new(StatusNotifier::new()));

/// Queue a STATUSTEXT message.
pub fn send_statustext(severity: Severity, text: &str) {
    critical_section::with(|cs| NOTIFIER.borrow_ref_mut(cs).enqueue(severity, text));
}

/// Number of messages dropped because the queue was full.
pub fn dropped_count() -> u32 {
    critical_section::with(|cs| NOTIFIER.borrow_ref(cs).dropped_count)
}

/// Drain pending messages as STATUSTEXT packets ready to send.
///
/// At most 32 packets are returned; anything left stays queued for the next
/// call.
pub fn take_pending_statustext_messages() -> Vec<STATUSTEXT_DATA, MAX_PENDING_CHUNKS> {
    critical_section::with(|cs| NOTIFIER.borrow_ref_mut(cs).drain_chunks())
}

/// Map a core severity to the MAVLink enum.
pub fn to_mav_severity(severity: Severity) -> MavSeverity {
    match severity {
        Severity::Emergency => MavSeverity::MAV_SEVERITY_EMERGENCY,
        Severity::Alert => MavSeverity::MAV_SEVERITY_ALERT,
        Severity::Critical => MavSeverity::MAV_SEVERITY_CRITICAL,
        Severity::Error => MavSeverity::MAV_SEVERITY_ERROR,
        Severity::Warning => MavSeverity::MAV_SEVERITY_WARNING,
        Severity::Notice => MavSeverity::MAV_SEVERITY_NOTICE,
        Severity::Info => MavSeverity::MAV_SEVERITY_INFO,
        Severity::Debug => MavSeverity::MAV_SEVERITY_DEBUG,
    }
}

/// `StatusTextSink` backed by the global STATUSTEXT queue
#[derive(Debug, Clone, Copy, Default)]
pub struct GcsStatusText;

impl StatusTextSink for GcsStatusText {
    fn send_text(&self, severity: Severity, text: &str) {
        send_statustext(severity, text);
    }
}

fn truncate_to_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn chunk_count(len: usize) -> usize {
    len.div_ceil(CHUNK_SIZE).clamp(1, MAX_CHUNKS)
}

/// Split a message into STATUSTEXT packets.
///
/// `chunk_id` is only used when more than one packet is needed.
fn chunk_message(severity: Severity, text: &str, chunk_id: u16) -> Vec<STATUSTEXT_DATA, MAX_CHUNKS> {
    let bytes = text.as_bytes();
    let len = bytes.len().min(MAX_MESSAGE_LEN);
    let id = if len <= CHUNK_SIZE { 0 } else { chunk_id };
    let mut chunks = Vec::new();

    for (chunk_seq, part) in bytes[..len].chunks(CHUNK_SIZE).enumerate() {
        let mut text_bytes = [0u8; CHUNK_SIZE];
        text_bytes[..part.len()].copy_from_slice(part);

        let _ = chunks.push(STATUSTEXT_DATA {
            severity: to_mav_severity(severity),
            text: text_bytes.into(),
            id,
            chunk_seq: chunk_seq as u8,
        });
    }

    // Empty message still produces one (blank) packet
    if chunks.is_empty() {
        let _ = chunks.push(STATUSTEXT_DATA {
            severity: to_mav_severity(severity),
            text: [0u8; CHUNK_SIZE].into(),
            id: 0,
            chunk_seq: 0,
        });
    }

    chunks
}
