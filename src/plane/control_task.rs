//! Control loop task
//!
//! Runs the active mode at 50 Hz on the Embassy executor.

use super::ModeManager;
use embassy_time::{Duration, Ticker};

/// Control tick period (50 Hz)
pub const CONTROL_PERIOD_MS: u64 = 20;

/// Control loop task
///
/// Owns the mode manager for the lifetime of the firmware. Mode changes are
/// made before the manager is handed to this task.
#[embassy_executor::task]
pub async fn control_loop_task(mut mode_manager: ModeManager<'static>) {
    crate::log_info!(
        "Control loop started ({} ms, mode {})",
        CONTROL_PERIOD_MS,
        mode_manager.current_mode_name()
    );

    let mut ticker = Ticker::every(Duration::from_millis(CONTROL_PERIOD_MS));

    loop {
        mode_manager.execute();
        ticker.next().await;
    }
}
