//! Mode Manager
//!
//! Manages control mode lifecycle and transitions for the plane.
//!
//! ## Responsibilities
//!
//! - Execute the active mode once per control tick
//! - Handle mode transitions (exit → enter)
//! - Report the active mode name
//!
//! ## Safety
//!
//! - Mode entry failure re-enters the previous mode
//! - The previous mode's `exit` always runs before the new mode's `enter`

use super::mode::Mode;

/// Mode Manager
///
/// Holds the active control mode and handles mode transitions. Modes are
/// borrowed so they can share framework state with the caller.
pub struct ModeManager<'a> {
    /// Current active mode
    current_mode: &'a mut dyn Mode,
}

impl<'a> ModeManager<'a> {
    /// Create mode manager with initial mode
    ///
    /// The initial mode is entered immediately; an entry failure is logged
    /// and the mode is kept.
    pub fn new(initial_mode: &'a mut dyn Mode) -> Self {
        if let Err(_e) = initial_mode.enter() {
            crate::log_error!("Failed to enter initial mode {}: {}", initial_mode.name(), _e);
        }

        Self {
            current_mode: initial_mode,
        }
    }

    /// Execute active mode (call once per control tick)
    pub fn execute(&mut self) {
        self.current_mode.update();
    }

    /// Request mode change
    ///
    /// Performs mode transition: exit old mode → enter new mode. If the new
    /// mode refuses entry, the old mode is entered again and stays active.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, the new mode's entry error otherwise
    pub fn set_mode(&mut self, new_mode: &'a mut dyn Mode) -> Result<(), &'static str> {
        let _old_mode_name = self.current_mode.name();
        let _new_mode_name = new_mode.name();

        crate::log_info!("Mode transition: {} -> {}", _old_mode_name, _new_mode_name);

        self.current_mode.exit();

        match new_mode.enter() {
            Ok(()) => {
                self.current_mode = new_mode;
                crate::log_info!("Mode transition complete: {}", _new_mode_name);
                Ok(())
            }
            Err(e) => {
                crate::log_error!("Failed to enter mode {}: {}", _new_mode_name, e);

                if let Err(_e2) = self.current_mode.enter() {
                    crate::log_error!("Failed to re-enter old mode {}: {}", _old_mode_name, _e2);
                }

                Err(e)
            }
        }
    }

    /// Get current mode name
    pub fn current_mode_name(&self) -> &'static str {
        self.current_mode.name()
    }
}
