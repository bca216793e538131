//! Mode trait definition

/// Control mode trait
///
/// # Lifecycle
///
/// 1. `enter()` - Called once when the mode is selected
/// 2. `update()` - Called every control tick while the mode is active
/// 3. `exit()` - Called once when another mode is selected
///
/// The scheduler calls these strictly in sequence and never re-entrantly.
pub trait Mode {
    /// Initialize mode (called once on mode entry)
    ///
    /// Returns `Err` if the mode cannot be entered; the framework then stays
    /// in the previous mode.
    fn enter(&mut self) -> Result<(), &'static str>;

    /// Run one control tick. Must not block.
    fn update(&mut self);

    /// Release mode state (called once on mode exit)
    fn exit(&mut self) {}

    /// Mode name for logging and telemetry
    fn name(&self) -> &'static str;
}
