//! Servo output channels
//!
//! Control modes write *scaled* outputs keyed by channel function, the way
//! ArduPilot's `SRV_Channels::set_output_scaled` works. The Circle mode only
//! drives throttle, in percent.

/// Output channel function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SrvFunction {
    /// Throttle (0 to 100 percent)
    Throttle = 70,
}

impl SrvFunction {
    /// Number of supported functions
    pub const COUNT: usize = 1;

    fn index(self) -> usize {
        match self {
            SrvFunction::Throttle => 0,
        }
    }

    /// Scaled range accepted for this function as `(min, max)`.
    pub fn scaled_range(self) -> (f32, f32) {
        match self {
            SrvFunction::Throttle => (0.0, 100.0),
        }
    }
}

/// Last scaled output written for each channel function
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SrvChannels {
    outputs: [f32; SrvFunction::COUNT],
}

impl SrvChannels {
    /// Create channels with every output at zero.
    pub const fn new() -> Self {
        Self {
            outputs: [0.0; SrvFunction::COUNT],
        }
    }

    /// Set the scaled output of a channel function.
    ///
    /// Values outside the function's range are clamped.
    pub fn set_output_scaled(&mut self, function: SrvFunction, value: f32) {
        let (min, max) = function.scaled_range();
        self.outputs[function.index()] = value.clamp(min, max);
    }

    /// Current scaled output of a channel function.
    pub fn get_output_scaled(&self, function: SrvFunction) -> f32 {
        self.outputs[function.index()]
    }
}
