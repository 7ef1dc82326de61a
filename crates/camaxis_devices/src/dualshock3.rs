//! Sony DualShock 3 gamepad

use camaxis_input::{Input, InputRange};

// DS3 face buttons, d-pad, and bumpers are pressure sensitive
const PRESSURE: InputRange = InputRange::new(0.0, 0.0, 255.0);

/// Sony DualShock 3: pressure-sensitive buttons report 0..255
#[derive(Debug, Clone)]
pub struct DualShock3 {
    pub directional_pad_left: Input,
    pub directional_pad_right: Input,
    pub directional_pad_up: Input,
    pub directional_pad_down: Input,
    pub left_bumper: Input,
    pub right_bumper: Input,
    pub circle_button: Input,
    pub square_button: Input,
}

impl DualShock3 {
    pub fn new() -> Self {
        Self {
            directional_pad_left: Input::new(PRESSURE),
            directional_pad_right: Input::new(PRESSURE),
            directional_pad_up: Input::new(PRESSURE),
            directional_pad_down: Input::new(PRESSURE),
            left_bumper: Input::new(PRESSURE),
            right_bumper: Input::new(PRESSURE),
            circle_button: Input::new(PRESSURE),
            square_button: Input::new(PRESSURE),
        }
    }
}

impl Default for DualShock3 {
    fn default() -> Self {
        Self::new()
    }
}
