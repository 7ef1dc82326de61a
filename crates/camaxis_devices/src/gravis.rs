//! Gravis gamepad

use camaxis_input::Input;

/// Gravis gamepad: directional pad, face buttons, and bumpers
///
/// Every control is a plain on/off button.
#[derive(Debug, Clone)]
pub struct Gravis {
    pub directional_pad_left: Input,
    pub directional_pad_right: Input,
    pub directional_pad_up: Input,
    pub directional_pad_down: Input,
    /// Upper bumper on the left shoulder
    pub left_bumper1: Input,
    /// Upper bumper on the right shoulder
    pub right_bumper1: Input,
    pub west_button: Input,
    pub south_button: Input,
}

impl Gravis {
    pub fn new() -> Self {
        Self {
            directional_pad_left: Input::button(),
            directional_pad_right: Input::button(),
            directional_pad_up: Input::button(),
            directional_pad_down: Input::button(),
            left_bumper1: Input::button(),
            right_bumper1: Input::button(),
            west_button: Input::button(),
            south_button: Input::button(),
        }
    }
}

impl Default for Gravis {
    fn default() -> Self {
        Self::new()
    }
}
