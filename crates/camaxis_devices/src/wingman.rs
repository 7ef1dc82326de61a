//! Logitech WingMan Extreme joystick

use camaxis_input::{Input, InputRange};

const STICK: InputRange = InputRange::new(0.0, 512.0, 1023.0);
const TWIST: InputRange = InputRange::new(0.0, 128.0, 255.0);

/// Logitech WingMan Extreme: twisting stick with an 8-way hat
///
/// Stick axes report 10-bit values centered at 512; the twist axis is
/// 8-bit centered at 128. Hat directions report as buttons.
#[derive(Debug, Clone)]
pub struct WingMan {
    /// Stick rotation about its long axis, left negative
    pub twist: Input,
    /// Stick deflection toward/away from the user, forward high
    pub forward_backward_pivot: Input,
    /// Stick deflection left/right, right high
    pub left_right_pivot: Input,
    /// Hat pressed toward the front of the stick
    pub hat_north: Input,
    /// Hat pressed toward the user
    pub hat_south: Input,
}

impl WingMan {
    pub fn new() -> Self {
        Self {
            twist: Input::new(TWIST),
            forward_backward_pivot: Input::new(STICK),
            left_right_pivot: Input::new(STICK),
            hat_north: Input::button(),
            hat_south: Input::button(),
        }
    }
}

impl Default for WingMan {
    fn default() -> Self {
        Self::new()
    }
}
