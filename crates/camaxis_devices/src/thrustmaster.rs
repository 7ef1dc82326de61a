//! ThrustMaster joystick

use camaxis_input::{Input, InputRange};

const STICK: InputRange = InputRange::new(0.0, 512.0, 1023.0);
const TWIST: InputRange = InputRange::new(0.0, 128.0, 255.0);
const THROTTLE: InputRange = InputRange::new(0.0, 128.0, 255.0);

/// ThrustMaster joystick with twist and a sliding throttle
#[derive(Debug, Clone)]
pub struct ThrustMaster {
    /// Stick rotation about its long axis, left negative
    pub twist: Input,
    /// Stick deflection toward/away from the user, forward high
    pub forward_backward_pivot: Input,
    /// Stick deflection left/right, right high
    pub left_right_pivot: Input,
    /// Throttle slide toward/away from the user
    pub forward_backward_translation: Input,
}

impl ThrustMaster {
    pub fn new() -> Self {
        Self {
            twist: Input::new(TWIST),
            forward_backward_pivot: Input::new(STICK),
            left_right_pivot: Input::new(STICK),
            forward_backward_translation: Input::new(THROTTLE),
        }
    }
}

impl Default for ThrustMaster {
    fn default() -> Self {
        Self::new()
    }
}
