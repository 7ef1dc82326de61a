//! APEM Industrial Products HF-series joysticks
//!
//! Both variants report signed 16-bit stick axes. The first variant has a
//! proportional hat axis; the second reports hat directions as buttons.

use camaxis_input::{Input, InputRange};

const STICK: InputRange = InputRange::new(-32768.0, 0.0, 32767.0);
const HAT: InputRange = InputRange::new(-1.0, 0.0, 1.0);

/// Industrial Products joystick with a proportional up/down hat axis
#[derive(Debug, Clone)]
pub struct IndustrialProducts {
    /// Stick rotation about its long axis, left negative
    pub twist: Input,
    /// Stick deflection toward/away from the user, forward high
    pub forward_backward_pivot: Input,
    /// Stick deflection left/right, right high
    pub left_right_pivot: Input,
    /// Hat rocked up/down, up positive
    pub hat_up_down_pivot: Input,
}

impl IndustrialProducts {
    pub fn new() -> Self {
        Self {
            twist: Input::new(STICK),
            forward_backward_pivot: Input::new(STICK),
            left_right_pivot: Input::new(STICK),
            hat_up_down_pivot: Input::new(HAT),
        }
    }
}

impl Default for IndustrialProducts {
    fn default() -> Self {
        Self::new()
    }
}

/// Industrial Products joystick whose hat reports directions as buttons
#[derive(Debug, Clone)]
pub struct IndustrialProducts2 {
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

impl IndustrialProducts2 {
    pub fn new() -> Self {
        Self {
            twist: Input::new(STICK),
            forward_backward_pivot: Input::new(STICK),
            left_right_pivot: Input::new(STICK),
            hat_north: Input::button(),
            hat_south: Input::button(),
        }
    }
}

impl Default for IndustrialProducts2 {
    fn default() -> Self {
        Self::new()
    }
}
