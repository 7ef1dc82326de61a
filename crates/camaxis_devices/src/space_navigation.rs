//! 3Dconnexion six-axis pucks (SpaceExplorer, SpaceNavigator)
//!
//! Both devices report signed axis values of roughly +/-350 with the puck
//! at rest reading 0. Only the four controls consumed by camera mapping
//! are modeled here.

use camaxis_input::{Input, InputRange};

const PUCK: InputRange = InputRange::new(-350.0, 0.0, 350.0);

/// 3Dconnexion SpaceExplorer
#[derive(Debug, Clone)]
pub struct SpaceExplorer {
    /// Puck rotation about the vertical axis, counterclockwise high
    pub twist: Input,
    /// Puck tilt toward/away from the user
    pub forward_backward_pivot: Input,
    /// Puck tilt left/right
    pub left_right_pivot: Input,
    /// Puck slide toward/away from the user
    pub forward_backward_translation: Input,
}

impl SpaceExplorer {
    pub fn new() -> Self {
        Self {
            twist: Input::new(PUCK),
            forward_backward_pivot: Input::new(PUCK),
            left_right_pivot: Input::new(PUCK),
            forward_backward_translation: Input::new(PUCK),
        }
    }
}

impl Default for SpaceExplorer {
    fn default() -> Self {
        Self::new()
    }
}

/// 3Dconnexion SpaceNavigator
#[derive(Debug, Clone)]
pub struct SpaceNavigator {
    /// Puck rotation about the vertical axis, counterclockwise high
    pub twist: Input,
    /// Puck tilt toward/away from the user
    pub forward_backward_pivot: Input,
    /// Puck tilt left/right
    pub left_right_pivot: Input,
    /// Puck slide toward/away from the user
    pub forward_backward_translation: Input,
}

impl SpaceNavigator {
    pub fn new() -> Self {
        Self {
            twist: Input::new(PUCK),
            forward_backward_pivot: Input::new(PUCK),
            left_right_pivot: Input::new(PUCK),
            forward_backward_translation: Input::new(PUCK),
        }
    }
}

impl Default for SpaceNavigator {
    fn default() -> Self {
        Self::new()
    }
}
