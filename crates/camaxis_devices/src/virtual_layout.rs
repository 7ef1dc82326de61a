//! Software-driven control layout
//!
//! A VirtualLayout has no hardware behind it: whatever drives it (a UI,
//! a script, a test) writes unit values straight into the handles. Its
//! controls are already named for the camera motion they command, so the
//! mapping binds them without inversion.

use camaxis_input::Input;

/// Software-driven layout with unit bipolar controls
#[derive(Debug, Clone)]
pub struct VirtualLayout {
    /// Rotation left/right (pan), right positive
    pub left_right_rotation: Input,
    /// Rotation up/down (tilt), up positive
    pub up_down_rotation: Input,
    /// Rotation clockwise/counterclockwise (spin), clockwise positive
    pub clockwise_counterclockwise_rotation: Input,
    /// Translation in/out (zoom), in positive
    pub in_out_translation: Input,
}

impl VirtualLayout {
    pub fn new() -> Self {
        Self {
            left_right_rotation: Input::bipolar(),
            up_down_rotation: Input::bipolar(),
            clockwise_counterclockwise_rotation: Input::bipolar(),
            in_out_translation: Input::bipolar(),
        }
    }
}

impl Default for VirtualLayout {
    fn default() -> Self {
        Self::new()
    }
}
