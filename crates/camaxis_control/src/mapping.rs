//! Per-device camera axis wiring
//!
//! Each supported device implements [`CameraDevice`], a declarative table
//! naming which control drives which axis, whether its polarity flips,
//! and which button pairs merge into one composite axis. The table
//! normalizes every device to the same convention: pan right, tilt up,
//! spin clockwise, and zoom in are all positive.

use camaxis_devices::{
    DualShock3, Gravis, IndustrialProducts, IndustrialProducts2, SpaceExplorer, SpaceNavigator,
    ThrustMaster, VirtualLayout, WingMan,
};
use camaxis_input::CompositeInput;

use crate::Axis;

/// A device's four axis bindings
#[derive(Debug, Clone)]
pub struct CameraAxes {
    pub pan: Axis,
    pub tilt: Axis,
    pub spin: Axis,
    pub zoom: Axis,
}

/// A device whose controls map onto the four camera axes
///
/// Implementations clone the input handles they bind; building the axes
/// never mutates the descriptor and never fails.
pub trait CameraDevice {
    fn camera_axes(&self) -> CameraAxes;
}

impl CameraDevice for WingMan {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct_inverted(self.forward_backward_pivot.clone()),
            spin: Axis::direct(self.left_right_pivot.clone()),
            zoom: Axis::opposed(self.hat_north.clone(), self.hat_south.clone()),
        }
    }
}

impl CameraDevice for SpaceExplorer {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct_inverted(self.forward_backward_pivot.clone()),
            spin: Axis::direct_inverted(self.left_right_pivot.clone()),
            zoom: Axis::direct_inverted(self.forward_backward_translation.clone()),
        }
    }
}

impl CameraDevice for SpaceNavigator {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct_inverted(self.forward_backward_pivot.clone()),
            spin: Axis::direct_inverted(self.left_right_pivot.clone()),
            zoom: Axis::direct_inverted(self.forward_backward_translation.clone()),
        }
    }
}

impl CameraDevice for Gravis {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::opposed(
                self.directional_pad_left.clone(),
                self.directional_pad_right.clone(),
            ),
            tilt: Axis::opposed(
                self.directional_pad_up.clone(),
                self.directional_pad_down.clone(),
            ),
            spin: Axis::opposed(self.left_bumper1.clone(), self.right_bumper1.clone()),
            zoom: Axis::opposed(self.west_button.clone(), self.south_button.clone()),
        }
    }
}

impl CameraDevice for DualShock3 {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::opposed(
                self.directional_pad_left.clone(),
                self.directional_pad_right.clone(),
            ),
            tilt: CompositeInput::new()
                .with(self.directional_pad_up.clone(), -1.0)
                .with(self.directional_pad_down.clone(), 1.0)
                .into(),
            spin: CompositeInput::new()
                .with(self.left_bumper.clone(), -1.0)
                .with(self.right_bumper.clone(), 1.0)
                .into(),
            zoom: Axis::opposed(self.circle_button.clone(), self.square_button.clone()),
        }
    }
}

impl CameraDevice for VirtualLayout {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct(self.left_right_rotation.clone()),
            tilt: Axis::direct(self.up_down_rotation.clone()),
            spin: Axis::direct(self.clockwise_counterclockwise_rotation.clone()),
            zoom: Axis::direct(self.in_out_translation.clone()),
        }
    }
}

impl CameraDevice for ThrustMaster {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct_inverted(self.forward_backward_pivot.clone()),
            spin: Axis::direct(self.left_right_pivot.clone()),
            zoom: Axis::direct(self.forward_backward_translation.clone()),
        }
    }
}

impl CameraDevice for IndustrialProducts {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct(self.forward_backward_pivot.clone()),
            spin: Axis::direct(self.left_right_pivot.clone()),
            zoom: Axis::direct(self.hat_up_down_pivot.clone()),
        }
    }
}

impl CameraDevice for IndustrialProducts2 {
    fn camera_axes(&self) -> CameraAxes {
        CameraAxes {
            pan: Axis::direct_inverted(self.twist.clone()),
            tilt: Axis::direct_inverted(self.forward_backward_pivot.clone()),
            spin: Axis::direct(self.left_right_pivot.clone()),
            zoom: Axis::opposed(self.hat_north.clone(), self.hat_south.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CameraController;
    use camaxis_input::Deadband;

    #[test]
    fn test_wingman_wiring() {
        let device = WingMan::new();
        let controller = CameraController::for_device(&device);

        // Full right twist (255 of 0..255, neutral 128) pans left
        device.twist.set_value(255.0);
        assert_eq!(controller.commanded_pan(), -1.0);

        // Full forward pivot (1023 of 0..1023, neutral 512) tilts down
        device.forward_backward_pivot.set_value(1023.0);
        assert_eq!(controller.commanded_tilt(), -1.0);

        // Full left deflection spins negative, uninverted
        device.left_right_pivot.set_value(0.0);
        assert_eq!(controller.commanded_spin(), -1.0);

        // Hat north zooms in, south zooms out
        device.hat_north.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 1.0);
        device.hat_north.set_value(0.0);
        device.hat_south.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), -1.0);
    }

    #[test]
    fn test_space_explorer_all_axes_inverted() {
        let device = SpaceExplorer::new();
        let controller = CameraController::for_device(&device);

        device.twist.set_value(350.0);
        device.forward_backward_pivot.set_value(350.0);
        device.left_right_pivot.set_value(350.0);
        device.forward_backward_translation.set_value(350.0);

        let command = controller.commanded();
        assert_eq!(command.pan, -1.0);
        assert_eq!(command.tilt, -1.0);
        assert_eq!(command.spin, -1.0);
        assert_eq!(command.zoom, -1.0);
    }

    #[test]
    fn test_space_navigator_all_axes_inverted() {
        let device = SpaceNavigator::new();
        let controller = CameraController::for_device(&device);

        device.twist.set_value(-350.0);
        device.forward_backward_pivot.set_value(-175.0);
        device.left_right_pivot.set_value(350.0);
        device.forward_backward_translation.set_value(0.0);

        let command = controller.commanded();
        assert_eq!(command.pan, 1.0);
        assert_eq!(command.tilt, 0.5);
        assert_eq!(command.spin, -1.0);
        assert_eq!(command.zoom, 0.0);
    }

    #[test]
    fn test_gravis_composites() {
        let device = Gravis::new();
        let controller = CameraController::for_device(&device);

        device.directional_pad_left.set_value(1.0);
        assert_eq!(controller.commanded_pan(), 1.0);
        device.directional_pad_right.set_value(1.0);
        // Opposed directions cancel
        assert_eq!(controller.commanded_pan(), 0.0);

        device.directional_pad_down.set_value(1.0);
        assert_eq!(controller.commanded_tilt(), -1.0);

        device.left_bumper1.set_value(1.0);
        assert_eq!(controller.commanded_spin(), 1.0);

        device.west_button.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 1.0);
        device.south_button.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 0.0);
    }

    #[test]
    fn test_dualshock3_reversed_composites() {
        let device = DualShock3::new();
        let controller = CameraController::for_device(&device);

        // D-pad up tilts negative on this pad, down positive
        device.directional_pad_up.set_value(255.0);
        assert_eq!(controller.commanded_tilt(), -1.0);
        device.directional_pad_up.set_value(0.0);
        device.directional_pad_down.set_value(255.0);
        assert_eq!(controller.commanded_tilt(), 1.0);

        // Right bumper spins positive, left negative
        device.right_bumper.set_value(255.0);
        assert_eq!(controller.commanded_spin(), 1.0);
        device.right_bumper.set_value(0.0);
        device.left_bumper.set_value(255.0);
        assert_eq!(controller.commanded_spin(), -1.0);

        // Half pressure commands half zoom: (128 - 0) / 255
        device.circle_button.set_value(127.5);
        assert_eq!(controller.commanded_zoom(), 0.5);
        device.square_button.set_value(127.5);
        assert_eq!(controller.commanded_zoom(), 0.0);

        device.directional_pad_left.set_value(255.0);
        assert_eq!(controller.commanded_pan(), 1.0);
    }

    #[test]
    fn test_virtual_layout_is_identity() {
        let device = VirtualLayout::new();
        let controller = CameraController::for_device(&device);

        device.left_right_rotation.set_value(0.25);
        device.up_down_rotation.set_value(-0.5);
        device.clockwise_counterclockwise_rotation.set_value(0.75);
        device.in_out_translation.set_value(-1.0);

        let command = controller.commanded();
        assert_eq!(command.pan, 0.25);
        assert_eq!(command.tilt, -0.5);
        assert_eq!(command.spin, 0.75);
        assert_eq!(command.zoom, -1.0);
    }

    #[test]
    fn test_thrustmaster_wiring() {
        let device = ThrustMaster::new();
        let controller = CameraController::for_device(&device);

        device.twist.set_value(255.0);
        assert_eq!(controller.commanded_pan(), -1.0);

        device.forward_backward_pivot.set_value(0.0);
        assert_eq!(controller.commanded_tilt(), 1.0);

        // Spin and zoom are uninverted on this stick
        device.left_right_pivot.set_value(1023.0);
        assert_eq!(controller.commanded_spin(), 1.0);
        device.forward_backward_translation.set_value(255.0);
        assert_eq!(controller.commanded_zoom(), 1.0);
    }

    #[test]
    fn test_industrial_products_wiring() {
        let device = IndustrialProducts::new();
        let controller = CameraController::for_device(&device);

        device.twist.set_value(32767.0);
        assert_eq!(controller.commanded_pan(), -1.0);

        // Only pan is inverted on this stick
        device.forward_backward_pivot.set_value(-32768.0);
        assert_eq!(controller.commanded_tilt(), -1.0);
        device.left_right_pivot.set_value(32767.0);
        assert_eq!(controller.commanded_spin(), 1.0);

        device.hat_up_down_pivot.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 1.0);
    }

    #[test]
    fn test_industrial_products2_wiring() {
        let device = IndustrialProducts2::new();
        let controller = CameraController::for_device(&device);

        device.twist.set_value(32767.0);
        assert_eq!(controller.commanded_pan(), -1.0);
        device.forward_backward_pivot.set_value(32767.0);
        assert_eq!(controller.commanded_tilt(), -1.0);
        device.left_right_pivot.set_value(-32768.0);
        assert_eq!(controller.commanded_spin(), -1.0);

        device.hat_north.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 1.0);
        device.hat_south.set_value(1.0);
        assert_eq!(controller.commanded_zoom(), 0.0);
    }

    #[test]
    fn test_controller_deadband_spans_composite_axes() {
        let device = WingMan::new();
        let controller = CameraController::for_device(&device);

        // Jitter just off neutral on every control
        device.twist.set_value(130.0);
        device.forward_backward_pivot.set_value(516.0);
        device.left_right_pivot.set_value(508.0);
        device.hat_north.set_value(0.02);

        controller.add_deadband(Deadband::symmetric(0.05));
        let command = controller.commanded();
        assert_eq!(command.pan, 0.0);
        assert_eq!(command.tilt, 0.0);
        assert_eq!(command.spin, 0.0);
        assert_eq!(command.zoom, 0.0);

        controller.clear_deadbands();
        assert!(controller.commanded().zoom > 0.0);
    }

    #[test]
    fn test_binding_leaves_device_inputs_untouched() {
        let device = SpaceNavigator::new();
        let _controller = CameraController::for_device(&device);

        // Inversion is axis-local; the descriptor's handles keep their polarity
        device.twist.set_value(350.0);
        assert_eq!(device.twist.normalized(), 1.0);
        assert!(!device.twist.is_inverted());
    }

    #[test]
    fn test_two_controllers_share_one_device() {
        let device = VirtualLayout::new();
        let first = CameraController::for_device(&device);
        let second = CameraController::for_device(&device);

        device.left_right_rotation.set_value(0.5);
        assert_eq!(first.commanded_pan(), 0.5);
        assert_eq!(second.commanded_pan(), 0.5);
    }
}
