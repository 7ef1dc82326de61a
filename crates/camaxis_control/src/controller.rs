//! The four-axis camera controller

use camaxis_input::Deadband;

use crate::mapping::CameraDevice;
use crate::Axis;

/// A snapshot of all four commanded axis values
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisCommand {
    pub pan: f64,
    pub tilt: f64,
    pub spin: f64,
    pub zoom: f64,
}

/// Four bound camera axes: pan, tilt, spin, zoom
///
/// A controller owns its axes and never fails to construct; every
/// controller has exactly four bound axes for its whole lifetime. It
/// holds no device state beyond the input handles the axes read.
#[derive(Debug, Clone)]
pub struct CameraController {
    pan: Axis,
    tilt: Axis,
    spin: Axis,
    zoom: Axis,
}

impl CameraController {
    /// Build a controller from four already-bound axes
    pub fn new(pan: Axis, tilt: Axis, spin: Axis, zoom: Axis) -> Self {
        Self { pan, tilt, spin, zoom }
    }

    /// Build a controller from a device's wiring table
    pub fn for_device<D: CameraDevice>(device: &D) -> Self {
        let axes = device.camera_axes();
        Self::new(axes.pan, axes.tilt, axes.spin, axes.zoom)
    }

    /// Commanded pan in [-1, 1], right positive
    pub fn commanded_pan(&self) -> f64 {
        self.pan.commanded()
    }

    /// Commanded tilt in [-1, 1], up positive
    pub fn commanded_tilt(&self) -> f64 {
        self.tilt.commanded()
    }

    /// Commanded spin in [-1, 1], clockwise positive
    pub fn commanded_spin(&self) -> f64 {
        self.spin.commanded()
    }

    /// Commanded zoom in [-1, 1], in positive
    pub fn commanded_zoom(&self) -> f64 {
        self.zoom.commanded()
    }

    /// All four commanded values at once
    pub fn commanded(&self) -> AxisCommand {
        AxisCommand {
            pan: self.commanded_pan(),
            tilt: self.commanded_tilt(),
            spin: self.commanded_spin(),
            zoom: self.commanded_zoom(),
        }
    }

    /// Add a deadband to all four axes
    ///
    /// Deadbands live on the shared input handles, so other controllers
    /// bound to the same device controls see them too.
    pub fn add_deadband(&self, deadband: Deadband) {
        self.pan.add_deadband(deadband);
        self.tilt.add_deadband(deadband);
        self.spin.add_deadband(deadband);
        self.zoom.add_deadband(deadband);
    }

    /// Remove all deadbands from all four axes
    pub fn clear_deadbands(&self) {
        self.pan.clear_deadbands();
        self.tilt.clear_deadbands();
        self.spin.clear_deadbands();
        self.zoom.clear_deadbands();
    }
}
