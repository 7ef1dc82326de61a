//! camaxis - camera axis mapping for input devices
//!
//! Maps physical and virtual input devices (joysticks, gamepads,
//! space-navigation pucks) onto four canonical camera control axes:
//! pan, tilt, spin, and zoom.
//!
//! The workspace splits into three member crates, re-exported here:
//!
//! - [`camaxis_input`] - scalar input pipeline (ranges, deadbands,
//!   composites)
//! - [`camaxis_devices`] - device descriptors with calibrated controls
//! - [`camaxis_control`] - the axis wiring tables and [`CameraController`]

pub mod config;

pub use camaxis_control::{Axis, AxisCommand, AxisSource, CameraAxes, CameraController, CameraDevice};
pub use camaxis_devices::{
    DualShock3, Gravis, IndustrialProducts, IndustrialProducts2, SpaceExplorer, SpaceNavigator,
    ThrustMaster, VirtualLayout, WingMan,
};
pub use camaxis_input::{CompositeInput, Deadband, Input, InputRange};
