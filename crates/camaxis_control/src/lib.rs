//! Four-axis camera control wiring
//!
//! Binds device controls to the four canonical camera axes - pan, tilt,
//! spin, zoom - with per-axis inversion and two-control composites:
//!
//! - [`Axis`] - one camera axis bound to a single or composite input
//! - [`CameraController`] - the four bound axes with deadband fan-out
//! - [`CameraDevice`] - per-device wiring table producing [`CameraAxes`]

mod axis;
mod controller;
mod mapping;

pub use axis::{Axis, AxisSource};
pub use controller::{AxisCommand, CameraController};
pub use mapping::{CameraAxes, CameraDevice};
