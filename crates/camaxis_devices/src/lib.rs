//! Device descriptors for camera-axis mapping
//!
//! Each descriptor is pure data: one [`camaxis_input::Input`] handle per
//! physical control, calibrated with that device's raw range. A poll loop
//! writes raw values into the handles; consumers clone the handles they
//! need. Descriptors perform no I/O themselves.
//!
//! Supported devices:
//!
//! - [`WingMan`] - Logitech WingMan Extreme joystick
//! - [`SpaceExplorer`], [`SpaceNavigator`] - 3Dconnexion six-axis pucks
//! - [`Gravis`] - Gravis gamepad
//! - [`DualShock3`] - Sony DualShock 3 gamepad
//! - [`VirtualLayout`] - software-driven control layout
//! - [`ThrustMaster`] - ThrustMaster joystick
//! - [`IndustrialProducts`], [`IndustrialProducts2`] - APEM Industrial
//!   Products HF-series joysticks

mod wingman;
mod space_navigation;
mod gravis;
mod dualshock3;
mod virtual_layout;
mod thrustmaster;
mod industrial_products;

pub use wingman::WingMan;
pub use space_navigation::{SpaceExplorer, SpaceNavigator};
pub use gravis::Gravis;
pub use dualshock3::DualShock3;
pub use virtual_layout::VirtualLayout;
pub use thrustmaster::ThrustMaster;
pub use industrial_products::{IndustrialProducts, IndustrialProducts2};
