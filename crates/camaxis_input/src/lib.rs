//! Scalar input pipeline for camera control
//!
//! This crate provides the building blocks for turning raw device controls
//! into normalized axis values:
//!
//! - [`InputRange`] - Calibration (minimum, neutral, maximum) of one control
//! - [`Deadband`] - A band of normalized values snapped to its midpoint
//! - [`Input`] - A cloneable handle to one scalar control
//! - [`CompositeInput`] - A signed weighted combination of inputs

mod range;
mod deadband;
mod input;
mod composite;

pub use range::InputRange;
pub use deadband::Deadband;
pub use input::Input;
pub use composite::CompositeInput;
