//! Shared handles to scalar device controls
//!
//! A device descriptor owns one `Input` per physical control; a camera
//! controller clones the handles it binds. Clones share state, so a value
//! written by the device poll loop is visible to every bound axis.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Deadband, InputRange};

#[derive(Debug)]
struct InputState {
    range: InputRange,
    value: f64,
    inverted: bool,
    deadbands: Vec<Deadband>,
}

/// A cloneable handle to one scalar control
///
/// The handle carries the control's calibration range, its latest raw
/// value, an inversion flag, and any deadbands. `normalized` applies all
/// of these: range normalization, then deadband filtering, then inversion.
///
/// Handles use `Rc` internally and are not `Send`; the control model is
/// single-threaded and synchronous.
#[derive(Debug, Clone)]
pub struct Input {
    state: Rc<RefCell<InputState>>,
}

impl Input {
    /// Create an input with the given calibration, resting at neutral
    pub fn new(range: InputRange) -> Self {
        Self {
            state: Rc::new(RefCell::new(InputState {
                range,
                value: range.neutral,
                inverted: false,
                deadbands: Vec::new(),
            })),
        }
    }

    /// Create a unit bipolar input (-1 to 1, neutral 0)
    pub fn bipolar() -> Self {
        Self::new(InputRange::bipolar())
    }

    /// Create a button input (0 released, 1 pressed)
    pub fn button() -> Self {
        Self::new(InputRange::button())
    }

    /// The input's calibration range
    pub fn range(&self) -> InputRange {
        self.state.borrow().range
    }

    /// Store a raw value, as reported by the device
    pub fn set_value(&self, raw: f64) {
        self.state.borrow_mut().value = raw;
    }

    /// The latest raw value
    pub fn value(&self) -> f64 {
        self.state.borrow().value
    }

    /// Flip the sign of normalized values
    pub fn set_inverted(&self, inverted: bool) {
        self.state.borrow_mut().inverted = inverted;
    }

    /// Whether normalized values are sign-flipped
    pub fn is_inverted(&self) -> bool {
        self.state.borrow().inverted
    }

    /// Add a deadband applied to normalized values
    pub fn add_deadband(&self, deadband: Deadband) {
        self.state.borrow_mut().deadbands.push(deadband);
    }

    /// Remove all deadbands
    pub fn clear_deadbands(&self) {
        self.state.borrow_mut().deadbands.clear();
    }

    /// The normalized value in [-1, 1]
    ///
    /// Applies range normalization, then every deadband in insertion
    /// order, then the inversion flag.
    pub fn normalized(&self) -> f64 {
        let state = self.state.borrow();
        let mut normalized = state.range.normalize(state.value);
        for deadband in &state.deadbands {
            normalized = deadband.filter(normalized);
        }
        if state.inverted {
            -normalized
        } else {
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rests_at_neutral() {
        let input = Input::new(InputRange::new(0.0, 512.0, 1023.0));
        assert_eq!(input.value(), 512.0);
        assert_eq!(input.normalized(), 0.0);
    }

    #[test]
    fn test_clones_share_state() {
        let input = Input::bipolar();
        let handle = input.clone();
        input.set_value(0.75);
        assert_eq!(handle.value(), 0.75);
        assert_eq!(handle.normalized(), 0.75);
    }

    #[test]
    fn test_inversion() {
        let input = Input::bipolar();
        input.set_value(0.5);
        assert_eq!(input.normalized(), 0.5);
        input.set_inverted(true);
        assert_eq!(input.normalized(), -0.5);
        input.set_inverted(false);
        assert_eq!(input.normalized(), 0.5);
    }

    #[test]
    fn test_deadband_then_inversion() {
        let input = Input::bipolar();
        input.set_inverted(true);
        input.add_deadband(Deadband::symmetric(0.1));
        input.set_value(0.05);
        assert_eq!(input.normalized(), 0.0);
        input.set_value(0.5);
        assert_eq!(input.normalized(), -0.5);
    }

    #[test]
    fn test_clear_deadbands() {
        let input = Input::bipolar();
        input.add_deadband(Deadband::symmetric(0.2));
        input.set_value(0.1);
        assert_eq!(input.normalized(), 0.0);
        input.clear_deadbands();
        assert_eq!(input.normalized(), 0.1);
    }

    #[test]
    fn test_button_normalizes_unipolar() {
        let button = Input::button();
        assert_eq!(button.normalized(), 0.0);
        button.set_value(1.0);
        assert_eq!(button.normalized(), 1.0);
    }
}
