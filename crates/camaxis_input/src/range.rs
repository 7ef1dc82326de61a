//! Calibration ranges for scalar controls
//!
//! An InputRange describes the raw values a control reports: its minimum,
//! its neutral (resting) value, and its maximum. Normalization maps raw
//! values into [-1, 1] with the neutral value at 0.

use serde::{Serialize, Deserialize};

/// Calibration of one scalar control
///
/// The neutral value does not have to sit halfway between minimum and
/// maximum; normalization is piecewise around it. A pressed/released
/// button is modeled as (0, 0, 1) and normalizes to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    /// Smallest raw value the control reports
    pub minimum: f64,
    /// Raw value of the control at rest
    pub neutral: f64,
    /// Largest raw value the control reports
    pub maximum: f64,
}

impl InputRange {
    /// Create a range from explicit minimum, neutral, and maximum values
    pub const fn new(minimum: f64, neutral: f64, maximum: f64) -> Self {
        Self { minimum, neutral, maximum }
    }

    /// A unit bipolar range: -1 to 1 with neutral at 0
    pub const fn bipolar() -> Self {
        Self::new(-1.0, 0.0, 1.0)
    }

    /// A button range: 0 (released) to 1 (pressed), neutral released
    pub const fn button() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Map a raw value into [-1, 1] with the neutral value at 0
    ///
    /// Values above neutral scale by the neutral-to-maximum span, values
    /// below by the minimum-to-neutral span. Out-of-range raw values clamp
    /// to the nearest bound.
    pub fn normalize(&self, raw: f64) -> f64 {
        let span = if raw >= self.neutral {
            self.maximum - self.neutral
        } else {
            self.neutral - self.minimum
        };

        // Degenerate span (e.g. a button at rest) normalizes to neutral
        if span.abs() < f64::EPSILON {
            return 0.0;
        }

        ((raw - self.neutral) / span).clamp(-1.0, 1.0)
    }
}
