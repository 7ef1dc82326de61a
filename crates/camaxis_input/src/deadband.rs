//! Deadband filtering for normalized values
//!
//! A deadband suppresses jitter around a resting point: any normalized
//! value strictly inside the band is snapped to the band's midpoint.

use serde::{Serialize, Deserialize};

/// A band of normalized values snapped to its midpoint
///
/// Deadbands operate on normalized values, so one deadband is meaningful
/// across controls with different raw calibrations. A band centered on 0
/// (the common case) snaps small values to exactly 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deadband {
    lower: f64,
    upper: f64,
}

impl Deadband {
    /// Create a deadband over `(lower, upper)`; bounds are reordered if reversed
    pub fn new(lower: f64, upper: f64) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self { lower: upper, upper: lower }
        }
    }

    /// Create a deadband of `(-half_width, half_width)` around 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width.abs(), half_width.abs())
    }

    /// Lower bound of the band
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the band
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Snap values strictly inside the band to its midpoint; pass others through
    pub fn filter(&self, value: f64) -> f64 {
        if self.lower < value && value < self.upper {
            (self.lower + self.upper) / 2.0
        } else {
            value
        }
    }
}
