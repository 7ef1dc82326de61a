//! Derived inputs combining several controls into one signed value
//!
//! The common case is two buttons forming one bidirectional axis: a hat's
//! north direction with coefficient +1 and its south direction with -1.

use crate::{Deadband, Input};

/// A signed weighted combination of inputs
///
/// The normalized value is the coefficient-weighted sum of the parts'
/// normalized values, clamped to [-1, 1]. With a +1/-1 button pair this
/// yields +1, -1, or 0 (neither or both pressed).
///
/// Composites are plain values: an axis that uses one owns it outright.
#[derive(Debug, Clone, Default)]
pub struct CompositeInput {
    parts: Vec<(Input, f64)>,
}

impl CompositeInput {
    /// Create an empty composite
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Create a composite of two opposed controls: `positive` with
    /// coefficient +1 and `negative` with coefficient -1
    pub fn opposed(positive: Input, negative: Input) -> Self {
        Self::new().with(positive, 1.0).with(negative, -1.0)
    }

    /// Add a part with the given coefficient
    pub fn add(&mut self, input: Input, coefficient: f64) {
        self.parts.push((input, coefficient));
    }

    /// Builder: add a part with the given coefficient
    pub fn with(mut self, input: Input, coefficient: f64) -> Self {
        self.add(input, coefficient);
        self
    }

    /// The combined normalized value in [-1, 1]
    pub fn normalized(&self) -> f64 {
        let sum: f64 = self
            .parts
            .iter()
            .map(|(input, coefficient)| coefficient * input.normalized())
            .sum();
        sum.clamp(-1.0, 1.0)
    }

    /// Add a deadband to every part
    pub fn add_deadband(&self, deadband: Deadband) {
        for (input, _) in &self.parts {
            input.add_deadband(deadband);
        }
    }

    /// Remove all deadbands from every part
    pub fn clear_deadbands(&self) {
        for (input, _) in &self.parts {
            input.clear_deadbands();
        }
    }
}
