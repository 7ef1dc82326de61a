//! A camera axis bound to a device control
//!
//! An axis owns its binding by value: a single input handle, or a
//! composite built for this axis. Inversion from the wiring table lives
//! on the axis, not on the device's input, so binding a device never
//! changes what other readers of the same control see.

use camaxis_input::{CompositeInput, Deadband, Input};

/// The control an axis reads: one input, or a composite of several
#[derive(Debug, Clone)]
pub enum AxisSource {
    Single(Input),
    Composite(CompositeInput),
}

impl AxisSource {
    /// The source's normalized value in [-1, 1]
    pub fn normalized(&self) -> f64 {
        match self {
            AxisSource::Single(input) => input.normalized(),
            AxisSource::Composite(composite) => composite.normalized(),
        }
    }

    /// Add a deadband to the underlying input(s)
    pub fn add_deadband(&self, deadband: Deadband) {
        match self {
            AxisSource::Single(input) => input.add_deadband(deadband),
            AxisSource::Composite(composite) => composite.add_deadband(deadband),
        }
    }

    /// Remove all deadbands from the underlying input(s)
    pub fn clear_deadbands(&self) {
        match self {
            AxisSource::Single(input) => input.clear_deadbands(),
            AxisSource::Composite(composite) => composite.clear_deadbands(),
        }
    }
}

impl From<Input> for AxisSource {
    fn from(input: Input) -> Self {
        AxisSource::Single(input)
    }
}

impl From<CompositeInput> for AxisSource {
    fn from(composite: CompositeInput) -> Self {
        AxisSource::Composite(composite)
    }
}

/// One camera axis: a source plus the wiring table's inversion flag
#[derive(Debug, Clone)]
pub struct Axis {
    source: AxisSource,
    inverted: bool,
}

impl Axis {
    /// Bind an axis straight to one control
    pub fn direct(input: Input) -> Self {
        Self {
            source: input.into(),
            inverted: false,
        }
    }

    /// Bind an axis to one control with flipped polarity
    pub fn direct_inverted(input: Input) -> Self {
        Self::direct(input).with_inverted(true)
    }

    /// Bind an axis to two opposed controls (+1 positive, -1 negative)
    pub fn opposed(positive: Input, negative: Input) -> Self {
        CompositeInput::opposed(positive, negative).into()
    }

    /// Builder: set the inversion flag
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Whether the wiring table flips this axis's polarity
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// The commanded value in [-1, 1], inversion applied
    pub fn commanded(&self) -> f64 {
        let normalized = self.source.normalized();
        if self.inverted {
            -normalized
        } else {
            normalized
        }
    }

    /// Add a deadband to this axis's input(s)
    pub fn add_deadband(&self, deadband: Deadband) {
        self.source.add_deadband(deadband);
    }

    /// Remove all deadbands from this axis's input(s)
    pub fn clear_deadbands(&self) {
        self.source.clear_deadbands();
    }
}

impl From<Input> for Axis {
    fn from(input: Input) -> Self {
        Axis::direct(input)
    }
}

impl From<CompositeInput> for Axis {
    fn from(composite: CompositeInput) -> Self {
        Axis {
            source: composite.into(),
            inverted: false,
        }
    }
}
