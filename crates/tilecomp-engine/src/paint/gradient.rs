use crate::coords::Vec2;

use super::Color;

/// Gradient sampling policy outside the `[0, 1]` ramp domain.
///
/// Selected once per primitive; the two modes are never mixed within one draw of it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ExtendMode {
    /// Hold the edge stop colors.
    #[default]
    Clamp,
    /// Wrap the offset periodically.
    Repeat,
}

impl ExtendMode {
    /// Maps an unbounded gradient offset into the ramp domain `[0, 1]`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            ExtendMode::Clamp => t.clamp(0.0, 1.0),
            ExtendMode::Repeat => t - t.floor(),
        }
    }
}

/// A single gradient stop.
///
/// `offset` is expected in `[0, 1]` and stops are expected in ascending order;
/// ramp construction rejects anything else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient definition in the primitive's local space.
///
/// Semantics:
/// - `start` and `end` are relative to the primitive origin.
/// - `extend` defines behavior beyond the end points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub extend: ExtendMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, extend: ExtendMode) -> Self {
        Self { start, end, stops, extend }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.offset.is_finite() && s.color.is_finite())
            && self.end != self.start
    }

    /// Direction pre-scaled so that `dot(p - start, dir)` is 0 at `start` and 1 at `end`.
    ///
    /// A degenerate (zero-length) axis yields a zero vector, which pins every
    /// sample to offset 0.
    pub fn scaled_direction(&self) -> Vec2 {
        let d = self.end - self.start;
        let len2 = d.length_squared();
        if len2 > 0.0 { d / len2 } else { Vec2::zero() }
    }
}
