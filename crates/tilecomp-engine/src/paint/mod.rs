//! Paint model: colors and gradient definitions.
//!
//! Geometry types remain in `coords`; the sampled ramp texture is
//! `fragment::GradientRamps`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, ExtendMode, LinearGradient};
