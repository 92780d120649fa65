//! Per-primitive fragment passes and the resources they sample.
//!
//! A pass returns `None` to discard the fragment; nothing is written for it.

mod clip;
pub mod dither;
pub mod gradient;
mod ramp;
pub mod text;
mod texture;

pub use clip::clip_mask;
pub use dither::dither;
pub use gradient::{GradientAux, LinearGradientParams, LinearGradientPass, linear_gradient_instance};
pub use ramp::{GradientRamps, MAX_RAMP_ROWS};
pub use text::{DebugColorPass, TextPass};
pub use texture::{AlphaTexture, Sampler};

use crate::coords::Vec2;
use crate::error::LookupError;
use crate::paint::Color;
use crate::vertex::{FlatVaryings, Interpolants};

/// What a pass sees for one covered pixel.
#[derive(Debug, Copy, Clone)]
pub struct FragmentInput<'a> {
    /// Pixel center in target pixels, like `gl_FragCoord.xy`.
    pub frag_coord: Vec2,
    pub interp: Interpolants,
    pub flat: &'a FlatVaryings,
}

/// A fragment program.
pub trait FragmentPass {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Checks the pass's own lookups for one instance before any of its fragments run.
    fn validate(&self, _flat: &FlatVaryings) -> Result<(), LookupError> {
        Ok(())
    }

    /// Shades one fragment; `None` discards it.
    ///
    /// Every pass multiplies its output by [`FragmentInput::clip_mask`].
    fn shade(&self, frag: &FragmentInput<'_>) -> Option<Color>;
}

impl FragmentInput<'_> {
    /// Clip-in / clip-out mask at this fragment's world position.
    #[inline]
    pub fn clip_mask(&self) -> f32 {
        clip_mask(self.interp.world_position, &self.flat.clip_in, &self.flat.clip_out)
    }
}
