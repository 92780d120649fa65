//! Linear gradient fill pass.

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::error::LookupError;
use crate::instance::{InstanceRecord, MiscIndices, low7};
use crate::paint::{Color, ExtendMode, LinearGradient};
use crate::vertex::FlatVaryings;

use super::{FragmentInput, FragmentPass, GradientRamps, dither};

/// Bit of the auxiliary field holding the extend mode (set = repeat).
const REPEAT_BIT: u32 = 1 << 7;

/// Gradient fields packed into an instance's auxiliary word.
///
/// Bits 0–6: ramp row. Bit 7: extend mode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GradientAux {
    pub ramp_row: u32,
    pub extend: ExtendMode,
}

impl GradientAux {
    #[inline]
    pub fn decode(aux: u32) -> Self {
        Self {
            ramp_row: low7(aux),
            extend: if aux & REPEAT_BIT != 0 { ExtendMode::Repeat } else { ExtendMode::Clamp },
        }
    }

    /// Packs the fields. Rows above 127 do not fit and are truncated to 7 bits.
    #[inline]
    pub fn encode(self) -> u32 {
        let repeat = match self.extend {
            ExtendMode::Clamp => 0,
            ExtendMode::Repeat => REPEAT_BIT,
        };
        low7(self.ramp_row) | repeat
    }
}

/// Inputs of the gradient algorithm, gathered from the varyings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradientParams {
    pub tile_size: Vec2,
    pub tile_repeat: Vec2,
    pub start: Vec2,
    /// Axis direction divided by its squared length.
    pub scaled_direction: Vec2,
    pub ramp_row: u32,
    pub extend: ExtendMode,
}

impl LinearGradientParams {
    /// Reads the gradient's interpretation of the generic instance fields:
    /// the axis from the border rect, the ramp address from the aux word.
    pub fn from_flat(flat: &FlatVaryings) -> Self {
        let aux = GradientAux::decode(flat.aux);
        Self {
            tile_size: flat.tile_params.tile_size,
            tile_repeat: flat.tile_params.tile_repeat,
            start: flat.border_rect.origin,
            scaled_direction: flat.border_rect.size,
            ramp_row: aux.ramp_row,
            extend: aux.extend,
        }
    }

    /// Offset along the gradient axis, or `None` where the position falls in a
    /// gap between repeated tiles.
    pub fn offset_at(&self, local_position: Vec2) -> Option<f32> {
        let pos = local_position.rem_euclid(self.tile_repeat);
        if pos.x >= self.tile_size.x || pos.y >= self.tile_size.y {
            return None;
        }
        Some((pos - self.start).dot(self.scaled_direction))
    }
}

/// Builds the instance record for a linear gradient over `rect`.
///
/// `ramp_row` is the row returned by [`GradientRamps::add`] for the gradient's stops.
pub fn linear_gradient_instance(rect: Rect, gradient: &LinearGradient, ramp_row: u32, misc: MiscIndices) -> InstanceRecord {
    let axis = Rect::from_origin_size(gradient.start, gradient.scaled_direction());
    InstanceRecord::new(rect)
        .with_color(Color::WHITE)
        .with_border(axis, CornerRadii::zero())
        .with_aux(GradientAux { ramp_row, extend: gradient.extend }.encode())
        .with_misc(misc)
}

/// Fills with a tiled linear gradient, masked by the instance's clip rects.
///
/// With dithering on, the ramp color is offset by the ordered-dither noise of
/// the target pixel before the clip mask applies.
#[derive(Debug, Copy, Clone)]
pub struct LinearGradientPass<'a> {
    pub ramps: &'a GradientRamps,
    pub dithering: bool,
}

impl<'a> LinearGradientPass<'a> {
    /// A pass without dithering.
    #[inline]
    pub fn new(ramps: &'a GradientRamps) -> Self {
        Self { ramps, dithering: false }
    }

    #[inline]
    pub fn with_dithering(mut self, on: bool) -> Self {
        self.dithering = on;
        self
    }
}

impl FragmentPass for LinearGradientPass<'_> {
    fn name(&self) -> &'static str {
        "linear gradient"
    }

    fn validate(&self, flat: &FlatVaryings) -> Result<(), LookupError> {
        self.ramps.row(GradientAux::decode(flat.aux).ramp_row).map(|_| ())
    }

    fn shade(&self, frag: &FragmentInput<'_>) -> Option<Color> {
        let params = LinearGradientParams::from_flat(frag.flat);
        let offset = params.offset_at(frag.interp.local_position)?;
        // `validate` rejected unknown rows before any fragment ran.
        let mut color = self.ramps.sample(params.ramp_row, offset, params.extend).ok()?;
        if self.dithering {
            color = dither(color, frag.frag_coord);
        }
        Some(color.scale(frag.clip_mask()))
    }
}
