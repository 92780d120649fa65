//! Debug and glyph passes.
//!
//! Both work in straight alpha, so clipping scales alpha only.

use crate::paint::Color;

use super::{AlphaTexture, FragmentInput, FragmentPass, Sampler};

/// Outputs the interpolated vertex color, clipped.
#[derive(Debug, Copy, Clone, Default)]
pub struct DebugColorPass;

impl FragmentPass for DebugColorPass {
    fn name(&self) -> &'static str {
        "debug color"
    }

    fn shade(&self, frag: &FragmentInput<'_>) -> Option<Color> {
        Some(frag.interp.color.scale_alpha(frag.clip_mask()))
    }
}

/// Glyph compositing: the interpolated color with its alpha scaled by an alpha mask
/// and the clip mask.
///
/// Mask coordinates outside `[0, 1]` are left to the sampler's address mode.
#[derive(Debug, Copy, Clone)]
pub struct TextPass<'a> {
    pub mask: &'a AlphaTexture,
    pub sampler: Sampler,
}

impl<'a> TextPass<'a> {
    #[inline]
    pub fn new(mask: &'a AlphaTexture, sampler: Sampler) -> Self {
        Self { mask, sampler }
    }
}

impl FragmentPass for TextPass<'_> {
    fn name(&self) -> &'static str {
        "text"
    }

    fn shade(&self, frag: &FragmentInput<'_>) -> Option<Color> {
        let coverage = self.mask.sample(frag.interp.mask_uv, &self.sampler);
        Some(frag.interp.color.scale_alpha(coverage * frag.clip_mask()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect, Vec2};
    use crate::tables::{ClipRect, TileParams};
    use crate::vertex::{FlatVaryings, Interpolants};
    use wgpu::{AddressMode, FilterMode};

    fn flat(clip_in: Rect, clip_out: Rect) -> FlatVaryings {
        FlatVaryings {
            border_rect: Rect::default(),
            border_radii: CornerRadii::zero(),
            src_texture_size: Vec2::zero(),
            dst_texture_size: Vec2::zero(),
            blur_radius: 0.0,
            aux: 0,
            tile_params: TileParams::default(),
            clip_in: ClipRect::new(clip_in),
            clip_out: ClipRect::new(clip_out),
            border_corner_mode: false,
        }
    }

    fn unclipped() -> FlatVaryings {
        flat(Rect::new(0.0, 0.0, 100.0, 100.0), Rect::default())
    }

    fn frag_at<'a>(flat: &'a FlatVaryings, world: Vec2, color: Color, mask_uv: Vec2) -> FragmentInput<'a> {
        FragmentInput {
            frag_coord: world,
            interp: Interpolants {
                world_position: world,
                color,
                mask_uv,
                ..Interpolants::default()
            },
            flat,
        }
    }

    #[test]
    fn mask_scales_alpha_only() {
        let mask = AlphaTexture::new(2, 1, vec![255, 51]).unwrap();
        let pass = TextPass::new(&mask, Sampler::new(AddressMode::ClampToEdge, FilterMode::Nearest));
        let flat = unclipped();
        let frag = frag_at(&flat, Vec2::new(1.0, 1.0), Color::new(0.2, 0.4, 0.6, 1.0), Vec2::new(0.75, 0.5));
        assert_eq!(pass.shade(&frag), Some(Color::new(0.2, 0.4, 0.6, 0.2)));
    }

    #[test]
    fn debug_pass_passes_color_through() {
        let flat = unclipped();
        let frag = frag_at(&flat, Vec2::new(1.0, 1.0), Color::RED, Vec2::zero());
        assert_eq!(DebugColorPass.shade(&frag), Some(Color::RED));
    }

    #[test]
    fn debug_pass_honors_clip_in_and_clip_out() {
        let flat = flat(Rect::new(0.0, 0.0, 4.0, 8.0), Rect::new(0.0, 0.0, 2.0, 2.0));
        let shade = |x: f32, y: f32| DebugColorPass.shade(&frag_at(&flat, Vec2::new(x, y), Color::RED, Vec2::zero()));

        assert_eq!(shade(3.5, 3.5), Some(Color::RED));
        assert_eq!(shade(6.5, 6.5).map(|c| c.a), Some(0.0));
        assert_eq!(shade(1.5, 1.5).map(|c| c.a), Some(0.0));
    }

    #[test]
    fn text_pass_honors_clip_in_and_clip_out() {
        let mask = AlphaTexture::new(1, 1, vec![255]).unwrap();
        let pass = TextPass::new(&mask, Sampler::default());
        let flat = flat(Rect::new(0.0, 0.0, 4.0, 8.0), Rect::new(0.0, 0.0, 2.0, 2.0));
        let shade = |x: f32, y: f32| pass.shade(&frag_at(&flat, Vec2::new(x, y), Color::RED, Vec2::splat(0.5)));

        assert_eq!(shade(3.5, 3.5), Some(Color::RED));
        assert_eq!(shade(6.5, 6.5).map(|c| c.a), Some(0.0));
        assert_eq!(shade(1.5, 1.5).map(|c| c.a), Some(0.0));
    }
}
