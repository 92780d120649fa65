use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Color;
use crate::tables::{ClipRect, TileParams};

/// Per-vertex outputs that the rasterizer interpolates across a triangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Interpolants {
    /// Snapped position after the instance transform, before the global transform.
    /// Clip tests run in this space.
    pub world_position: Vec2,
    /// Position inside the instance rectangle, relative to its origin.
    pub local_position: Vec2,
    pub color: Color,
    pub color_uv: Vec2,
    pub mask_uv: Vec2,
}

impl Interpolants {
    /// Interpolates three vertices with barycentric weights `w` (summing to 1).
    ///
    /// Evaluated relative to the first vertex, so an attribute that is equal at
    /// all three vertices comes out exactly unchanged.
    pub fn barycentric(v: [&Interpolants; 3], w: [f32; 3]) -> Self {
        let v2 = |f: fn(&Interpolants) -> Vec2| {
            let (a, b, c) = (f(v[0]), f(v[1]), f(v[2]));
            a + (b - a) * w[1] + (c - a) * w[2]
        };
        let ch = |f: fn(&Color) -> f32| {
            let (a, b, c) = (f(&v[0].color), f(&v[1].color), f(&v[2].color));
            a + (b - a) * w[1] + (c - a) * w[2]
        };
        Self {
            world_position: v2(|i| i.world_position),
            local_position: v2(|i| i.local_position),
            color: Color::new(ch(|c| c.r), ch(|c| c.g), ch(|c| c.b), ch(|c| c.a)),
            color_uv: v2(|i| i.color_uv),
            mask_uv: v2(|i| i.mask_uv),
        }
    }
}

/// Per-instance outputs, identical for every vertex of the quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatVaryings {
    pub border_rect: Rect,
    pub border_radii: CornerRadii,
    pub src_texture_size: Vec2,
    pub dst_texture_size: Vec2,
    pub blur_radius: f32,
    pub aux: u32,
    pub tile_params: TileParams,
    pub clip_in: ClipRect,
    pub clip_out: ClipRect,
    pub border_corner_mode: bool,
}

/// Everything vertex expansion produces for one vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    pub clip_position: [f32; 4],
    pub interp: Interpolants,
    pub flat: FlatVaryings,
}
