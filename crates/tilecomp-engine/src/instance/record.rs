use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::Color;

use super::{MiscIndices, QuadCorner};

/// Per-instance attribute record, one per drawn quad.
///
/// Layout (216 bytes, all components 32-bit):
///
///  offset   0  position_rect    [f32; 4]   loc 0   x, y, w, h (negative w/h flips)
///  offset  16  color_tl         [f32; 4]   loc 1
///  offset  32  color_tr         [f32; 4]   loc 2
///  offset  48  color_br         [f32; 4]   loc 3
///  offset  64  color_bl         [f32; 4]   loc 4
///  offset  80  color_uv_top     [f32; 4]   loc 5   TL uv, TR uv
///  offset  96  color_uv_bottom  [f32; 4]   loc 6   BR uv, BL uv
///  offset 112  mask_uv_top      [f32; 4]   loc 7
///  offset 128  mask_uv_bottom   [f32; 4]   loc 8
///  offset 144  border_rect      [f32; 4]   loc 9
///  offset 160  border_radii     [f32; 4]   loc 10  tl, tr, br, bl
///  offset 176  texture_sizes    [f32; 4]   loc 11  src w, h, dst w, h
///  offset 192  blur_radius      f32        loc 12
///  offset 196  aux              u32        loc 13  packed small fields
///  offset 200  misc             [f32; 4]   loc 14  see `MiscIndices`
///
/// How the color and border fields are interpreted is up to each primitive
/// type; the gradient pass, for example, keeps its axis in `border_rect`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceRecord {
    pub position_rect: [f32; 4],
    pub color_tl: [f32; 4],
    pub color_tr: [f32; 4],
    pub color_br: [f32; 4],
    pub color_bl: [f32; 4],
    pub color_uv_top: [f32; 4],
    pub color_uv_bottom: [f32; 4],
    pub mask_uv_top: [f32; 4],
    pub mask_uv_bottom: [f32; 4],
    pub border_rect: [f32; 4],
    pub border_radii: [f32; 4],
    pub texture_sizes: [f32; 4],
    pub blur_radius: f32,
    pub aux: u32,
    pub misc: [f32; 4],
}

impl InstanceRecord {
    const ATTRS: [wgpu::VertexAttribute; 15] = wgpu::vertex_attr_array![
        0 => Float32x4,  // position_rect
        1 => Float32x4,  // color_tl
        2 => Float32x4,  // color_tr
        3 => Float32x4,  // color_br
        4 => Float32x4,  // color_bl
        5 => Float32x4,  // color_uv_top
        6 => Float32x4,  // color_uv_bottom
        7 => Float32x4,  // mask_uv_top
        8 => Float32x4,  // mask_uv_bottom
        9 => Float32x4,  // border_rect
        10 => Float32x4, // border_radii
        11 => Float32x4, // texture_sizes
        12 => Float32,   // blur_radius
        13 => Uint32,    // aux
        14 => Float32x4  // misc
    ];

    /// Instance-rate vertex buffer layout matching the struct.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRecord>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    /// A quad over `rect` using table entry 0 everywhere, with unit uv rectangles.
    pub fn new(rect: Rect) -> Self {
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        Self {
            position_rect: rect.to_xywh(),
            ..Self::zeroed()
        }
        .with_color_uv_rect(unit)
        .with_mask_uv_rect(unit)
        .with_misc(MiscIndices::default())
    }

    /// Same color on all four corners.
    pub fn with_color(self, color: Color) -> Self {
        self.with_corner_colors([color; 4])
    }

    /// Corner colors in TL, TR, BR, BL order.
    pub fn with_corner_colors(mut self, colors: [Color; 4]) -> Self {
        self.color_tl = colors[0].to_array();
        self.color_tr = colors[1].to_array();
        self.color_br = colors[2].to_array();
        self.color_bl = colors[3].to_array();
        self
    }

    /// Explicit per-corner color uvs in TL, TR, BR, BL order.
    pub fn with_color_uvs(mut self, uvs: [Vec2; 4]) -> Self {
        (self.color_uv_top, self.color_uv_bottom) = pack_uvs(uvs);
        self
    }

    /// Explicit per-corner mask uvs in TL, TR, BR, BL order.
    pub fn with_mask_uvs(mut self, uvs: [Vec2; 4]) -> Self {
        (self.mask_uv_top, self.mask_uv_bottom) = pack_uvs(uvs);
        self
    }

    /// Maps the quad onto an axis-aligned uv rectangle of the color texture.
    pub fn with_color_uv_rect(self, uv: Rect) -> Self {
        self.with_color_uvs(rect_uvs(uv))
    }

    /// Maps the quad onto an axis-aligned uv rectangle of the mask texture.
    pub fn with_mask_uv_rect(self, uv: Rect) -> Self {
        self.with_mask_uvs(rect_uvs(uv))
    }

    pub fn with_border(mut self, rect: Rect, radii: CornerRadii) -> Self {
        self.border_rect = rect.to_xywh();
        self.border_radii = radii.to_array();
        self
    }

    pub fn with_texture_sizes(mut self, src: Vec2, dst: Vec2) -> Self {
        self.texture_sizes = [src.x, src.y, dst.x, dst.y];
        self
    }

    pub fn with_blur_radius(mut self, radius: f32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn with_aux(mut self, aux: u32) -> Self {
        self.aux = aux;
        self
    }

    pub fn with_misc(mut self, misc: MiscIndices) -> Self {
        self.misc = misc.encode();
        self
    }

    #[inline]
    pub fn position_rect(&self) -> Rect {
        Rect::from_xywh(self.position_rect)
    }

    /// Decodes the misc vector.
    #[inline]
    pub fn misc(&self) -> MiscIndices {
        MiscIndices::decode(self.misc)
    }

    #[inline]
    pub fn corner_color(&self, corner: QuadCorner) -> Color {
        Color::from_array(match corner {
            QuadCorner::TopLeft => self.color_tl,
            QuadCorner::TopRight => self.color_tr,
            QuadCorner::BottomRight => self.color_br,
            QuadCorner::BottomLeft => self.color_bl,
        })
    }

    #[inline]
    pub fn color_uv(&self, corner: QuadCorner) -> Vec2 {
        select_uv(self.color_uv_top, self.color_uv_bottom, corner)
    }

    #[inline]
    pub fn mask_uv(&self, corner: QuadCorner) -> Vec2 {
        select_uv(self.mask_uv_top, self.mask_uv_bottom, corner)
    }
}

/// Top rectangle carries TL then TR; bottom carries BR then BL.
#[inline]
fn select_uv(top: [f32; 4], bottom: [f32; 4], corner: QuadCorner) -> Vec2 {
    match corner {
        QuadCorner::TopLeft => Vec2::new(top[0], top[1]),
        QuadCorner::TopRight => Vec2::new(top[2], top[3]),
        QuadCorner::BottomRight => Vec2::new(bottom[0], bottom[1]),
        QuadCorner::BottomLeft => Vec2::new(bottom[2], bottom[3]),
    }
}

fn pack_uvs(uvs: [Vec2; 4]) -> ([f32; 4], [f32; 4]) {
    let [tl, tr, br, bl] = uvs;
    ([tl.x, tl.y, tr.x, tr.y], [br.x, br.y, bl.x, bl.y])
}

fn rect_uvs(uv: Rect) -> [Vec2; 4] {
    QuadCorner::ALL.map(|corner| uv.point_at(corner.unit()))
}
