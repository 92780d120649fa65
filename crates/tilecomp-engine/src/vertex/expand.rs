use crate::coords::{CornerRadii, Mat4, Rect, Vec2};
use crate::error::LookupError;
use crate::instance::{InstanceRecord, MiscIndices, QUAD_VERTEX_COUNT, QuadCorner, TriangleHalf, quad_vertex};
use crate::tables::{FrameUniforms, TableSet};

use super::{FlatVaryings, Interpolants, VertexOutput};

/// An instance whose table references have been resolved.
///
/// All lookups happen here, once; producing vertices afterwards cannot fail.
#[derive(Debug, Copy, Clone)]
pub struct ResolvedInstance<'a> {
    record: &'a InstanceRecord,
    misc: MiscIndices,
    transform: &'a Mat4,
    flat: FlatVaryings,
}

impl<'a> ResolvedInstance<'a> {
    /// Decodes the misc vector and looks up the transform, clip and tile entries.
    pub fn resolve(record: &'a InstanceRecord, tables: &TableSet<'a>) -> Result<Self, LookupError> {
        let misc = record.misc();
        let transform = tables.transforms.get(misc.transform_index)?;
        let clip_in = *tables.clip_rects.get(misc.clip_in_index)?;
        let clip_out = *tables.clip_rects.get(misc.clip_out_index)?;
        let tile_params = *tables.tile_params.get(misc.tile_params_index)?;

        let sizes = record.texture_sizes;
        let flat = FlatVaryings {
            border_rect: Rect::from_xywh(record.border_rect),
            border_radii: CornerRadii::from_array(record.border_radii),
            src_texture_size: Vec2::new(sizes[0], sizes[1]),
            dst_texture_size: Vec2::new(sizes[2], sizes[3]),
            blur_radius: record.blur_radius,
            aux: record.aux,
            tile_params,
            clip_in,
            clip_out,
            border_corner_mode: misc.border_corner_mode,
        };

        Ok(Self { record, misc, transform, flat })
    }

    #[inline]
    pub fn misc(&self) -> MiscIndices {
        self.misc
    }

    #[inline]
    pub fn flat(&self) -> &FlatVaryings {
        &self.flat
    }

    /// Expands one vertex, given its logical corner and triangle half.
    pub fn vertex(&self, corner: QuadCorner, half: TriangleHalf, frame: &FrameUniforms) -> VertexOutput {
        let rect = self.record.position_rect();
        let local = rect.point_at(corner.unit());

        let p = self.transform.transform_point(local);
        let w = if p[3] != 0.0 { p[3] } else { 1.0 };
        let world = snap_to_device_pixels(Vec2::new(p[0] / w, p[1] / w), frame.device_pixel_ratio);
        let clip_position = frame.global_transform.transform_point(world);

        let color = if self.misc.border_corner_mode {
            match half {
                TriangleHalf::TopLeft => self.record.corner_color(QuadCorner::TopLeft),
                TriangleHalf::BottomRight => self.record.corner_color(QuadCorner::BottomRight),
            }
        } else {
            self.record.corner_color(corner)
        };

        VertexOutput {
            clip_position,
            interp: Interpolants {
                world_position: world,
                local_position: local - rect.origin,
                color,
                color_uv: self.record.color_uv(corner),
                mask_uv: self.record.mask_uv(corner),
            },
            flat: self.flat,
        }
    }

    /// Expands all six emitted vertices in ordinal order.
    pub fn quad(&self, frame: &FrameUniforms) -> [VertexOutput; QUAD_VERTEX_COUNT as usize] {
        core::array::from_fn(|ordinal| {
            let (corner, half) = quad_vertex(ordinal as u32);
            self.vertex(corner, half, frame)
        })
    }
}

/// Rounds a layout-pixel position to the device pixel grid.
#[inline]
pub fn snap_to_device_pixels(p: Vec2, device_pixel_ratio: f32) -> Vec2 {
    if device_pixel_ratio > 0.0 {
        (p * device_pixel_ratio).round() / device_pixel_ratio
    } else {
        p
    }
}

/// Expands a single vertex of `record`.
pub fn expand_vertex(
    record: &InstanceRecord,
    corner: QuadCorner,
    half: TriangleHalf,
    tables: &TableSet<'_>,
    frame: &FrameUniforms,
) -> Result<VertexOutput, LookupError> {
    Ok(ResolvedInstance::resolve(record, tables)?.vertex(corner, half, frame))
}

/// Expands the six vertices of `record`.
pub fn expand_quad(
    record: &InstanceRecord,
    tables: &TableSet<'_>,
    frame: &FrameUniforms,
) -> Result<[VertexOutput; QUAD_VERTEX_COUNT as usize], LookupError> {
    Ok(ResolvedInstance::resolve(record, tables)?.quad(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableKind;
    use crate::paint::Color;
    use crate::tables::{ClipRect, TileParams, UniformTables};
    use proptest::prelude::*;

    fn tables() -> UniformTables {
        let mut t = UniformTables::default();
        t.transforms.push(Mat4::identity()).unwrap();
        t.transforms.push(Mat4::translation(100.0, 50.0)).unwrap();
        t.clip_rects.push(ClipRect::new(Rect::new(0.0, 0.0, 1000.0, 1000.0))).unwrap();
        t.clip_rects.push(ClipRect::EMPTY).unwrap();
        t.tile_params.push(TileParams::single(Vec2::new(10.0, 10.0))).unwrap();
        t.tile_params.push(TileParams::new(Vec2::new(5.0, 5.0), Vec2::new(8.0, 8.0))).unwrap();
        t
    }

    const CORNER_COLORS: [Color; 4] = [
        Color::new(1.0, 0.0, 0.0, 1.0),
        Color::new(0.0, 1.0, 0.0, 1.0),
        Color::new(0.0, 0.0, 1.0, 1.0),
        Color::new(1.0, 1.0, 0.0, 1.0),
    ];

    #[test]
    fn plain_mode_colors_follow_corners() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(0.0, 0.0, 10.0, 10.0)).with_corner_colors(CORNER_COLORS);
        let verts = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap();
        for (ordinal, v) in verts.iter().enumerate() {
            let (corner, _) = quad_vertex(ordinal as u32);
            assert_eq!(v.interp.color, rec.corner_color(corner));
        }
    }

    #[test]
    fn corner_mode_broadcasts_diagonal_colors() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_corner_colors(CORNER_COLORS)
            .with_misc(MiscIndices::new(0, 0, 1, 0).with_border_corner_mode(true));
        let verts = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap();
        for v in &verts[..3] {
            assert_eq!(v.interp.color, CORNER_COLORS[0]);
        }
        for v in &verts[3..] {
            assert_eq!(v.interp.color, CORNER_COLORS[2]);
        }
        assert!(verts[0].flat.border_corner_mode);
    }

    #[test]
    fn transform_and_tables_are_resolved_by_index() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(1.0, 2.0, 10.0, 10.0)).with_misc(MiscIndices::new(1, 0, 1, 1));
        let v = expand_vertex(&rec, QuadCorner::BottomRight, TriangleHalf::BottomRight, &t.views(), &FrameUniforms::default())
            .unwrap();
        assert_eq!(v.interp.world_position, Vec2::new(111.0, 62.0));
        assert_eq!(v.interp.local_position, Vec2::new(10.0, 10.0));
        assert_eq!(v.flat.tile_params.tile_repeat, Vec2::new(8.0, 8.0));
        assert_eq!(v.flat.clip_out, ClipRect::EMPTY);
        assert_eq!(v.clip_position, [111.0, 62.0, 0.0, 1.0]);
    }

    #[test]
    fn uvs_come_from_top_and_bottom_rects() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(0.0, 0.0, 4.0, 4.0))
            .with_mask_uv_rect(Rect::new(0.25, 0.5, 0.5, 0.25));
        let verts = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap();
        assert_eq!(verts[0].interp.mask_uv, Vec2::new(0.25, 0.5));
        assert_eq!(verts[4].interp.mask_uv, Vec2::new(0.75, 0.75));
    }

    #[test]
    fn global_transform_and_snapping_apply_after_instance_transform() {
        let t = tables();
        let frame = FrameUniforms {
            global_transform: Mat4::scale(0.5, 0.5),
            device_pixel_ratio: 2.0,
        };
        let rec = InstanceRecord::new(Rect::new(0.3, 0.0, 1.0, 1.0));
        let v = expand_vertex(&rec, QuadCorner::TopLeft, TriangleHalf::TopLeft, &t.views(), &frame).unwrap();
        assert_eq!(v.interp.world_position, Vec2::new(0.5, 0.0));
        assert_eq!(v.clip_position, [0.25, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn out_of_range_transform_is_reported() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(0.0, 0.0, 1.0, 1.0)).with_misc(MiscIndices::new(9, 0, 0, 0));
        let err = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap_err();
        assert_eq!(err, LookupError::OutOfRange { table: TableKind::Transform, index: 9, len: 2 });
    }

    #[test]
    fn expansion_is_deterministic() {
        let t = tables();
        let rec = InstanceRecord::new(Rect::new(3.0, 4.0, 5.0, 6.0)).with_corner_colors(CORNER_COLORS);
        let a = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap();
        let b = expand_quad(&rec, &t.views(), &FrameUniforms::default()).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn negative_width_mirrors_every_corner(
            x in -500i32..500, y in -500i32..500, w in 1i32..300, h in 1i32..300,
        ) {
            let t = tables();
            let frame = FrameUniforms::default();
            let (x, y, w, h) = (x as f32, y as f32, w as f32, h as f32);
            let pos = InstanceRecord::new(Rect::new(x, y, w, h));
            let neg = InstanceRecord::new(Rect::new(x, y, -w, h));
            for corner in QuadCorner::ALL {
                let a = expand_vertex(&pos, corner, TriangleHalf::TopLeft, &t.views(), &frame).unwrap();
                let b = expand_vertex(&neg, corner, TriangleHalf::TopLeft, &t.views(), &frame).unwrap();
                prop_assert_eq!(b.interp.world_position.x, 2.0 * x - a.interp.world_position.x);
                prop_assert_eq!(b.interp.world_position.y, a.interp.world_position.y);
                prop_assert_eq!(b.interp.local_position.x, -a.interp.local_position.x);
            }
        }
    }
}
