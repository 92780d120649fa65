//! Reference rasterizer.
//!
//! Drives vertex expansion and a fragment pass over a [`Target`] the way the
//! fixed-function stage would: six vertices per instance, two triangles, pixel
//! centers sampled with edge functions and a top-left fill rule so that the
//! shared diagonal is shaded exactly once.

mod target;

pub use target::{BlendMode, Target};

use log::{debug, warn};

use crate::coords::Vec2;
use crate::fragment::{FragmentInput, FragmentPass};
use crate::instance::InstanceRecord;
use crate::tables::{FrameUniforms, TableSet};
use crate::vertex::{FlatVaryings, Interpolants, ResolvedInstance, VertexOutput};

/// Counters for one [`draw`] call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub instances_drawn: u32,
    pub instances_skipped: u32,
    pub fragments_shaded: u64,
    pub fragments_discarded: u64,
}

/// Rasterizes `instances` into `target` with `pass`.
///
/// Instances whose table indices (or pass-specific lookups) are out of range are
/// skipped and logged; the rest of the draw continues.
pub fn draw(
    target: &mut Target,
    instances: &[InstanceRecord],
    tables: &TableSet<'_>,
    frame: &FrameUniforms,
    pass: &dyn FragmentPass,
    blend: BlendMode,
) -> DrawStats {
    let mut stats = DrawStats::default();

    for (i, record) in instances.iter().enumerate() {
        let resolved = match ResolvedInstance::resolve(record, tables) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping instance {i}: {e}");
                stats.instances_skipped += 1;
                continue;
            }
        };
        if let Err(e) = pass.validate(resolved.flat()) {
            warn!("skipping instance {i} in {} pass: {e}", pass.name());
            stats.instances_skipped += 1;
            continue;
        }

        let verts = resolved.quad(frame);
        for tri in verts.chunks_exact(3) {
            raster_triangle(target, [&tri[0], &tri[1], &tri[2]], resolved.flat(), pass, blend, &mut stats);
        }
        stats.instances_drawn += 1;
    }

    debug!(
        "{} pass: {} instances drawn, {} skipped, {} fragments shaded, {} discarded",
        pass.name(),
        stats.instances_drawn,
        stats.instances_skipped,
        stats.fragments_shaded,
        stats.fragments_discarded,
    );
    stats
}

/// Clip space to target pixels, y down.
fn to_pixels(clip: [f32; 4], width: f32, height: f32) -> Vec2 {
    let w = if clip[3] != 0.0 { clip[3] } else { 1.0 };
    let (x, y) = (clip[0] / w, clip[1] / w);
    Vec2::new((x + 1.0) * 0.5 * width, (1.0 - y) * 0.5 * height)
}

#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Top or left edge of a triangle with positive [`edge`] area (clockwise, y down).
#[inline]
fn is_top_left(a: Vec2, b: Vec2) -> bool {
    (a.y == b.y && b.x > a.x) || b.y < a.y
}

#[inline]
fn covers(w: f32, top_left: bool) -> bool {
    w > 0.0 || (w == 0.0 && top_left)
}

fn raster_triangle(
    target: &mut Target,
    tri: [&VertexOutput; 3],
    flat: &FlatVaryings,
    pass: &dyn FragmentPass,
    blend: BlendMode,
    stats: &mut DrawStats,
) {
    let (tw, th) = (target.width() as f32, target.height() as f32);
    let mut v = tri;
    let mut p = [
        to_pixels(v[0].clip_position, tw, th),
        to_pixels(v[1].clip_position, tw, th),
        to_pixels(v[2].clip_position, tw, th),
    ];

    let mut area = edge(p[0], p[1], p[2]);
    if !area.is_finite() || area == 0.0 {
        return;
    }
    // Mirrored quads arrive counter-clockwise.
    if area < 0.0 {
        v.swap(1, 2);
        p.swap(1, 2);
        area = -area;
    }

    let min_x = p[0].x.min(p[1].x).min(p[2].x).floor().max(0.0);
    let min_y = p[0].y.min(p[1].y).min(p[2].y).floor().max(0.0);
    let max_x = p[0].x.max(p[1].x).max(p[2].x).ceil().min(tw);
    let max_y = p[0].y.max(p[1].y).max(p[2].y).ceil().min(th);
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let tl = [is_top_left(p[1], p[2]), is_top_left(p[2], p[0]), is_top_left(p[0], p[1])];
    let interps = [&v[0].interp, &v[1].interp, &v[2].interp];

    for y in min_y as u32..max_y as u32 {
        for x in min_x as u32..max_x as u32 {
            let c = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w = [edge(p[1], p[2], c), edge(p[2], p[0], c), edge(p[0], p[1], c)];
            if !(covers(w[0], tl[0]) && covers(w[1], tl[1]) && covers(w[2], tl[2])) {
                continue;
            }

            let frag = FragmentInput {
                frag_coord: c,
                interp: Interpolants::barycentric(interps, [w[0] / area, w[1] / area, w[2] / area]),
                flat,
            };
            match pass.shade(&frag) {
                Some(color) => {
                    target.blend_pixel(x, y, color, blend);
                    stats.fragments_shaded += 1;
                }
                None => stats.fragments_discarded += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Mat4, Rect};
    use crate::fragment::DebugColorPass;
    use crate::instance::MiscIndices;
    use crate::paint::Color;
    use crate::tables::{ClipRect, TileParams, UniformTables};

    fn setup(target: &Target) -> (UniformTables, FrameUniforms) {
        let mut t = UniformTables::default();
        t.transforms.push(Mat4::identity()).unwrap();
        t.clip_rects
            .push(ClipRect::new(Rect::new(0.0, 0.0, target.width() as f32, target.height() as f32)))
            .unwrap();
        t.clip_rects.push(ClipRect::EMPTY).unwrap();
        t.tile_params.push(TileParams::default()).unwrap();
        let frame = FrameUniforms {
            global_transform: target.viewport().projection(),
            ..FrameUniforms::default()
        };
        (t, frame)
    }

    /// Clipped to the whole target, nothing punched out.
    fn quad(rect: Rect) -> InstanceRecord {
        InstanceRecord::new(rect).with_misc(MiscIndices::new(0, 0, 1, 0))
    }

    fn covered(target: &Target) -> usize {
        target.pixels().iter().filter(|c| c.a > 0.0).count()
    }

    #[test]
    fn quad_covers_each_pixel_once() {
        let mut target = Target::new(8, 8);
        let (t, frame) = setup(&target);
        let rec = quad(Rect::new(2.0, 2.0, 4.0, 4.0)).with_color(Color::RED);
        let stats = draw(&mut target, &[rec], &t.views(), &frame, &DebugColorPass, BlendMode::Replace);

        assert_eq!(stats.instances_drawn, 1);
        assert_eq!(stats.fragments_shaded, 16);
        assert_eq!(covered(&target), 16);
        assert_eq!(target.pixel(2, 2), Color::RED);
        assert_eq!(target.pixel(5, 5), Color::RED);
        assert_eq!(target.pixel(6, 6), Color::TRANSPARENT);
    }

    #[test]
    fn adjacent_quads_do_not_overlap() {
        let mut target = Target::new(8, 4);
        let (t, frame) = setup(&target);
        let half = Color::new(1.0, 1.0, 1.0, 0.5);
        let recs = [
            quad(Rect::new(0.0, 0.0, 4.0, 4.0)).with_color(half),
            quad(Rect::new(4.0, 0.0, 4.0, 4.0)).with_color(half),
        ];
        let stats = draw(&mut target, &recs, &t.views(), &frame, &DebugColorPass, BlendMode::Over);
        assert_eq!(stats.fragments_shaded, 32);
        assert!(target.pixels().iter().all(|c| c.a == 0.5));
    }

    #[test]
    fn mirrored_quad_covers_same_pixels() {
        let mut target = Target::new(8, 8);
        let (t, frame) = setup(&target);
        let rec = quad(Rect::new(6.0, 2.0, -4.0, 4.0)).with_color(Color::RED);
        let stats = draw(&mut target, &[rec], &t.views(), &frame, &DebugColorPass, BlendMode::Replace);
        assert_eq!(stats.fragments_shaded, 16);
        assert_eq!(target.pixel(2, 2), Color::RED);
        assert_eq!(target.pixel(1, 2), Color::TRANSPARENT);
    }

    #[test_log::test]
    fn out_of_range_instance_is_skipped() {
        let mut target = Target::new(4, 4);
        let (t, frame) = setup(&target);
        let recs = [
            InstanceRecord::new(Rect::new(0.0, 0.0, 4.0, 4.0)).with_misc(MiscIndices::new(7, 0, 0, 0)),
            quad(Rect::new(0.0, 0.0, 2.0, 2.0)).with_color(Color::RED),
        ];
        let stats = draw(&mut target, &recs, &t.views(), &frame, &DebugColorPass, BlendMode::Replace);
        assert_eq!(stats.instances_skipped, 1);
        assert_eq!(stats.instances_drawn, 1);
        assert_eq!(covered(&target), 4);
    }

    #[test]
    fn offscreen_quad_shades_nothing() {
        let mut target = Target::new(4, 4);
        let (t, frame) = setup(&target);
        let rec = quad(Rect::new(10.0, 10.0, 4.0, 4.0));
        let stats = draw(&mut target, &[rec], &t.views(), &frame, &DebugColorPass, BlendMode::Replace);
        assert_eq!(stats.instances_drawn, 1);
        assert_eq!(stats.fragments_shaded, 0);
    }

    #[test]
    fn default_clip_out_masks_everything() {
        let mut target = Target::new(4, 4);
        let (t, frame) = setup(&target);
        let rec = InstanceRecord::new(Rect::new(0.0, 0.0, 4.0, 4.0)).with_color(Color::RED);
        let stats = draw(&mut target, &[rec], &t.views(), &frame, &DebugColorPass, BlendMode::Over);
        assert_eq!(stats.fragments_shaded, 16);
        assert_eq!(covered(&target), 0);
    }
}
