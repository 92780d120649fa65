//! Demo scenes built through the engine's producer API.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tilecomp_engine::PipelineConfig;
use tilecomp_engine::coords::{CornerRadii, Mat4, Rect, Vec2, Viewport};
use tilecomp_engine::fragment::{AlphaTexture, GradientRamps, linear_gradient_instance};
use tilecomp_engine::instance::{InstanceRecord, MiscIndices};
use tilecomp_engine::paint::{Color, ColorStop, ExtendMode, LinearGradient};
use tilecomp_engine::tables::{ClipRect, TileParams, UniformTables};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum SceneKind {
    /// Flat and per-corner colored rectangles.
    Solid,
    /// Linear gradients, tiled with gaps.
    Gradient,
    /// Alpha-masked glyph quads.
    Text,
    /// Border-corner color mode with rounded clips.
    Corners,
}

impl SceneKind {
    pub fn describe(self) -> &'static str {
        match self {
            SceneKind::Solid => "flat and per-corner colored rectangles, one mirrored",
            SceneKind::Gradient => "clamped and tiled linear gradients (--repeat switches extend mode)",
            SceneKind::Text => "a row of glyph quads sampling a procedural alpha mask",
            SceneKind::Corners => "border-corner color mode under rounded clip-in and clip-out rects",
        }
    }
}

/// Which fragment pass a batch runs with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PassKind {
    Color,
    Text,
    Gradient,
}

#[derive(Debug)]
pub struct Batch {
    pub pass: PassKind,
    pub instances: Vec<InstanceRecord>,
}

/// Everything one frame needs: tables, pass resources and batches in draw order.
#[derive(Debug)]
pub struct Scene {
    pub tables: UniformTables,
    pub ramps: GradientRamps,
    pub mask: AlphaTexture,
    pub batches: Vec<Batch>,
}

/// Shared table entries every scene starts with.
struct Base {
    identity: u32,
    full_clip: u32,
    no_clip: u32,
    single_tile: u32,
}

impl Base {
    fn misc(&self) -> MiscIndices {
        MiscIndices::new(self.identity, self.full_clip, self.no_clip, self.single_tile)
    }
}

pub fn build(kind: SceneKind, viewport: Viewport, config: &PipelineConfig, repeat: bool) -> Result<Scene> {
    let mut scene = Scene {
        tables: UniformTables::new(&config.limits),
        ramps: GradientRamps::from_config(config).context("creating gradient ramps")?,
        mask: glyph_mask(32)?,
        batches: Vec::new(),
    };
    let base = Base {
        identity: scene.tables.transforms.push(Mat4::identity())?,
        full_clip: scene
            .tables
            .clip_rects
            .push(ClipRect::new(Rect::new(0.0, 0.0, viewport.width, viewport.height)))?,
        no_clip: scene.tables.clip_rects.push(ClipRect::EMPTY)?,
        single_tile: scene.tables.tile_params.push(TileParams::default())?,
    };

    match kind {
        SceneKind::Solid => solid(&mut scene, &base, viewport),
        SceneKind::Gradient => gradient(&mut scene, &base, viewport, repeat)?,
        SceneKind::Text => text(&mut scene, &base, viewport)?,
        SceneKind::Corners => corners(&mut scene, &base, viewport)?,
    }

    log::info!(
        "built {kind:?} scene: {} batches, {} transforms, {} clip rects, {} tile params, {} ramps",
        scene.batches.len(),
        scene.tables.transforms.len(),
        scene.tables.clip_rects.len(),
        scene.tables.tile_params.len(),
        scene.ramps.rows(),
    );
    Ok(scene)
}

fn background(base: &Base, viewport: Viewport) -> InstanceRecord {
    InstanceRecord::new(Rect::new(0.0, 0.0, viewport.width, viewport.height))
        .with_color(Color::from_rgba8(24, 26, 32, 255))
        .with_misc(base.misc())
}

fn solid(scene: &mut Scene, base: &Base, viewport: Viewport) {
    let (w, h) = (viewport.width, viewport.height);
    let corners = [
        Color::from_rgba8(230, 60, 60, 255),
        Color::from_rgba8(60, 200, 90, 255),
        Color::from_rgba8(60, 90, 230, 255),
        Color::from_rgba8(240, 200, 40, 255),
    ];
    let instances = vec![
        background(base, viewport),
        InstanceRecord::new(Rect::new(w * 0.1, h * 0.1, w * 0.35, h * 0.35))
            .with_color(Color::RED)
            .with_misc(base.misc()),
        InstanceRecord::new(Rect::new(w * 0.55, h * 0.1, w * 0.35, h * 0.35))
            .with_corner_colors(corners)
            .with_misc(base.misc()),
        // Negative width: mirrored copy of the quad above.
        InstanceRecord::new(Rect::new(w * 0.9, h * 0.55, -w * 0.35, h * 0.35))
            .with_corner_colors(corners)
            .with_misc(base.misc()),
        InstanceRecord::new(Rect::new(w * 0.1, h * 0.55, w * 0.35, h * 0.35))
            .with_color(Color::new(1.0, 1.0, 1.0, 0.5))
            .with_misc(base.misc()),
    ];
    scene.batches.push(Batch { pass: PassKind::Color, instances });
}

fn gradient(scene: &mut Scene, base: &Base, viewport: Viewport, repeat: bool) -> Result<()> {
    let (w, h) = (viewport.width, viewport.height);
    let extend = if repeat { ExtendMode::Repeat } else { ExtendMode::Clamp };

    let sunset = LinearGradient::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(w * 0.4, 0.0),
        vec![
            ColorStop::new(0.0, Color::from_rgba8(255, 200, 80, 255)),
            ColorStop::new(0.5, Color::from_rgba8(230, 70, 90, 255)),
            ColorStop::new(1.0, Color::from_rgba8(60, 40, 120, 255)),
        ],
        extend,
    );
    let mono = LinearGradient::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, h * 0.1),
        vec![ColorStop::new(0.0, Color::WHITE), ColorStop::new(1.0, Color::BLACK)],
        extend,
    );
    let sunset_row = scene.ramps.add(&sunset.stops).context("baking ramp")?;
    let mono_row = scene.ramps.add(&mono.stops).context("baking ramp")?;

    let tile = Vec2::new(w * 0.1, h * 0.2);
    let tiled = scene
        .tables
        .tile_params
        .push(TileParams::new(tile, tile + Vec2::splat(8.0)))?;

    let instances = vec![
        linear_gradient_instance(Rect::new(w * 0.05, h * 0.05, w * 0.9, h * 0.4), &sunset, sunset_row, base.misc()),
        linear_gradient_instance(
            Rect::new(w * 0.05, h * 0.5, w * 0.9, h * 0.45),
            &mono,
            mono_row,
            MiscIndices::new(base.identity, base.full_clip, base.no_clip, tiled),
        ),
    ];
    scene.batches.push(Batch { pass: PassKind::Color, instances: vec![background(base, viewport)] });
    scene.batches.push(Batch { pass: PassKind::Gradient, instances });
    Ok(())
}

fn text(scene: &mut Scene, base: &Base, viewport: Viewport) -> Result<()> {
    let (w, h) = (viewport.width, viewport.height);
    let size = (w.min(h) * 0.15).max(4.0);
    let free = scene.tables.transforms.capacity() - scene.tables.transforms.len();
    let count = (((w * 0.9) / (size * 1.1)).floor().max(1.0) as usize).min(free);

    let mut instances = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / count as f32;
        // Each glyph gets its own translation to exercise the transform table.
        let transform = scene
            .tables
            .transforms
            .push(Mat4::translation(w * 0.05 + i as f32 * size * 1.1, h * 0.5 - size * 0.5))?;
        instances.push(
            InstanceRecord::new(Rect::new(0.0, 0.0, size, size))
                .with_color(Color::new(1.0 - t, 0.6, t, 1.0))
                .with_misc(MiscIndices::new(transform, base.full_clip, base.no_clip, base.single_tile)),
        );
    }

    scene.batches.push(Batch { pass: PassKind::Color, instances: vec![background(base, viewport)] });
    scene.batches.push(Batch { pass: PassKind::Text, instances });
    Ok(())
}

fn corners(scene: &mut Scene, base: &Base, viewport: Viewport) -> Result<()> {
    let (w, h) = (viewport.width, viewport.height);
    let r = w.min(h) * 0.12;
    let rounded_in = scene.tables.clip_rects.push(ClipRect::rounded(
        Rect::new(w * 0.1, h * 0.1, w * 0.8, h * 0.8),
        CornerRadii::all(r),
    ))?;
    let hole = scene.tables.clip_rects.push(ClipRect::rounded(
        Rect::new(w * 0.35, h * 0.35, w * 0.3, h * 0.3),
        CornerRadii::new(r, 0.0, r, 0.0),
    ))?;

    // Bevel shading: light top-left triangle, dark bottom-right triangle.
    let bevel = InstanceRecord::new(Rect::new(w * 0.1, h * 0.1, w * 0.8, h * 0.8))
        .with_corner_colors([
            Color::new(1.0, 1.0, 1.0, 0.35),
            Color::TRANSPARENT,
            Color::new(0.0, 0.0, 0.0, 0.35),
            Color::TRANSPARENT,
        ])
        .with_misc(MiscIndices::new(base.identity, rounded_in, hole, base.single_tile).with_border_corner_mode(true));

    // The gradient pass applies the clip mask; a flat two-stop ramp makes it a clipped solid fill.
    let blue = Color::from_rgba8(70, 130, 220, 255);
    let stops = [ColorStop::new(0.0, blue), ColorStop::new(1.0, blue)];
    let row = scene.ramps.add(&stops).context("baking ramp")?;
    let fill = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), stops.to_vec(), ExtendMode::Clamp);
    let clipped = linear_gradient_instance(
        Rect::new(0.0, 0.0, w, h),
        &fill,
        row,
        MiscIndices::new(base.identity, rounded_in, hole, base.single_tile),
    );

    scene.batches.push(Batch { pass: PassKind::Color, instances: vec![background(base, viewport)] });
    scene.batches.push(Batch { pass: PassKind::Gradient, instances: vec![clipped] });
    scene.batches.push(Batch { pass: PassKind::Color, instances: vec![bevel] });
    Ok(())
}

/// Procedural glyph: an anti-aliased ring.
fn glyph_mask(size: u32) -> Result<AlphaTexture> {
    let c = size as f32 * 0.5;
    let (outer, inner) = (c * 0.9, c * 0.5);
    AlphaTexture::from_fn(size, size, |x, y| {
        let d = Vec2::new(x as f32 + 0.5 - c, y as f32 + 0.5 - c).length_squared().sqrt();
        let coverage = (outer - d + 0.5).clamp(0.0, 1.0) * (d - inner + 0.5).clamp(0.0, 1.0);
        (coverage * 255.0).round() as u8
    })
    .context("building glyph mask")
}
