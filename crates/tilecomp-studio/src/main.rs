//! Headless driver: builds a demo scene, runs it through the reference
//! pipeline and writes the result as a PNG.

mod scenes;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tilecomp_engine::PipelineConfig;
use tilecomp_engine::fragment::{DebugColorPass, FragmentPass, LinearGradientPass, TextPass};
use tilecomp_engine::logging::{LoggingConfig, init_logging};
use tilecomp_engine::raster::{BlendMode, DrawStats, Target, draw};
use tilecomp_engine::tables::FrameUniforms;

use scenes::{PassKind, Scene, SceneKind};

#[derive(Parser, Debug)]
#[command(about = "Render a tile compositor demo scene to a PNG")]
struct Args {
    /// Scene to render.
    #[arg(long, short, value_enum, default_value_t = SceneKind::Solid)]
    scene: SceneKind,
    #[arg(long, default_value_t = 256)]
    width: u32,
    #[arg(long, default_value_t = 256)]
    height: u32,
    /// Output file.
    #[arg(long, short, default_value = "tilecomp.png")]
    output: PathBuf,
    /// Use the repeat extend mode for gradients instead of clamp.
    #[arg(long)]
    repeat: bool,
    /// Dither gradients with an 8x8 ordered matrix.
    #[arg(long)]
    dither: bool,
    /// Device pixel ratio used for vertex snapping.
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,
    /// `env_logger` filter; defaults to `RUST_LOG`, then `info`.
    #[arg(long)]
    log_filter: Option<String>,
    /// Print the available scenes and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::with_filter(args.log_filter.clone()));

    if args.list {
        println!("Available scenes:");
        for kind in SceneKind::value_variants() {
            let name = kind.to_possible_value().map(|v| v.get_name().to_owned()).unwrap_or_default();
            println!("  {name:<10} {}", kind.describe());
        }
        return Ok(());
    }

    if args.width == 0 || args.height == 0 {
        bail!("target size must be non-zero, got {}x{}", args.width, args.height);
    }
    if !(args.dpr.is_finite() && args.dpr > 0.0) {
        bail!("device pixel ratio must be positive, got {}", args.dpr);
    }

    let config = PipelineConfig {
        device_pixel_ratio: args.dpr,
        dithering: args.dither,
        ..PipelineConfig::default()
    };
    let mut target = Target::new(args.width, args.height);
    let scene = scenes::build(args.scene, target.viewport(), &config, args.repeat)
        .with_context(|| format!("building {:?} scene", args.scene))?;

    let stats = render(&scene, &mut target, &config);
    println!(
        "{:?}: {} instances drawn, {} skipped, {} fragments shaded, {} discarded",
        args.scene, stats.instances_drawn, stats.instances_skipped, stats.fragments_shaded, stats.fragments_discarded,
    );

    image::save_buffer(
        &args.output,
        &target.to_rgba8(),
        target.width(),
        target.height(),
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn render(scene: &Scene, target: &mut Target, config: &PipelineConfig) -> DrawStats {
    let frame = FrameUniforms {
        global_transform: target.viewport().projection(),
        device_pixel_ratio: config.device_pixel_ratio,
    };
    let tables = scene.tables.views();

    let debug = DebugColorPass;
    let text = TextPass::new(&scene.mask, config.mask_sampler);
    let gradient = LinearGradientPass::new(&scene.ramps).with_dithering(config.dithering);

    let mut total = DrawStats::default();
    for batch in &scene.batches {
        let pass: &dyn FragmentPass = match batch.pass {
            PassKind::Color => &debug,
            PassKind::Text => &text,
            PassKind::Gradient => &gradient,
        };
        let stats = draw(target, &batch.instances, &tables, &frame, pass, BlendMode::Over);
        total.instances_drawn += stats.instances_drawn;
        total.instances_skipped += stats.instances_skipped;
        total.fragments_shaded += stats.fragments_shaded;
        total.fragments_discarded += stats.fragments_discarded;
    }
    total
}
