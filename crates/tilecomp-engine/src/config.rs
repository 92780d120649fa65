//! Pipeline configuration.

use crate::fragment::Sampler;

/// Fixed capacities of the per-frame uniform tables.
///
/// The defaults mirror the uniform array sizes the shaders declare.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TableLimits {
    pub transforms: usize,
    pub clip_rects: usize,
    pub tile_params: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            transforms: 32,
            clip_rects: 64,
            tile_params: 64,
        }
    }
}

/// Settings shared by the producer-side builders and the reference rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineConfig {
    pub limits: TableLimits,

    /// Texels per gradient ramp row.
    pub ramp_width: usize,

    /// Ramp rows available to one frame. Capped at 128, the range of the 7-bit ramp address.
    pub ramp_rows: usize,

    pub device_pixel_ratio: f32,

    /// Sampler used for the alpha mask in the text pass.
    pub mask_sampler: Sampler,

    /// Ordered dithering of gradient output, see [`crate::fragment::dither`].
    pub dithering: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            limits: TableLimits::default(),
            ramp_width: 256,
            ramp_rows: 128,
            device_pixel_ratio: 1.0,
            mask_sampler: Sampler::default(),
            dithering: false,
        }
    }
}
