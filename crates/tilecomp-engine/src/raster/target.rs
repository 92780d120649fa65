use crate::coords::Viewport;
use crate::paint::Color;

/// How a shaded fragment is combined with the pixel already in the target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BlendMode {
    /// Source-over with straight alpha.
    #[default]
    Over,
    /// Blending disabled.
    Replace,
    /// `src + dst * (1 - src.a)` on every channel. The pass output and the
    /// target contents are both taken as premultiplied.
    PremultipliedOver,
}

impl BlendMode {
    #[inline]
    pub fn blend(self, src: Color, dst: Color) -> Color {
        match self {
            BlendMode::Over => src.over(dst),
            BlendMode::Replace => src,
            BlendMode::PremultipliedOver => src.premultiplied_over(dst),
        }
    }
}

/// CPU color target, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Target {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Panics if `(x, y)` lies outside the target.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, src: Color, mode: BlendMode) {
        let i = self.offset(x, y);
        self.pixels[i] = mode.blend(src, self.pixels[i]);
    }

    /// Packs the target as 8-bit RGBA, suitable for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
