use crate::coords::Vec2;
use crate::error::TextureError;

/// Sampler state for CPU texture reads, expressed with the GPU's own enums.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sampler {
    pub address_mode: wgpu::AddressMode,
    pub filter: wgpu::FilterMode,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            address_mode: wgpu::AddressMode::ClampToEdge,
            filter: wgpu::FilterMode::Linear,
        }
    }
}

impl Sampler {
    #[inline]
    pub const fn new(address_mode: wgpu::AddressMode, filter: wgpu::FilterMode) -> Self {
        Self { address_mode, filter }
    }
}

/// Single-channel 8-bit texture (glyph masks and other coverage data).
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaTexture {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl AlphaTexture {
    /// Wraps row-major texel data.
    pub fn new(width: u32, height: u32, texels: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }
        if texels.len() != width as usize * height as usize {
            return Err(TextureError::SizeMismatch { width, height, actual: texels.len() });
        }
        Ok(Self { width, height, texels })
    }

    /// Builds a texture by evaluating `f(x, y)` for every texel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self, TextureError> {
        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                texels.push(f(x, y));
            }
        }
        Self::new(width, height, texels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel value in `[0, 1]`.
    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> f32 {
        self.texels[(y * self.width + x) as usize] as f32 / 255.0
    }

    /// Samples at normalized coordinates. Out-of-range coordinates are resolved by
    /// the sampler's address mode; nothing is clamped beforehand.
    pub fn sample(&self, uv: Vec2, sampler: &Sampler) -> f32 {
        let x = uv.x * self.width as f32;
        let y = uv.y * self.height as f32;
        match sampler.filter {
            wgpu::FilterMode::Nearest => self.fetch(x.floor() as i64, y.floor() as i64, sampler.address_mode),
            wgpu::FilterMode::Linear => {
                let (x, y) = (x - 0.5, y - 0.5);
                let (x0, y0) = (x.floor(), y.floor());
                let (fx, fy) = (x - x0, y - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);
                let mode = sampler.address_mode;
                let top = lerp(self.fetch(x0, y0, mode), self.fetch(x0 + 1, y0, mode), fx);
                let bottom = lerp(self.fetch(x0, y0 + 1, mode), self.fetch(x0 + 1, y0 + 1, mode), fx);
                lerp(top, bottom, fy)
            }
        }
    }

    fn fetch(&self, x: i64, y: i64, mode: wgpu::AddressMode) -> f32 {
        match (address(x, self.width, mode), address(y, self.height, mode)) {
            (Some(x), Some(y)) => self.texel(x, y),
            // Transparent black border.
            _ => 0.0,
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Resolves an integer texel coordinate against `size`; `None` selects the border color.
fn address(i: i64, size: u32, mode: wgpu::AddressMode) -> Option<u32> {
    let n = size as i64;
    let resolved = match mode {
        wgpu::AddressMode::ClampToEdge => i.clamp(0, n - 1),
        wgpu::AddressMode::Repeat => i.rem_euclid(n),
        wgpu::AddressMode::MirrorRepeat => {
            let m = i.rem_euclid(2 * n);
            if m < n { m } else { 2 * n - 1 - m }
        }
        wgpu::AddressMode::ClampToBorder => {
            if !(0..n).contains(&i) {
                return None;
            }
            i
        }
    };
    Some(resolved as u32)
}
