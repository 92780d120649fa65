use super::Mat4;

/// Render target size in device pixels.
///
/// The rasterizer maps clip space onto this rectangle; `projection()` builds the
/// matching global transform for layout-pixel scenes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Orthographic projection from top-left-origin pixels to clip space.
    #[inline]
    pub fn projection(self) -> Mat4 {
        Mat4::ortho(0.0, self.width.max(1.0), self.height.max(1.0), 0.0, -1.0, 1.0)
    }
}
