/// Linear RGBA color with straight (non-premultiplied) alpha.
///
/// This is the per-corner color carried by instance records and the value every
/// fragment pass produces. Channels are nominally in `[0, 1]`; nothing here clamps.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB-encoded bytes, without decoding the transfer curve.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantizes to bytes, clamping each channel to `[0, 1]` first.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Returns the color with its alpha multiplied by `factor`; RGB is untouched.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self { a: self.a * factor, ..self }
    }

    /// Multiplies every channel by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a * factor)
    }

    /// Linear interpolation, `t = 0` yields `self`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Source-over composite of `self` onto `dst`, both straight alpha.
    pub fn over(self, dst: Color) -> Self {
        let a = self.a + dst.a * (1.0 - self.a);
        if a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let blend = |s: f32, d: f32| (s * self.a + d * dst.a * (1.0 - self.a)) / a;
        Self::new(blend(self.r, dst.r), blend(self.g, dst.g), blend(self.b, dst.b), a)
    }

    /// Straight alpha to premultiplied alpha.
    #[inline]
    pub fn premultiply(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Source-over for colors that are both already premultiplied.
    #[inline]
    pub fn premultiplied_over(self, dst: Color) -> Self {
        let k = 1.0 - self.a;
        Self::new(self.r + dst.r * k, self.g + dst.g * k, self.b + dst.b * k, self.a + dst.a * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_alpha_keeps_rgb() {
        let c = Color::new(0.2, 0.4, 0.6, 1.0).scale_alpha(0.5);
        assert_eq!(c, Color::new(0.2, 0.4, 0.6, 0.5));
    }

    #[test]
    fn opaque_over_anything_is_source() {
        assert_eq!(Color::RED.over(Color::WHITE), Color::RED);
    }

    #[test]
    fn transparent_over_transparent_stays_transparent() {
        assert_eq!(Color::TRANSPARENT.over(Color::TRANSPARENT), Color::TRANSPARENT);
    }

    #[test]
    fn premultiplied_over_matches_straight_over() {
        let src = Color::new(1.0, 0.5, 0.0, 0.5);
        let dst = Color::new(0.0, 0.0, 1.0, 0.8);
        let straight = src.over(dst).premultiply();
        let pre = src.premultiply().premultiplied_over(dst.premultiply());
        for (a, b) in straight.to_array().into_iter().zip(pre.to_array()) {
            assert!((a - b).abs() < 1e-6, "{straight:?} vs {pre:?}");
        }
    }

    #[test]
    fn rgba8_rounds_and_clamps() {
        assert_eq!(Color::new(1.5, 0.5, -1.0, 1.0).to_rgba8(), [255, 128, 0, 255]);
    }
}
