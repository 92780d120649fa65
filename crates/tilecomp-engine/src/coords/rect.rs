use super::Vec2;

/// Axis-aligned rectangle in layout pixels (top-left origin).
///
/// A negative width or height is meaningful: it mirrors the rectangle about its
/// origin, which is how one rectangle definition serves flipped quads.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Unpacks the `[x, y, w, h]` form used by instance attributes and clip tables.
    #[inline]
    pub const fn from_xywh(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    #[inline]
    pub const fn to_xywh(self) -> [f32; 4] {
        [self.origin.x, self.origin.y, self.size.x, self.size.y]
    }

    /// Position of a point given in unit-square coordinates (`0..=1` per axis).
    ///
    /// The size is applied signed, so a negative width mirrors the result about
    /// the vertical line through `origin.x` (and likewise for height).
    #[inline]
    pub fn point_at(self, unit: Vec2) -> Vec2 {
        self.origin + self.size.mul_elem(unit)
    }

    /// Corner with the smallest coordinates, whatever the sign of the size.
    #[inline]
    pub fn min(self) -> Vec2 {
        let far = self.point_at(Vec2::splat(1.0));
        Vec2::new(self.origin.x.min(far.x), self.origin.y.min(far.y))
    }

    /// Corner with the largest coordinates, whatever the sign of the size.
    #[inline]
    pub fn max(self) -> Vec2 {
        let far = self.point_at(Vec2::splat(1.0));
        Vec2::new(self.origin.x.max(far.x), self.origin.y.max(far.y))
    }

    /// Same area with a non-negative size.
    #[inline]
    pub fn normalized(self) -> Self {
        let min = self.min();
        Self::from_origin_size(min, self.max() - min)
    }

    /// Half-open containment, `[min, max)` on both axes. A zero-area rect contains nothing.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.y >= min.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xywh_round_trip() {
        let v = [1.0, -2.0, 3.5, -4.0];
        assert_eq!(Rect::from_xywh(v).to_xywh(), v);
    }

    #[test]
    fn mirrored_rect_normalizes_to_same_area() {
        let flipped = Rect::new(10.0, 10.0, -4.0, -3.0);
        assert_eq!(flipped.normalized(), Rect::new(6.0, 7.0, 4.0, 3.0));
        assert_eq!(flipped.min(), Vec2::new(6.0, 7.0));
        assert_eq!(flipped.max(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.5, 9.5)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.5)));
    }

    #[test]
    fn zero_area_contains_nothing() {
        assert!(!Rect::default().contains(Vec2::zero()));
    }

    #[test]
    fn point_at_spans_rect() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.point_at(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(rect.point_at(Vec2::new(1.0, 1.0)), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn point_at_negative_width_mirrors_about_origin() {
        let rect = Rect::new(10.0, 0.0, -30.0, 5.0);
        assert_eq!(rect.point_at(Vec2::new(1.0, 0.0)), Vec2::new(-20.0, 0.0));
        assert_eq!(rect.point_at(Vec2::new(0.0, 1.0)), Vec2::new(10.0, 5.0));
    }
}
