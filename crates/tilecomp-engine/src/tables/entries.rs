use crate::coords::{CornerRadii, Rect, Vec2};

/// Clip rectangle table entry: an axis-aligned rectangle with optional rounded corners.
///
/// The same entry type serves as a clip-in region (keep what is inside) and a
/// clip-out region (drop what is inside); the role is chosen by which misc
/// component references it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl ClipRect {
    /// Zero-area region. As a clip-out it excludes nothing; as a clip-in it keeps nothing.
    pub const EMPTY: ClipRect = ClipRect {
        rect: Rect::new(0.0, 0.0, 0.0, 0.0),
        radii: CornerRadii::zero(),
    };

    #[inline]
    pub const fn new(rect: Rect) -> Self {
        Self { rect, radii: CornerRadii::zero() }
    }

    #[inline]
    pub const fn rounded(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// Inclusion test honoring rounded corners. Edges follow `Rect::contains` (half-open).
    pub fn contains(&self, p: Vec2) -> bool {
        let r = self.rect.normalized();
        if !r.contains(p) {
            return false;
        }
        if self.radii.is_zero() {
            return true;
        }

        let min = r.min();
        let max = r.max();
        let limit = 0.5 * r.size.x.min(r.size.y);
        let corners = [
            (self.radii.top_left, Vec2::new(1.0, 1.0), min),
            (self.radii.top_right, Vec2::new(-1.0, 1.0), Vec2::new(max.x, min.y)),
            (self.radii.bottom_right, Vec2::new(-1.0, -1.0), max),
            (self.radii.bottom_left, Vec2::new(1.0, -1.0), Vec2::new(min.x, max.y)),
        ];

        for (radius, inward, corner) in corners {
            let radius = radius.clamp(0.0, limit);
            if radius <= 0.0 {
                continue;
            }
            let center = corner + inward * radius;
            // Only the quarter-disc region beyond the center, toward the corner, can be cut.
            let d = p - center;
            if d.x * inward.x < 0.0 && d.y * inward.y < 0.0 && d.length_squared() > radius * radius {
                return false;
            }
        }
        true
    }
}

/// Tile parameter table entry.
///
/// `tile_size` is the painted part of each tile; `tile_repeat` is the period at
/// which tiles repeat. A repeat larger than the size leaves gaps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileParams {
    pub tile_size: Vec2,
    pub tile_repeat: Vec2,
}

impl TileParams {
    #[inline]
    pub const fn new(tile_size: Vec2, tile_repeat: Vec2) -> Self {
        Self { tile_size, tile_repeat }
    }

    /// One gapless tile covering `size`.
    #[inline]
    pub const fn single(size: Vec2) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(Vec2::new(v[0], v[1]), Vec2::new(v[2], v[3]))
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.tile_size.x, self.tile_size.y, self.tile_repeat.x, self.tile_repeat.y]
    }
}

impl Default for TileParams {
    fn default() -> Self {
        Self::single(Vec2::splat(f32::MAX))
    }
}
