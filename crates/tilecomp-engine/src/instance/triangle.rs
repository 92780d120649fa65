//! Quad corners, triangle halves, and the fixed 6-vertex emission order.

use crate::coords::Vec2;

/// Vertices emitted per instance (two triangles, no index buffer).
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Which of the quad's two triangles a vertex belongs to.
///
/// Both triangles share the top-right / bottom-left diagonal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TriangleHalf {
    TopLeft,
    BottomRight,
}

impl TriangleHalf {
    /// Classifies a vertex by its ordinal within the instance: 0–2 are the
    /// top-left triangle, 3 and above the bottom-right one.
    #[inline]
    pub const fn of_vertex(ordinal: u32) -> Self {
        if ordinal < 3 { TriangleHalf::TopLeft } else { TriangleHalf::BottomRight }
    }

    #[inline]
    pub const fn is_bottom_right(self) -> bool {
        matches!(self, TriangleHalf::BottomRight)
    }
}

/// Logical quad corner, before any flip from a negative rectangle size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum QuadCorner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl QuadCorner {
    pub const ALL: [QuadCorner; 4] = [
        QuadCorner::TopLeft,
        QuadCorner::TopRight,
        QuadCorner::BottomRight,
        QuadCorner::BottomLeft,
    ];

    /// Position in the unit square.
    #[inline]
    pub const fn unit(self) -> Vec2 {
        match self {
            QuadCorner::TopLeft => Vec2::new(0.0, 0.0),
            QuadCorner::TopRight => Vec2::new(1.0, 0.0),
            QuadCorner::BottomRight => Vec2::new(1.0, 1.0),
            QuadCorner::BottomLeft => Vec2::new(0.0, 1.0),
        }
    }

    /// True for the two corners addressed through the "top" texture rectangle.
    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, QuadCorner::TopLeft | QuadCorner::TopRight)
    }
}

/// Corner of each emitted vertex, indexed by ordinal.
pub const QUAD_CORNERS: [QuadCorner; QUAD_VERTEX_COUNT as usize] = [
    QuadCorner::TopLeft,
    QuadCorner::TopRight,
    QuadCorner::BottomLeft,
    QuadCorner::TopRight,
    QuadCorner::BottomRight,
    QuadCorner::BottomLeft,
];

/// Resolves an emitted vertex ordinal (`0..6`) to its corner and triangle.
///
/// Ordinals past the quad wrap, so a raw vertex id can be passed directly.
#[inline]
pub const fn quad_vertex(ordinal: u32) -> (QuadCorner, TriangleHalf) {
    let ordinal = ordinal % QUAD_VERTEX_COUNT;
    (QUAD_CORNERS[ordinal as usize], TriangleHalf::of_vertex(ordinal))
}
