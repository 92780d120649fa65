//! Instance records and their decoding.
//!
//! Producer-facing: [`InstanceRecord`] builder setters and [`MiscIndices::encode`].
//! Shader-facing: [`MiscIndices::decode`], [`low7`], and the vertex classification in
//! [`triangle`].

mod misc;
mod record;
pub mod triangle;

pub use misc::{LOW7_MASK, MiscIndices, low7};
pub use record::InstanceRecord;
pub use triangle::{QUAD_CORNERS, QUAD_VERTEX_COUNT, QuadCorner, TriangleHalf, quad_vertex};
