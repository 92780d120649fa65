//! Coordinate and geometry types shared by the decoder, vertex expansion and fragment passes.
//!
//! Canonical CPU space:
//! - Layout pixels, origin top-left
//! - +X right, +Y down
//!
//! Transforms are column-major 4×4 matrices, matching the uniform table layout.

mod corner_radii;
mod mat4;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use mat4::Mat4;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
