//! Generic vertex expansion.
//!
//! Turns one instance record plus a (corner, triangle half) pair into a
//! clip-space position and the varyings every fragment pass reads. The output is
//! a pure function of its inputs; nothing carries across vertices or frames.

mod expand;
mod varyings;

pub use expand::{ResolvedInstance, expand_quad, expand_vertex, snap_to_device_pixels};
pub use varyings::{FlatVaryings, Interpolants, VertexOutput};
