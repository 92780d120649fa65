//! GPU-side mirrors of the table entries.
//!
//! These types must match the uniform array element layouts the shaders declare.
//! Each table uploads as one fixed-length block padded to its capacity.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::Mat4;

use super::{ClipRect, Table, TileParams};

/// Table entry with a fixed GPU representation.
pub trait GpuEntry {
    type Gpu: Pod;

    fn to_gpu(&self) -> Self::Gpu;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuTransform {
    pub cols: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuClipRect {
    pub rect: [f32; 4],  // x, y, w, h
    pub radii: [f32; 4], // tl, tr, br, bl
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuTileParams {
    pub params: [f32; 4], // size.xy, repeat.xy
}

impl GpuEntry for Mat4 {
    type Gpu = GpuTransform;

    fn to_gpu(&self) -> GpuTransform {
        GpuTransform { cols: self.cols }
    }
}

impl GpuEntry for ClipRect {
    type Gpu = GpuClipRect;

    fn to_gpu(&self) -> GpuClipRect {
        GpuClipRect {
            rect: self.rect.to_xywh(),
            radii: self.radii.to_array(),
        }
    }
}

impl GpuEntry for TileParams {
    type Gpu = GpuTileParams;

    fn to_gpu(&self) -> GpuTileParams {
        GpuTileParams { params: self.to_array() }
    }
}

impl<T: GpuEntry> Table<T> {
    /// Converts the table into its upload block: one element per slot, unused slots zeroed.
    pub fn to_gpu_block(&self) -> Vec<T::Gpu> {
        let mut block: Vec<T::Gpu> = self.entries().iter().map(T::to_gpu).collect();
        block.resize(self.capacity(), <T::Gpu as Zeroable>::zeroed());
        block
    }

    /// Size in bytes of the uniform buffer binding for this table.
    ///
    /// `None` for a zero-capacity table, which has nothing to bind.
    pub fn min_binding_size(&self) -> Option<NonZeroU64> {
        NonZeroU64::new((self.capacity() * std::mem::size_of::<T::Gpu>()) as u64)
    }
}
