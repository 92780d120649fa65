//! Per-frame uniform index tables.
//!
//! The producer fills the tables once per frame; vertex expansion and the
//! fragment passes only ever see them through read-only [`TableView`]s bundled
//! in a [`TableSet`].

mod entries;
mod gpu;
mod table;

pub use entries::{ClipRect, TileParams};
pub use gpu::{GpuClipRect, GpuEntry, GpuTileParams, GpuTransform};
pub use table::{Table, TableView};

use crate::config::TableLimits;
use crate::coords::Mat4;
use crate::error::TableKind;

pub type TransformTable = Table<Mat4>;
pub type ClipRectTable = Table<ClipRect>;
pub type TileParamsTable = Table<TileParams>;

/// Per-draw uniforms that are not indexed per instance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    /// Applied after the per-instance transform; usually the viewport projection.
    pub global_transform: Mat4,
    pub device_pixel_ratio: f32,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            global_transform: Mat4::identity(),
            device_pixel_ratio: 1.0,
        }
    }
}

/// Owned storage for the three indexed tables of a frame.
#[derive(Debug, Clone)]
pub struct UniformTables {
    pub transforms: TransformTable,
    pub clip_rects: ClipRectTable,
    pub tile_params: TileParamsTable,
}

impl UniformTables {
    pub fn new(limits: &TableLimits) -> Self {
        Self {
            transforms: Table::new(TableKind::Transform, limits.transforms),
            clip_rects: Table::new(TableKind::ClipRect, limits.clip_rects),
            tile_params: Table::new(TableKind::TileParams, limits.tile_params),
        }
    }

    /// Empties every table for the next frame.
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.clip_rects.clear();
        self.tile_params.clear();
    }

    #[inline]
    pub fn views(&self) -> TableSet<'_> {
        TableSet {
            transforms: self.transforms.view(),
            clip_rects: self.clip_rects.view(),
            tile_params: self.tile_params.view(),
        }
    }
}

impl Default for UniformTables {
    fn default() -> Self {
        Self::new(&TableLimits::default())
    }
}

/// Read-only views of the indexed tables, passed explicitly into expansion.
#[derive(Debug, Copy, Clone)]
pub struct TableSet<'a> {
    pub transforms: TableView<'a, Mat4>,
    pub clip_rects: TableView<'a, ClipRect>,
    pub tile_params: TableView<'a, TileParams>,
}
