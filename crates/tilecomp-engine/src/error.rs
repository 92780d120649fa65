//! Library error types.
//!
//! The shading stages themselves have no error path; these cover the table and
//! ramp builders on the producer side and the bounds-checked table lookups.

use std::fmt;

/// Identifies one of the per-frame lookup tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TableKind {
    Transform,
    ClipRect,
    TileParams,
    GradientRamp,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableKind::Transform => "transform",
            TableKind::ClipRect => "clip rect",
            TableKind::TileParams => "tile params",
            TableKind::GradientRamp => "gradient ramp",
        })
    }
}

/// Error returned when a table cannot accept another entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("{table} table is full (capacity {capacity})")]
    Full { table: TableKind, capacity: usize },
}

/// A decoded index did not address an entry of its table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("{table} index {index} out of range (len {len})")]
    OutOfRange { table: TableKind, index: u32, len: usize },
}

/// Error returned while building gradient ramps.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum RampError {
    #[error("a gradient ramp needs at least 2 stops, got {count}")]
    TooFewStops { count: usize },
    #[error("gradient stop {index} is out of order or outside [0, 1]")]
    BadStopOffset { index: usize },
    #[error("gradient stop {index} has a non-finite component")]
    NonFinite { index: usize },
    #[error("ramp width must be at least 2 texels, got {width}")]
    BadWidth { width: usize },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Error returned when texel data does not match the declared texture size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TextureError {
    #[error("texture is {width}x{height} but {actual} texels were supplied")]
    SizeMismatch { width: u32, height: u32, actual: usize },
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    Empty { width: u32, height: u32 },
}
