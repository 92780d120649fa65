//! Tile compositor engine crate.
//!
//! Per-instance primitive encoding, uniform index tables, generic vertex
//! expansion and the fragment passes of a batched 2D compositor, plus a
//! reference rasterizer that runs them on the CPU.

pub mod config;
pub mod coords;
pub mod error;
pub mod fragment;
pub mod instance;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod tables;
pub mod vertex;

pub use config::{PipelineConfig, TableLimits};
pub use error::{LookupError, RampError, TableError, TableKind, TextureError};
