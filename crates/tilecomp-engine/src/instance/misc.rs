//! Instance attribute decoder.
//!
//! The misc vector is four integer-valued floats:
//!
//! | component | meaning |
//! |---|---|
//! | 0 | transform table index |
//! | 1 | clip-in rect index |
//! | 2 | clip-out rect index |
//! | 3 | tile-params index; sign bit set = border-corner mode |
//!
//! The sign bit of component 3 is tested directly, so `-0.0` encodes
//! "border-corner mode, tile-params index 0". The packed form never travels past
//! [`MiscIndices::decode`].

/// Mask selecting the low 7 bits of a packed auxiliary field.
pub const LOW7_MASK: u32 = 0x7f;

/// Extracts the low 7 bits of a packed integer field.
///
/// General-purpose accessor for sub-byte packed auxiliary values; callers shift
/// the field into place before calling.
#[inline]
pub const fn low7(packed: u32) -> u32 {
    packed & LOW7_MASK
}

/// Decoded form of the misc vector.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct MiscIndices {
    pub transform_index: u32,
    pub clip_in_index: u32,
    pub clip_out_index: u32,
    pub tile_params_index: u32,
    pub border_corner_mode: bool,
}

impl MiscIndices {
    #[inline]
    pub const fn new(transform_index: u32, clip_in_index: u32, clip_out_index: u32, tile_params_index: u32) -> Self {
        Self {
            transform_index,
            clip_in_index,
            clip_out_index,
            tile_params_index,
            border_corner_mode: false,
        }
    }

    #[inline]
    pub const fn with_border_corner_mode(mut self, on: bool) -> Self {
        self.border_corner_mode = on;
        self
    }

    /// Decodes a raw misc vector.
    ///
    /// No bounds checking happens here. Components are truncated toward zero;
    /// negative values in the first three components are a producer error and
    /// saturate to index 0.
    #[inline]
    pub fn decode(misc: [f32; 4]) -> Self {
        let tile = misc[3];
        Self {
            transform_index: misc[0] as u32,
            clip_in_index: misc[1] as u32,
            clip_out_index: misc[2] as u32,
            tile_params_index: tile.abs() as u32,
            border_corner_mode: tile.is_sign_negative(),
        }
    }

    /// Packs the indices back into a misc vector. Exact inverse of [`decode`](Self::decode)
    /// for indices below 2^24.
    #[inline]
    pub fn encode(self) -> [f32; 4] {
        let tile = self.tile_params_index as f32;
        [
            self.transform_index as f32,
            self.clip_in_index as f32,
            self.clip_out_index as f32,
            if self.border_corner_mode { -tile } else { tile },
        ]
    }
}
