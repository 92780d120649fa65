//! Ordered dithering for gradients.
//!
//! An 8×8 Bayer matrix indexed by the target pixel adds at most half an 8-bit
//! step of noise to RGB, which breaks up banding in slow gradients once the
//! target is quantized.

use crate::coords::Vec2;
use crate::paint::Color;

/// Side of the dither matrix.
pub const DITHER_SIZE: u32 = 8;

/// Bayer threshold for cell `(x, y)`, in `0..64`. Every value appears once per 8×8 tile.
pub const fn bayer_index(x: u32, y: u32) -> u32 {
    let (mut x, mut y) = (x % DITHER_SIZE, y % DITHER_SIZE);
    let mut v = 0;
    let mut level = 0;
    while level < 3 {
        v = (v << 2) | (((x ^ y) & 1) << 1) | (y & 1);
        x >>= 1;
        y >>= 1;
        level += 1;
    }
    v
}

/// Noise added at `frag_coord`, in `(-0.5/256, 0.5/256)`, zero mean over a tile.
#[inline]
pub fn dither_noise(frag_coord: Vec2) -> f32 {
    let cell = bayer_index(frag_coord.x.max(0.0) as u32, frag_coord.y.max(0.0) as u32);
    let normalized = (cell as f32 + 0.5) / 64.0;
    (normalized - 0.5) / 256.0
}

/// Offsets RGB by the pixel's dither noise; alpha is untouched.
#[inline]
pub fn dither(color: Color, frag_coord: Vec2) -> Color {
    let n = dither_noise(frag_coord);
    Color::new(color.r + n, color.g + n, color.b + n, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_is_a_permutation() {
        let mut seen = [false; 64];
        for y in 0..DITHER_SIZE {
            for x in 0..DITHER_SIZE {
                let v = bayer_index(x, y) as usize;
                assert!(!seen[v], "duplicate threshold {v}");
                seen[v] = true;
            }
        }
    }

    #[test]
    fn two_by_two_corner_is_classic_bayer() {
        // Top 2×2 block of the 8×8 matrix, scaled down by 16.
        assert_eq!([bayer_index(0, 0), bayer_index(1, 0)], [0, 32]);
        assert_eq!([bayer_index(0, 1), bayer_index(1, 1)], [48, 16]);
    }

    #[test]
    fn matrix_tiles_every_eight_pixels() {
        assert_eq!(bayer_index(3, 5), bayer_index(11, 21));
    }

    #[test]
    fn noise_is_bounded_and_zero_mean() {
        let mut sum = 0.0;
        for y in 0..DITHER_SIZE {
            for x in 0..DITHER_SIZE {
                let n = dither_noise(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                assert!(n.abs() < 0.5 / 256.0);
                sum += n;
            }
        }
        assert!(sum.abs() < 1e-6);
    }

    #[test]
    fn alpha_is_not_dithered() {
        let c = dither(Color::new(0.5, 0.5, 0.5, 0.25), Vec2::new(0.5, 0.5));
        assert_eq!(c.a, 0.25);
        assert!(c.r < 0.5);
    }
}
