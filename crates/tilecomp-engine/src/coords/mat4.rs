use core::ops::Mul;

use super::Vec2;

/// Column-major 4×4 matrix, laid out exactly as a GLSL/WGSL `mat4x4<f32>`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        let mut m = Self::identity();
        m.cols[3] = [tx, ty, 0.0, 1.0];
        m
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        let mut m = Self::identity();
        m.cols[0][0] = sx;
        m.cols[1][1] = sy;
        m
    }

    /// OpenGL-style orthographic projection.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let f_n = far - near;
        Self {
            cols: [
                [2.0 / rl, 0.0, 0.0, 0.0],
                [0.0, 2.0 / tb, 0.0, 0.0],
                [0.0, 0.0, -2.0 / f_n, 0.0],
                [-(right + left) / rl, -(top + bottom) / tb, -(far + near) / f_n, 1.0],
            ],
        }
    }

    /// `self * v` for a column vector `v`.
    #[inline]
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let c = &self.cols;
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = c[0][row] * v[0] + c[1][row] * v[1] + c[2][row] * v[2] + c[3][row] * v[3];
        }
        out
    }

    /// Transforms a point on the z = 0 plane (w = 1).
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> [f32; 4] {
        self.transform([p.x, p.y, 0.0, 1.0])
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut cols = [[0.0; 4]; 4];
        for (i, col) in cols.iter_mut().enumerate() {
            *col = self.transform(rhs.cols[i]);
        }
        Mat4 { cols }
    }
}
