//! 4x4 matrix type, used for 3D TRS matrices.

use crate::matrix::{impl_element_accessors, impl_matrix_common};
use crate::{Arithmetic, Mat3, Real, Vec3};

/// A 4x4 matrix, stored column-major.
///
/// # Example
///
/// ```rust
/// use xform_math::{Mat3, Mat4, Vec3};
///
/// let mut m = Mat4::from_mat3(Mat3::<f32>::IDENTITY);
/// m.set(0, 3, 10.0);
/// assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0));
/// assert_eq!(m.transform_vector3(Vec3::X), Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T> {
    /// Columns: `cols[col][row]`
    pub cols: [[T; 4]; 4],
}

impl_matrix_common!(Mat4, 4);

impl_element_accessors!(Mat4;
    m00 => 0, 0; m01 => 0, 1; m02 => 0, 2; m03 => 0, 3;
    m10 => 1, 0; m11 => 1, 1; m12 => 1, 2; m13 => 1, 3;
    m20 => 2, 0; m21 => 2, 1; m22 => 2, 2; m23 => 2, 3;
    m30 => 3, 0; m31 => 3, 1; m32 => 3, 2; m33 => 3, 3;
);

impl<T: Arithmetic> Mat4<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_cols([[T::ZERO; 4]; 4]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);

    /// Creates a diagonal matrix from four diagonal values.
    #[inline]
    pub const fn from_diagonal(d: [T; 4]) -> Self {
        Self::from_cols([
            [d[0], T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, d[1], T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, d[2], T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, d[3]],
        ])
    }

    /// Embeds a 3x3 matrix in the upper-left block, with 1 in the corner.
    #[inline]
    pub const fn from_mat3(m: Mat3<T>) -> Self {
        let c = m.cols;
        Self::from_cols([
            [c[0][0], c[0][1], c[0][2], T::ZERO],
            [c[1][0], c[1][1], c[1][2], T::ZERO],
            [c[2][0], c[2][1], c[2][2], T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Returns the upper-left 3x3 block.
    #[inline]
    pub const fn upper_left(&self) -> Mat3<T> {
        let c = self.cols;
        Mat3::from_cols([
            [c[0][0], c[0][1], c[0][2]],
            [c[1][0], c[1][1], c[1][2]],
            [c[2][0], c[2][1], c[2][2]],
        ])
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> [T; 4] {
        [self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i]]
    }

    /// Returns a column.
    #[inline]
    pub fn col(&self, i: usize) -> [T; 4] {
        self.cols[i]
    }

    /// Computes the determinant by Laplace expansion over 2x2 minors.
    pub fn determinant(&self) -> T {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Transforms a point (implicit `w = 1`).
    ///
    /// The bottom row is ignored, so no perspective divide happens.
    #[inline]
    pub fn transform_point3(&self, p: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m00() * p.x + self.m01() * p.y + self.m02() * p.z + self.m03(),
            self.m10() * p.x + self.m11() * p.y + self.m12() * p.z + self.m13(),
            self.m20() * p.x + self.m21() * p.y + self.m22() * p.z + self.m23(),
        )
    }

    /// Transforms a direction (implicit `w = 0`).
    #[inline]
    pub fn transform_vector3(&self, d: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m00() * d.x + self.m01() * d.y + self.m02() * d.z,
            self.m10() * d.x + self.m11() * d.y + self.m12() * d.z,
            self.m20() * d.x + self.m21() * d.y + self.m22() * d.z,
        )
    }

    /// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`).
    #[inline]
    fn minors(&self) -> ([T; 6], [T; 6]) {
        let a = |r: usize, c: usize| self.cols[c][r];
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }
}

impl<T: Real> Mat4<T> {
    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant near zero).
    pub fn inverse(&self) -> Option<Self> {
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1]
            + s[5] * c[0];
        if det.abs() < T::NEAR_ZERO {
            return None;
        }

        let inv_det = det.recip();
        let a = |r: usize, col: usize| self.cols[col][r];

        Some(Self::from_rows([
            [
                (a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3]) * inv_det,
                (-a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3]) * inv_det,
                (a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3]) * inv_det,
                (-a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3]) * inv_det,
            ],
            [
                (-a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1]) * inv_det,
                (a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1]) * inv_det,
                (-a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1]) * inv_det,
                (a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1]) * inv_det,
            ],
            [
                (a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0]) * inv_det,
                (-a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0]) * inv_det,
                (a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0]) * inv_det,
                (-a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0]) * inv_det,
            ],
            [
                (-a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0]) * inv_det,
                (a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0]) * inv_det,
                (-a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0]) * inv_det,
                (a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0]) * inv_det,
            ],
        ]))
    }
}

impl From<glam::Mat4> for Mat4<f32> {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat4<f32>> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4<f32>) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&m.cols)
    }
}

impl From<glam::DMat4> for Mat4<f64> {
    #[inline]
    fn from(m: glam::DMat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat4<f64>> for glam::DMat4 {
    #[inline]
    fn from(m: Mat4<f64>) -> glam::DMat4 {
        glam::DMat4::from_cols_array_2d(&m.cols)
    }
}
