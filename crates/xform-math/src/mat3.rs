//! 3x3 matrix type.
//!
//! [`Mat3`] serves two roles:
//!
//! - 3D rotation and rotation-scaling (RS) blocks
//! - 2D TRS matrices, with the translation in the last column
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat3, Vec3};
//!
//! let scale = Mat3::from_diagonal(Vec3::new(2.0f32, 3.0, 4.0));
//! let v = Vec3::new(1.0, 1.0, 1.0);
//! assert_eq!(scale * v, Vec3::new(2.0, 3.0, 4.0));
//! ```

use std::ops::Mul;

use crate::matrix::{impl_element_accessors, impl_matrix_common};
use crate::{Arithmetic, Mat2, Real, Vec2, Vec3};

/// A 3x3 matrix, stored column-major.
///
/// Use [`Mat3::from_rows`] or [`Mat3::from_cols`] to construct from
/// component arrays.
///
/// # Example
///
/// ```rust
/// use xform_math::{Mat3, Vec3};
///
/// let identity = Mat3::<f64>::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T> {
    /// Columns: `cols[col][row]`
    pub cols: [[T; 3]; 3],
}

impl_matrix_common!(Mat3, 3);

impl_element_accessors!(Mat3;
    m00 => 0, 0; m01 => 0, 1; m02 => 0, 2;
    m10 => 1, 0; m11 => 1, 1; m12 => 1, 2;
    m20 => 2, 0; m21 => 2, 1; m22 => 2, 2;
);

impl<T: Arithmetic> Mat3<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_cols([[T::ZERO; 3]; 3]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub const fn from_row_vecs(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a diagonal matrix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_diagonal(Vec3::new(1, 2, 3));
    /// assert_eq!(m.m11(), 2);
    /// assert_eq!(m.m01(), 0);
    /// ```
    #[inline]
    pub const fn from_diagonal(d: Vec3<T>) -> Self {
        Self::from_cols([
            [d.x, T::ZERO, T::ZERO],
            [T::ZERO, d.y, T::ZERO],
            [T::ZERO, T::ZERO, d.z],
        ])
    }

    /// Embeds a 2x2 matrix in the upper-left block, with 1 in the corner.
    #[inline]
    pub const fn from_mat2(m: Mat2<T>) -> Self {
        Self::from_cols([
            [m.cols[0][0], m.cols[0][1], T::ZERO],
            [m.cols[1][0], m.cols[1][1], T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Returns the upper-left 2x2 block.
    #[inline]
    pub const fn upper_left(&self) -> Mat2<T> {
        Mat2::from_cols([
            [self.cols[0][0], self.cols[0][1]],
            [self.cols[1][0], self.cols[1][1]],
        ])
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<T> {
        Vec3::new(self.cols[0][i], self.cols[1][i], self.cols[2][i])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3<T> {
        Vec3::from_array(self.cols[i])
    }

    /// Replaces a column.
    #[inline]
    pub fn set_col(&mut self, i: usize, v: Vec3<T>) {
        self.cols[i] = v.to_array();
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m00() * (self.m11() * self.m22() - self.m12() * self.m21())
            - self.m01() * (self.m10() * self.m22() - self.m12() * self.m20())
            + self.m02() * (self.m10() * self.m21() - self.m11() * self.m20())
    }

    /// Transforms a Vec3 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn transform(&self, v: Vec3<T>) -> Vec3<T> {
        self.col(0) * v.x + self.col(1) * v.y + self.col(2) * v.z
    }

    /// Transforms a 2D point (implicit `w = 1`), for 2D TRS matrices.
    #[inline]
    pub fn transform_point2(&self, p: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.m00() * p.x + self.m01() * p.y + self.m02(),
            self.m10() * p.x + self.m11() * p.y + self.m12(),
        )
    }

    /// Transforms a 2D direction (implicit `w = 0`), for 2D TRS matrices.
    #[inline]
    pub fn transform_vector2(&self, d: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.m00() * d.x + self.m01() * d.y,
            self.m10() * d.x + self.m11() * d.y,
        )
    }
}

impl<T: Real> Mat3<T> {
    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (determinant near zero).
    ///
    /// # Example
    ///
    /// ```rust
    /// use xform_math::{Mat3, Vec3};
    ///
    /// let m = Mat3::from_diagonal(Vec3::splat(2.0f32));
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.m00(), 0.5);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < T::NEAR_ZERO {
            return None;
        }

        let inv_det = det.recip();

        // Cofactor matrix, transposed and scaled by 1/det
        Some(Self::from_rows([
            [
                (self.m11() * self.m22() - self.m12() * self.m21()) * inv_det,
                (self.m02() * self.m21() - self.m01() * self.m22()) * inv_det,
                (self.m01() * self.m12() - self.m02() * self.m11()) * inv_det,
            ],
            [
                (self.m12() * self.m20() - self.m10() * self.m22()) * inv_det,
                (self.m00() * self.m22() - self.m02() * self.m20()) * inv_det,
                (self.m02() * self.m10() - self.m00() * self.m12()) * inv_det,
            ],
            [
                (self.m10() * self.m21() - self.m11() * self.m20()) * inv_det,
                (self.m01() * self.m20() - self.m00() * self.m21()) * inv_det,
                (self.m00() * self.m11() - self.m01() * self.m10()) * inv_det,
            ],
        ]))
    }
}

// Mat3 * Vec3
impl<T: Arithmetic> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.transform(rhs)
    }
}

impl From<glam::Mat3> for Mat3<f32> {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat3<f32>> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3<f32>) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&m.cols)
    }
}

impl From<glam::DMat3> for Mat3<f64> {
    #[inline]
    fn from(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat3<f64>> for glam::DMat3 {
    #[inline]
    fn from(m: Mat3<f64>) -> glam::DMat3 {
        glam::DMat3::from_cols_array_2d(&m.cols)
    }
}
