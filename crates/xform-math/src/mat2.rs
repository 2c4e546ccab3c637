//! 2x2 matrix type, used for 2D rotation and rotation-scaling blocks.

use std::ops::Mul;

use crate::matrix::{impl_element_accessors, impl_matrix_common};
use crate::{Arithmetic, Real, Vec2};

/// A 2x2 matrix, stored column-major.
///
/// # Example
///
/// ```rust
/// use xform_math::{Mat2, Vec2};
///
/// let m = Mat2::from_rows([[0.0f32, -1.0], [1.0, 0.0]]);
/// assert_eq!(m * Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
/// assert_eq!(m.m01(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2<T> {
    /// Columns: `cols[col][row]`
    pub cols: [[T; 2]; 2],
}

impl_matrix_common!(Mat2, 2);

impl_element_accessors!(Mat2;
    m00 => 0, 0; m01 => 0, 1;
    m10 => 1, 0; m11 => 1, 1;
);

impl<T: Arithmetic> Mat2<T> {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_cols([[T::ZERO; 2]; 2]);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);

    /// Creates a matrix from column vectors.
    #[inline]
    pub const fn from_col_vecs(c0: Vec2<T>, c1: Vec2<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn from_diagonal(d: Vec2<T>) -> Self {
        Self::from_cols([[d.x, T::ZERO], [T::ZERO, d.y]])
    }

    /// Returns a row as Vec2.
    #[inline]
    pub fn row(&self, i: usize) -> Vec2<T> {
        Vec2::new(self.cols[0][i], self.cols[1][i])
    }

    /// Returns a column as Vec2.
    #[inline]
    pub fn col(&self, i: usize) -> Vec2<T> {
        Vec2::from_array(self.cols[i])
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        self.m00() * self.m11() - self.m01() * self.m10()
    }

    /// Transforms a Vec2 by this matrix.
    #[inline]
    pub fn transform(&self, v: Vec2<T>) -> Vec2<T> {
        Vec2::new(
            self.m00() * v.x + self.m01() * v.y,
            self.m10() * v.x + self.m11() * v.y,
        )
    }
}

impl<T: Real> Mat2<T> {
    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < T::NEAR_ZERO {
            return None;
        }
        let inv_det = det.recip();
        Some(Self::from_rows([
            [self.m11() * inv_det, -self.m01() * inv_det],
            [-self.m10() * inv_det, self.m00() * inv_det],
        ]))
    }
}

// Mat2 * Vec2
impl<T: Arithmetic> Mul<Vec2<T>> for Mat2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn mul(self, rhs: Vec2<T>) -> Vec2<T> {
        self.transform(rhs)
    }
}

impl From<glam::Mat2> for Mat2<f32> {
    #[inline]
    fn from(m: glam::Mat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat2<f32>> for glam::Mat2 {
    #[inline]
    fn from(m: Mat2<f32>) -> glam::Mat2 {
        glam::Mat2::from_cols_array_2d(&m.cols)
    }
}

impl From<glam::DMat2> for Mat2<f64> {
    #[inline]
    fn from(m: glam::DMat2) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl From<Mat2<f64>> for glam::DMat2 {
    #[inline]
    fn from(m: Mat2<f64>) -> glam::DMat2 {
        glam::DMat2::from_cols_array_2d(&m.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mat2_layout() {
        let m = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.cols, [[1, 3], [2, 4]]);
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(1), Vec2::new(3, 4));
        assert_eq!(m.col(1), Vec2::new(2, 4));
        assert_eq!(m.to_cols_array(), [1, 3, 2, 4]);
    }

    #[test]
    fn test_mat2_determinant() {
        let m = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.determinant(), -2);
        assert_eq!(m.trace(), 5);
        assert_eq!(m.transpose().determinant(), -2);
    }

    #[test]
    fn test_mat2_inverse() {
        let m = Mat2::from_rows([[4.0f64, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Mat2::IDENTITY, epsilon = 1e-12);
        assert!(Mat2::from_rows([[1.0f32, 2.0], [2.0, 4.0]]).inverse().is_none());
    }

    #[test]
    fn test_mat2_orthonormal_deviation() {
        let (s, c) = 0.7f64.sin_cos();
        let r = Mat2::from_rows([[c, -s], [s, c]]);
        assert!(r.orthonormal_deviation() < 1e-15);
        assert!(r.is_orthonormal(1e-12));

        let shear = Mat2::from_rows([[1.0, 0.5], [0.0, 1.0]]);
        assert_abs_diff_eq!(shear.orthonormal_deviation(), 0.5, epsilon = 1e-15);
        assert!(!shear.is_orthonormal(1e-6));
    }

    #[test]
    fn test_mat2_ops() {
        let a = Mat2::from_rows([[1, 2], [3, 4]]);
        let b = Mat2::IDENTITY;
        assert_eq!(a * b, a);
        assert_eq!(a + b, Mat2::from_rows([[2, 2], [3, 5]]));
        assert_eq!(a - a, Mat2::ZERO);
        assert_eq!(a * 2, Mat2::from_rows([[2, 4], [6, 8]]));
        assert_eq!(-a, a * -1);
        assert_eq!(a * Vec2::new(1, 1), Vec2::new(3, 7));
        assert_eq!(a.to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_mat2_glam_roundtrip() {
        let m = Mat2::from_rows([[1.0f32, 2.0], [3.0, 4.0]]);
        let g: glam::Mat2 = m.into();
        assert_eq!(g.x_axis, glam::Vec2::new(1.0, 3.0));
        assert_eq!(Mat2::from(g), m);
    }
}
