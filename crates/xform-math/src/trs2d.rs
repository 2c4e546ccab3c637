//! Translation-rotation-scaling (TRS) composition and decomposition in 2D.
//!
//! Mirrors [`crate::trs`] with [`Vec2`] translation and scaling, a [`Mat2`]
//! or angle for rotation, and [`Mat3`] TRS matrices:
//!
//! ```text
//! | R*S  T |      p' = R * (S * p) + T
//! |  0   1 |
//! ```
//!
//! Negative scaling follows the 3D rule: the sign goes on X when the RS block
//! flips handedness.

use tracing::trace;

use crate::rotation2d::{self, IntoRotationMatrix2d};
use crate::{Error, Mat2, Mat3, Real, Result, Vec2};

/// A matrix holding a 2D RS block: a [`Mat2`] is one, a [`Mat3`] TRS matrix
/// carries one in its upper-left corner.
pub trait RsBlock2d<T: Real> {
    /// Returns the rotation-scaling block.
    fn rs_block(&self) -> Mat2<T>;
}

impl<T: Real> RsBlock2d<T> for Mat2<T> {
    #[inline]
    fn rs_block(&self) -> Mat2<T> {
        *self
    }
}

impl<T: Real> RsBlock2d<T> for Mat3<T> {
    #[inline]
    fn rs_block(&self) -> Mat2<T> {
        self.upper_left()
    }
}

/// Builds `R * diag(scaling)`.
pub fn rs_matrix<T: Real>(rotation: impl IntoRotationMatrix2d<T>, scaling: Vec2<T>) -> Mat2<T> {
    let r = rotation.into_rotation_matrix_2d();
    Mat2::from_col_vecs(r.col(0) * scaling.x, r.col(1) * scaling.y)
}

/// Builds `R(angle) * diag(scaling)`.
#[inline]
pub fn rs_matrix_from_angle<T: Real>(angle: T, scaling: Vec2<T>) -> Mat2<T> {
    rs_matrix(rotation2d::rotation_matrix_2d(angle), scaling)
}

/// Builds a 2D TRS matrix from its parts.
#[inline]
pub fn trs_matrix<T: Real>(
    translation: Vec2<T>,
    rotation: impl IntoRotationMatrix2d<T>,
    scaling: Vec2<T>,
) -> Mat3<T> {
    trs_matrix_from_rs(translation, &rs_matrix(rotation, scaling))
}

/// Builds a 2D TRS matrix from a translation and an existing RS block.
#[inline]
pub fn trs_matrix_from_rs<T: Real>(translation: Vec2<T>, rs: &Mat2<T>) -> Mat3<T> {
    let mut m = Mat3::from_mat2(*rs);
    m.cols[2] = [translation.x, translation.y, T::ONE];
    m
}

/// Translation column of a 2D TRS matrix.
#[inline]
pub fn extract_translation<T: Real>(m: &Mat3<T>) -> Vec2<T> {
    Vec2::new(m.m02(), m.m12())
}

/// RS block of a 2D TRS matrix.
#[inline]
pub fn extract_rs_matrix<T: Real>(m: &Mat3<T>) -> Mat2<T> {
    m.upper_left()
}

/// Column lengths of the RS block, with X negated for a reflection.
pub fn extract_scaling<T: Real, M: RsBlock2d<T>>(m: &M) -> Vec2<T> {
    let rs = m.rs_block();
    let mut scaling = Vec2::new(rs.col(0).magnitude(), rs.col(1).magnitude());
    if rs.determinant() < T::ZERO {
        scaling.x = -scaling.x;
    }
    scaling
}

/// Rotation of the RS block. Zero scaling yields non-finite columns.
pub fn extract_rotation_matrix<T: Real, M: RsBlock2d<T>>(m: &M) -> Mat2<T> {
    let rs = m.rs_block();
    let scaling = extract_scaling(&rs);
    Mat2::from_col_vecs(rs.col(0) / scaling.x, rs.col(1) / scaling.y)
}

/// Rotation of the RS block, rejecting degenerate blocks.
///
/// # Errors
///
/// - [`Error::NonFinite`] if the block contains NaN or infinity.
/// - [`Error::ZeroScale`] if a column has (near) zero length.
/// - [`Error::NotOrthogonal`] if the columns are not perpendicular.
pub fn try_extract_rotation_matrix<T: Real, M: RsBlock2d<T>>(m: &M) -> Result<Mat2<T>> {
    let rs = m.rs_block();
    if !rs.is_finite() {
        return Err(Error::NonFinite { what: "RS matrix" });
    }

    let scaling = extract_scaling(&rs);
    if let Some(axis) = (0..2).find(|&i| scaling[i].abs() <= T::NEAR_ZERO) {
        trace!(axis, scale = %scaling[axis], "zero scale, rotation not recoverable");
        return Err(Error::ZeroScale { axis });
    }

    let r = Mat2::from_col_vecs(rs.col(0) / scaling.x, rs.col(1) / scaling.y);
    let deviation = r.orthonormal_deviation();
    if deviation > T::ORTHONORMAL_TOLERANCE {
        trace!(deviation = %deviation, "sheared RS block, rotation not recoverable");
        return Err(Error::NotOrthogonal { what: "RS matrix", deviation: deviation.to_f64() });
    }

    Ok(r)
}

/// Rotation angle of the RS block, in `(-π, π]`.
#[inline]
pub fn extract_angle<T: Real, M: RsBlock2d<T>>(m: &M) -> T {
    rotation2d::angle_from_matrix_2d(&extract_rotation_matrix(m))
}

/// Applies a 2D TRS matrix to a point.
#[inline]
pub fn transform_point<T: Real>(trs: &Mat3<T>, p: Vec2<T>) -> Vec2<T> {
    trs.transform_point2(p)
}

/// Applies a 2D TRS matrix to a direction, ignoring translation.
#[inline]
pub fn transform_direction<T: Real>(trs: &Mat3<T>, d: Vec2<T>) -> Vec2<T> {
    trs.transform_vector2(d)
}
