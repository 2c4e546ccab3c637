//! Translation-rotation-scaling (TRS) composition and decomposition in 3D.
//!
//! A TRS matrix applies scaling, then rotation, then translation:
//!
//! ```text
//! | R*S  T |      p' = R * (S * p) + T
//! |  0   1 |
//! ```
//!
//! The upper-left 3x3 block (`R * diag(S)`) is the RS matrix. Its columns are
//! the rotation's columns scaled by the matching scaling component, which is
//! how [`extract_scaling`] recovers the scale.
//!
//! # Negative scaling
//!
//! A single negative scale component cannot be told apart from a different
//! rotation combined with a different negative component. Extraction always
//! puts the sign on X when `det(RS) < 0`, so the extracted rotation is proper
//! and `rs_matrix(extract_rotation_matrix(m), extract_scaling(m))`
//! reproduces `m`.
//!
//! # Zero scaling
//!
//! [`extract_rotation_matrix`] divides by the scale and returns non-finite
//! columns for a zero component. Use [`try_extract_rotation_matrix`] or
//! [`Trs::try_from_matrix`] when the input is not trusted.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{rotation, trs, Vec3};
//!
//! let r = rotation::rotation_quat_from_euler(Vec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
//! let m = trs::trs_matrix(Vec3::new(10.0, 0.0, 0.0), r, Vec3::splat(2.0));
//!
//! let p = trs::transform_point(&m, Vec3::X);
//! assert!((p - Vec3::new(10.0, 2.0, 0.0)).magnitude() < 1e-12);
//!
//! assert!((trs::extract_scaling(&m) - Vec3::splat(2.0)).magnitude() < 1e-12);
//! ```

use tracing::trace;

use crate::rotation::{self, AxisAngle, IntoRotationMatrix};
use crate::{Error, Mat3, Mat4, Quat, Real, Result, Vec3};

/// A matrix holding an RS block: a [`Mat3`] is one, a [`Mat4`] TRS matrix
/// carries one in its upper-left corner.
pub trait RsBlock<T: Real> {
    /// Returns the rotation-scaling block.
    fn rs_block(&self) -> Mat3<T>;
}

impl<T: Real> RsBlock<T> for Mat3<T> {
    #[inline]
    fn rs_block(&self) -> Mat3<T> {
        *self
    }
}

impl<T: Real> RsBlock<T> for Mat4<T> {
    #[inline]
    fn rs_block(&self) -> Mat3<T> {
        self.upper_left()
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Builds `R * diag(scaling)`.
pub fn rs_matrix<T: Real>(rotation: impl IntoRotationMatrix<T>, scaling: Vec3<T>) -> Mat3<T> {
    let r = rotation.into_rotation_matrix();
    Mat3::from_col_vecs(r.col(0) * scaling.x, r.col(1) * scaling.y, r.col(2) * scaling.z)
}

/// Builds a TRS matrix from its parts.
#[inline]
pub fn trs_matrix<T: Real>(
    translation: Vec3<T>,
    rotation: impl IntoRotationMatrix<T>,
    scaling: Vec3<T>,
) -> Mat4<T> {
    trs_matrix_from_rs(translation, &rs_matrix(rotation, scaling))
}

/// Builds a TRS matrix from a translation and an existing RS block.
#[inline]
pub fn trs_matrix_from_rs<T: Real>(translation: Vec3<T>, rs: &Mat3<T>) -> Mat4<T> {
    let mut m = Mat4::from_mat3(*rs);
    m.cols[3] = [translation.x, translation.y, translation.z, T::ONE];
    m
}

// ============================================================================
// Decomposition
// ============================================================================

/// Translation column of a TRS matrix.
#[inline]
pub fn extract_translation<T: Real>(m: &Mat4<T>) -> Vec3<T> {
    Vec3::new(m.m03(), m.m13(), m.m23())
}

/// RS block of a TRS matrix.
#[inline]
pub fn extract_rs_matrix<T: Real>(m: &Mat4<T>) -> Mat3<T> {
    m.upper_left()
}

/// Scaling of an RS block: its column lengths, with X negated when the block
/// flips handedness.
///
/// Only the sign of X is ever negative. A block built with a negative Y or Z
/// scale comes back with that sign moved to X and a rotation differing by a
/// half turn, e.g. `(2, -0.5, 3)` extracts as `(-2, 0.5, 3)`. Recomposing the
/// extracted parts still reproduces the block.
pub fn extract_scaling<T: Real, M: RsBlock<T>>(m: &M) -> Vec3<T> {
    let rs = m.rs_block();
    let mut scaling = Vec3::new(rs.col(0).magnitude(), rs.col(1).magnitude(), rs.col(2).magnitude());
    if rs.determinant() < T::ZERO {
        scaling.x = -scaling.x;
    }
    scaling
}

/// Rotation of an RS block.
///
/// Zero scaling yields non-finite columns; see [`try_extract_rotation_matrix`].
#[inline]
pub fn extract_rotation_matrix<T: Real, M: RsBlock<T>>(m: &M) -> Mat3<T> {
    extract_rotation_matrix_with_scaling(m, extract_scaling(m))
}

/// Rotation of an RS block whose scaling is already known.
///
/// Skips recomputing the column lengths when the caller also needs them.
pub fn extract_rotation_matrix_with_scaling<T: Real, M: RsBlock<T>>(m: &M, scaling: Vec3<T>) -> Mat3<T> {
    let rs = m.rs_block();
    Mat3::from_col_vecs(rs.col(0) / scaling.x, rs.col(1) / scaling.y, rs.col(2) / scaling.z)
}

/// Rotation of an RS block, rejecting blocks the rotation cannot be
/// recovered from.
///
/// # Errors
///
/// - [`Error::NonFinite`] if the block contains NaN or infinity.
/// - [`Error::ZeroScale`] if a column has (near) zero length.
/// - [`Error::NotOrthogonal`] if the block has shear, so the de-scaled
///   columns are not orthonormal within [`Real::ORTHONORMAL_TOLERANCE`].
pub fn try_extract_rotation_matrix<T: Real, M: RsBlock<T>>(m: &M) -> Result<Mat3<T>> {
    let rs = m.rs_block();
    if !rs.is_finite() {
        return Err(Error::NonFinite { what: "RS matrix" });
    }

    let scaling = extract_scaling(&rs);
    for axis in 0..3 {
        if scaling[axis].abs() <= T::NEAR_ZERO {
            trace!(axis, scale = %scaling[axis], "zero scale, rotation not recoverable");
            return Err(Error::ZeroScale { axis });
        }
    }

    let r = extract_rotation_matrix_with_scaling(&rs, scaling);
    let deviation = r.orthonormal_deviation();
    if deviation > T::ORTHONORMAL_TOLERANCE {
        trace!(deviation = %deviation, "sheared RS block, rotation not recoverable");
        return Err(Error::NotOrthogonal { what: "RS matrix", deviation: deviation.to_f64() });
    }

    Ok(r)
}

/// Rotation of an RS block as a quaternion.
#[inline]
pub fn extract_rotation_quat<T: Real, M: RsBlock<T>>(m: &M) -> Quat<T> {
    rotation::rotation_quat_from_matrix(&extract_rotation_matrix(m))
}

/// Rotation of an RS block as Euler angles.
#[inline]
pub fn extract_euler<T: Real, M: RsBlock<T>>(m: &M) -> Vec3<T> {
    rotation::euler_from_matrix(&extract_rotation_matrix(m))
}

/// Rotation of an RS block as axis-angle.
#[inline]
pub fn extract_axis_angle<T: Real, M: RsBlock<T>>(m: &M) -> AxisAngle<T> {
    rotation::axis_angle_from_matrix(&extract_rotation_matrix(m))
}

// ============================================================================
// Transform
// ============================================================================

/// Applies a TRS matrix to a point: `R * S * p + T`.
#[inline]
pub fn transform_point<T: Real>(trs: &Mat4<T>, p: Vec3<T>) -> Vec3<T> {
    trs.transform_point3(p)
}

/// Applies a TRS matrix to a direction, ignoring translation: `R * S * d`.
#[inline]
pub fn transform_direction<T: Real>(trs: &Mat4<T>, d: Vec3<T>) -> Vec3<T> {
    trs.transform_vector3(d)
}

// ============================================================================
// Trs
// ============================================================================

/// A decomposed TRS transform.
///
/// # Example
///
/// ```rust
/// use xform_math::{Trs, Vec3};
///
/// let t = Trs::new(Vec3::new(1.0f64, 2.0, 3.0), Default::default(), Vec3::new(2.0, 2.0, 2.0));
/// let m = t.to_matrix();
/// let back = Trs::try_from_matrix(&m).unwrap();
/// assert!((back.scaling - t.scaling).magnitude() < 1e-12);
/// assert_eq!(t.transform_point(Vec3::X), Vec3::new(3.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trs<T> {
    /// Translation
    pub translation: Vec3<T>,
    /// Rotation
    pub rotation: Quat<T>,
    /// Per-axis scaling
    pub scaling: Vec3<T>,
}

impl<T: Real> Trs<T> {
    /// No translation, no rotation, unit scaling.
    pub const IDENTITY: Self = Self::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);

    /// Creates a transform from its parts.
    #[inline]
    pub const fn new(translation: Vec3<T>, rotation: Quat<T>, scaling: Vec3<T>) -> Self {
        Self { translation, rotation, scaling }
    }

    /// Composes the TRS matrix.
    #[inline]
    pub fn to_matrix(&self) -> Mat4<T> {
        trs_matrix(self.translation, self.rotation, self.scaling)
    }

    /// Decomposes a TRS matrix without validation.
    pub fn from_matrix(m: &Mat4<T>) -> Self {
        let scaling = extract_scaling(m);
        let r = extract_rotation_matrix_with_scaling(m, scaling);
        Self::new(extract_translation(m), rotation::rotation_quat_from_matrix(&r), scaling)
    }

    /// Decomposes a TRS matrix.
    ///
    /// # Errors
    ///
    /// - [`Error::NonFinite`] if the matrix contains NaN or infinity.
    /// - [`Error::ZeroScale`] if a scaling component is zero.
    /// - [`Error::NotOrthogonal`] if the RS block has shear.
    pub fn try_from_matrix(m: &Mat4<T>) -> Result<Self> {
        if !m.is_finite() {
            return Err(Error::NonFinite { what: "TRS matrix" });
        }
        let r = try_extract_rotation_matrix(m)?;
        Ok(Self::new(
            extract_translation(m),
            rotation::rotation_quat_from_matrix(&r),
            extract_scaling(m),
        ))
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        self.rotation * (p * self.scaling) + self.translation
    }

    /// Applies the transform to a direction, ignoring translation.
    #[inline]
    pub fn transform_direction(&self, d: Vec3<T>) -> Vec3<T> {
        self.rotation * (d * self.scaling)
    }

    /// Maps a transformed point back: `S⁻¹ * R⁻¹ * (p - T)`.
    ///
    /// Zero scaling yields non-finite output.
    #[inline]
    pub fn inverse_transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        (self.rotation.conjugate() * (p - self.translation)) / self.scaling
    }
}

impl<T: Real> Default for Trs<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> From<Trs<T>> for Mat4<T> {
    #[inline]
    fn from(t: Trs<T>) -> Mat4<T> {
        t.to_matrix()
    }
}
