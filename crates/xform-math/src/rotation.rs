//! Conversions between rotation representations.
//!
//! Four encodings of the same 3D rotation are supported:
//!
//! | Representation | Type |
//! |----------------|------|
//! | Rotation matrix | [`Mat3`] (orthonormal, det = +1) |
//! | Unit quaternion | [`Quat`] |
//! | Euler angles | [`Vec3`] of radians `(x, y, z)` |
//! | Axis-angle | [`AxisAngle`] |
//!
//! # Euler convention
//!
//! Angles are applied X first, then Y, then Z to a column vector:
//!
//! ```text
//! R = Rz(z) * Ry(y) * Rx(x)        q = qz * qy * qx
//! ```
//!
//! Y is the middle axis. When `y` reaches `±π/2` (gimbal lock) only `x ∓ z`
//! is recoverable; extraction then reports `z = 0` and folds the whole
//! remaining angle into `x`.
//!
//! # Degenerate inputs
//!
//! Nothing here validates its input. Non-unit quaternions and axes produce
//! scaled or skewed results, and NaN propagates. Callers that need checks
//! should use [`Quat::try_normalize`] / [`Vec3::try_normalize`] first.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{rotation, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let euler = Vec3::new(FRAC_PI_2, 0.0, 0.0);
//! let q = rotation::rotation_quat_from_euler(euler);
//! let m = rotation::rotation_matrix_from_quat(q);
//! assert!((m * Vec3::Y - Vec3::Z).magnitude() < 1e-12);
//!
//! let aa = rotation::axis_angle_from_quat(q);
//! assert!((aa.angle - FRAC_PI_2).abs() < 1e-12);
//! assert!((aa.axis - Vec3::X).magnitude() < 1e-12);
//! ```

use std::fmt;

use tracing::trace;

use crate::{Mat3, Quat, Real, Vec3};

/// A rotation of `angle` radians about `axis`.
///
/// `axis` is expected to be unit length. Values produced by this module always
/// have `angle` in `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle<T> {
    /// Unit rotation axis.
    pub axis: Vec3<T>,
    /// Angle in radians, counter-clockwise looking down `axis`.
    pub angle: T,
}

impl<T: Real> AxisAngle<T> {
    /// The identity rotation: zero angle about [`Vec3::FORWARD`].
    pub const IDENTITY: Self = Self::new(Vec3::FORWARD, T::ZERO);

    /// Creates an axis-angle pair.
    #[inline]
    pub const fn new(axis: Vec3<T>, angle: T) -> Self {
        Self { axis, angle }
    }

    /// Returns true if both pairs differ by at most `tolerance` per component.
    #[inline]
    pub fn is_almost_equal(&self, other: &Self, tolerance: T) -> bool {
        self.axis.is_almost_equal(other.axis, tolerance) && (self.angle - other.angle).abs() <= tolerance
    }
}

impl<T: Real> Default for AxisAngle<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> From<(Vec3<T>, T)> for AxisAngle<T> {
    #[inline]
    fn from((axis, angle): (Vec3<T>, T)) -> Self {
        Self::new(axis, angle)
    }
}

impl<T: fmt::Display> fmt::Display for AxisAngle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.axis, self.angle)
    }
}

/// Anything that can be turned into a 3x3 rotation matrix.
///
/// Lets TRS builders accept a matrix, quaternion or axis-angle interchangeably.
/// Euler angles are plain [`Vec3`]s and go through
/// [`rotation_matrix_from_euler`] explicitly.
pub trait IntoRotationMatrix<T: Real> {
    /// Converts to a rotation matrix.
    fn into_rotation_matrix(self) -> Mat3<T>;
}

impl<T: Real> IntoRotationMatrix<T> for Mat3<T> {
    #[inline]
    fn into_rotation_matrix(self) -> Mat3<T> {
        self
    }
}

impl<T: Real> IntoRotationMatrix<T> for &Mat3<T> {
    #[inline]
    fn into_rotation_matrix(self) -> Mat3<T> {
        *self
    }
}

impl<T: Real> IntoRotationMatrix<T> for Quat<T> {
    #[inline]
    fn into_rotation_matrix(self) -> Mat3<T> {
        rotation_matrix_from_quat(self)
    }
}

impl<T: Real> IntoRotationMatrix<T> for AxisAngle<T> {
    #[inline]
    fn into_rotation_matrix(self) -> Mat3<T> {
        rotation_matrix_from_axis_angle(self.axis, self.angle)
    }
}

// ============================================================================
// Quaternion from ...
// ============================================================================

/// Converts a rotation matrix to a unit quaternion.
///
/// Uses Shepperd's method: the largest of `w, x, y, z` is recovered from the
/// trace or the dominant diagonal element and the rest follow from it, so
/// no branch divides by a small number.
pub fn rotation_quat_from_matrix<T: Real>(m: &Mat3<T>) -> Quat<T> {
    let quarter = T::HALF * T::HALF;
    let trace = m.trace();

    if trace > T::ZERO {
        let s = (trace + T::ONE).sqrt() * T::TWO;
        Quat::new(
            (m.m21() - m.m12()) / s,
            (m.m02() - m.m20()) / s,
            (m.m10() - m.m01()) / s,
            quarter * s,
        )
    } else if m.m00() > m.m11() && m.m00() > m.m22() {
        let s = (T::ONE + m.m00() - m.m11() - m.m22()).sqrt() * T::TWO;
        Quat::new(
            quarter * s,
            (m.m01() + m.m10()) / s,
            (m.m02() + m.m20()) / s,
            (m.m21() - m.m12()) / s,
        )
    } else if m.m11() > m.m22() {
        let s = (T::ONE + m.m11() - m.m00() - m.m22()).sqrt() * T::TWO;
        Quat::new(
            (m.m01() + m.m10()) / s,
            quarter * s,
            (m.m12() + m.m21()) / s,
            (m.m02() - m.m20()) / s,
        )
    } else {
        let s = (T::ONE + m.m22() - m.m00() - m.m11()).sqrt() * T::TWO;
        Quat::new(
            (m.m02() + m.m20()) / s,
            (m.m12() + m.m21()) / s,
            quarter * s,
            (m.m10() - m.m01()) / s,
        )
    }
}

/// Converts Euler angles `(x, y, z)` to a quaternion, `q = qz * qy * qx`.
pub fn rotation_quat_from_euler<T: Real>(euler: Vec3<T>) -> Quat<T> {
    let (sx, cx) = (euler.x * T::HALF).sin_cos();
    let (sy, cy) = (euler.y * T::HALF).sin_cos();
    let (sz, cz) = (euler.z * T::HALF).sin_cos();

    Quat::new(
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    )
}

/// Quaternion rotating `angle` radians about unit `axis`.
///
/// A zero angle gives the identity for any axis, including the zero vector.
#[inline]
pub fn rotation_quat_from_axis_angle<T: Real>(axis: Vec3<T>, angle: T) -> Quat<T> {
    let (s, c) = (angle * T::HALF).sin_cos();
    Quat::from_xyz_w(axis * s, c)
}

/// Shortest-arc quaternion taking unit vector `from` onto unit vector `to`.
///
/// Parallel inputs give the identity. Anti-parallel inputs give a half turn
/// about `cross(from, UP)`, or `cross(from, FORWARD)` when `from` lies along
/// the up axis, so `(0, 0, 1) -> (0, 0, -1)` is always `(-1, 0, 0, 0)`.
pub fn rotation_quat_from_to<T: Real>(from: Vec3<T>, to: Vec3<T>) -> Quat<T> {
    let dot = from.dot(to);

    if dot >= T::ONE - T::NEAR_ZERO {
        return Quat::IDENTITY;
    }

    if dot <= T::NEAR_ZERO - T::ONE {
        let axis = from
            .cross(Vec3::UP)
            .try_normalize()
            .unwrap_or_else(|| from.cross(Vec3::FORWARD).normalize());
        trace!(from = %from, axis = %axis, "anti-parallel from/to");
        return Quat::from_xyz_w(axis, T::ZERO);
    }

    Quat::from_xyz_w(from.cross(to), T::ONE + dot).normalize()
}

// ============================================================================
// Matrix from ...
// ============================================================================

/// Converts a unit quaternion to a rotation matrix.
pub fn rotation_matrix_from_quat<T: Real>(q: Quat<T>) -> Mat3<T> {
    let Quat { x, y, z, w } = q;
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, yy, zz) = (x * x2, y * y2, z * z2);
    let (xy, xz, yz) = (x * y2, x * z2, y * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    Mat3::from_rows([
        [T::ONE - (yy + zz), xy - wz, xz + wy],
        [xy + wz, T::ONE - (xx + zz), yz - wx],
        [xz - wy, yz + wx, T::ONE - (xx + yy)],
    ])
}

/// Converts Euler angles `(x, y, z)` to `Rz(z) * Ry(y) * Rx(x)`.
pub fn rotation_matrix_from_euler<T: Real>(euler: Vec3<T>) -> Mat3<T> {
    let (sx, cx) = euler.x.sin_cos();
    let (sy, cy) = euler.y.sin_cos();
    let (sz, cz) = euler.z.sin_cos();

    Mat3::from_rows([
        [cy * cz, sx * sy * cz - cx * sz, cx * sy * cz + sx * sz],
        [cy * sz, sx * sy * sz + cx * cz, cx * sy * sz - sx * cz],
        [-sy, sx * cy, cx * cy],
    ])
}

/// Rotation matrix for `angle` radians about unit `axis` (Rodrigues).
pub fn rotation_matrix_from_axis_angle<T: Real>(axis: Vec3<T>, angle: T) -> Mat3<T> {
    let (s, c) = angle.sin_cos();
    let t = T::ONE - c;
    let Vec3 { x, y, z } = axis;

    Mat3::from_rows([
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ])
}

/// Shortest-arc rotation matrix taking `from` onto `to`.
///
/// See [`rotation_quat_from_to`] for the anti-parallel case.
#[inline]
pub fn rotation_matrix_from_to<T: Real>(from: Vec3<T>, to: Vec3<T>) -> Mat3<T> {
    rotation_matrix_from_quat(rotation_quat_from_to(from, to))
}

// ============================================================================
// Euler from ...
// ============================================================================

/// Extracts Euler angles `(x, y, z)` from a rotation matrix.
///
/// `y` lies in `[-π/2, π/2]`, `x` and `z` in `(-π, π]`. Gimbal lock is
/// detected from `cos(y)` itself, so pitches just short of `±π/2` still
/// resolve all three angles. `z` is solved against the extracted `x`, which
/// keeps the result consistent with `m` when `x` and `z` are nearly coupled.
/// At gimbal lock `z` is reported as zero.
pub fn euler_from_matrix<T: Real>(m: &Mat3<T>) -> Vec3<T> {
    let m20 = m.m20();
    let cy = (m.m00() * m.m00() + m.m10() * m.m10()).sqrt();

    if cy <= T::NEAR_ZERO {
        let y = -T::FRAC_PI_2.copysign(m20);
        let x = (-m20 * m.m01()).atan2(m.m11());
        trace!(m20 = %m20, "gimbal lock, folding z into x");
        return Vec3::new(x, y, T::ZERO);
    }

    let x = m.m21().atan2(m.m22());
    let (sx, cx) = x.sin_cos();
    let y = (-m20).atan2(cy);
    let z = (sx * m.m02() - cx * m.m01()).atan2(cx * m.m11() - sx * m.m12());
    Vec3::new(x, y, z)
}

/// Extracts Euler angles from a unit quaternion.
#[inline]
pub fn euler_from_quat<T: Real>(q: Quat<T>) -> Vec3<T> {
    euler_from_matrix(&rotation_matrix_from_quat(q))
}

/// Converts an axis-angle rotation to Euler angles.
#[inline]
pub fn euler_from_axis_angle<T: Real>(axis: Vec3<T>, angle: T) -> Vec3<T> {
    euler_from_matrix(&rotation_matrix_from_axis_angle(axis, angle))
}

// ============================================================================
// Axis-angle from ...
// ============================================================================

/// Extracts the axis and angle of a unit quaternion.
///
/// The angle is in `[0, π]`: `q` is flipped to the `w >= 0` hemisphere first,
/// so a negative input angle comes back as the negated axis. A rotation too
/// small to define an axis yields [`AxisAngle::IDENTITY`].
pub fn axis_angle_from_quat<T: Real>(q: Quat<T>) -> AxisAngle<T> {
    let q = if q.w < T::ZERO { -q } else { q };
    let v = q.xyz();
    let sin_half = v.magnitude();

    if sin_half <= T::NEAR_ZERO {
        return AxisAngle::IDENTITY;
    }

    AxisAngle::new(v / sin_half, T::TWO * sin_half.atan2(q.w))
}

/// Extracts the axis and angle of a rotation matrix.
#[inline]
pub fn axis_angle_from_matrix<T: Real>(m: &Mat3<T>) -> AxisAngle<T> {
    axis_angle_from_quat(rotation_quat_from_matrix(m))
}

/// Converts Euler angles to axis-angle.
#[inline]
pub fn axis_angle_from_euler<T: Real>(euler: Vec3<T>) -> AxisAngle<T> {
    axis_angle_from_quat(rotation_quat_from_euler(euler))
}

// ============================================================================
// Rotate
// ============================================================================

/// Rotates `v` by Euler angles `(x, y, z)`.
#[inline]
pub fn rotate_by_euler<T: Real>(v: Vec3<T>, euler: Vec3<T>) -> Vec3<T> {
    rotation_matrix_from_euler(euler) * v
}

/// Rotates `v` by `angle` radians about unit `axis`.
#[inline]
pub fn rotate_by_axis_angle<T: Real>(v: Vec3<T>, axis: Vec3<T>, angle: T) -> Vec3<T> {
    let (s, c) = angle.sin_cos();
    v * c + axis.cross(v) * s + axis * (axis.dot(v) * (T::ONE - c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn samples() -> Vec<Vec3<f64>> {
        vec![
            Vec3::new(0.3, -0.5, 1.2),
            Vec3::new(-2.0, 0.7, 0.1),
            Vec3::new(3.0, 1.4, -3.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(PI - 0.01, 0.2, -0.4),
        ]
    }

    #[test]
    fn test_identity_laws() {
        assert!(rotation_quat_from_matrix(&Mat3::<f64>::IDENTITY).is_identity());
        assert_eq!(rotation_matrix_from_quat(Quat::<f64>::IDENTITY), Mat3::IDENTITY);
        assert_eq!(rotation_quat_from_euler(Vec3::<f32>::ZERO), Quat::IDENTITY);
        assert_eq!(euler_from_matrix(&Mat3::<f32>::IDENTITY), Vec3::ZERO);
        assert_eq!(axis_angle_from_quat(Quat::<f32>::IDENTITY), AxisAngle::IDENTITY);
    }

    #[test]
    fn test_zero_angle_any_axis() {
        for axis in [Vec3::X, Vec3::new(0.6, 0.0, 0.8), Vec3::ZERO] {
            assert!(rotation_quat_from_axis_angle(axis, 0.0f64).is_identity());
        }
    }

    #[test]
    fn test_euler_application_order() {
        // X first: Y -> Z, then Y: Z -> X
        let e = Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(rotate_by_euler(Vec3::Y, e), Vec3::X, epsilon = EPS);
        assert_abs_diff_eq!(rotation_quat_from_euler(e) * Vec3::Y, Vec3::X, epsilon = EPS);
    }

    #[test]
    fn test_euler_quat_matches_axis_product() {
        for e in samples() {
            let qx = rotation_quat_from_axis_angle(Vec3::X, e.x);
            let qy = rotation_quat_from_axis_angle(Vec3::Y, e.y);
            let qz = rotation_quat_from_axis_angle(Vec3::Z, e.z);
            assert_abs_diff_eq!(rotation_quat_from_euler(e), qz * qy * qx, epsilon = EPS);
        }
    }

    #[test]
    fn test_matrix_quat_roundtrip() {
        for e in samples() {
            let m = rotation_matrix_from_euler(e);
            assert!(m.is_orthonormal(1e-12));
            let q = rotation_quat_from_matrix(&m);
            assert!(q.is_unit(1e-12));
            assert!(q.is_same_rotation(rotation_quat_from_euler(e), 1e-9));
            assert_abs_diff_eq!(rotation_matrix_from_quat(q), m, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quat_from_matrix_half_turns() {
        // Each hits a different non-trace branch
        let rx = Mat3::from_diagonal(Vec3::new(1.0, -1.0, -1.0));
        let ry = Mat3::from_diagonal(Vec3::new(-1.0, 1.0, -1.0));
        let rz = Mat3::from_diagonal(Vec3::new(-1.0, -1.0, 1.0));
        assert_eq!(rotation_quat_from_matrix(&rx), Quat::new(1.0f64, 0.0, 0.0, 0.0));
        assert_eq!(rotation_quat_from_matrix(&ry), Quat::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(rotation_quat_from_matrix(&rz), Quat::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn test_euler_roundtrip() {
        for e in samples() {
            let back = euler_from_matrix(&rotation_matrix_from_euler(e));
            assert_abs_diff_eq!(back, e, epsilon = 1e-9);
            assert_abs_diff_eq!(euler_from_quat(rotation_quat_from_euler(e)), e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_euler_gimbal_lock() {
        let up = euler_from_matrix(&rotation_matrix_from_euler(Vec3::new(0.4, FRAC_PI_2, 0.1)));
        assert_abs_diff_eq!(up, Vec3::new(0.3, FRAC_PI_2, 0.0), epsilon = 1e-9);

        let down = euler_from_matrix(&rotation_matrix_from_euler(Vec3::new(0.4, -FRAC_PI_2, 0.1)));
        assert_abs_diff_eq!(down, Vec3::new(0.5, -FRAC_PI_2, 0.0), epsilon = 1e-9);

        // Same rotation either way
        let m = rotation_matrix_from_euler(Vec3::new(0.4, -FRAC_PI_2, 0.1));
        assert_abs_diff_eq!(rotation_matrix_from_euler(down), m, epsilon = 1e-9);
    }

    #[test]
    fn test_euler_near_gimbal_lock_f32() {
        for pitch in [1e-2f32, 1.2e-3, 5e-4, 1e-4] {
            for y in [std::f32::consts::FRAC_PI_2 - pitch, pitch - std::f32::consts::FRAC_PI_2] {
                let e = Vec3::new(0.4f32, y, 0.1);
                let m = rotation_matrix_from_euler(e);
                let back = euler_from_matrix(&m);
                assert!((back.y - y).abs() < 1e-3, "{e} -> {back}");
                assert_abs_diff_eq!(rotation_matrix_from_euler(back), m, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_axis_angle_roundtrip() {
        let axis = Vec3::new(1.0, 2.0, -2.0) / 3.0;
        let q = rotation_quat_from_axis_angle(axis, 1.25);
        let aa = axis_angle_from_quat(q);
        assert_abs_diff_eq!(aa.axis, axis, epsilon = EPS);
        assert!((aa.angle - 1.25).abs() < EPS);

        let m = rotation_matrix_from_axis_angle(axis, 1.25);
        assert_abs_diff_eq!(m, rotation_matrix_from_quat(q), epsilon = EPS);
        assert!(axis_angle_from_matrix(&m).is_almost_equal(&aa, 1e-9));
    }

    #[test]
    fn test_axis_angle_negative_angle() {
        let aa = axis_angle_from_quat(rotation_quat_from_axis_angle(Vec3::Z, -1.0f64));
        assert_abs_diff_eq!(aa.axis, Vec3::BACK, epsilon = EPS);
        assert!((aa.angle - 1.0).abs() < EPS);

        // -q flips into the same hemisphere
        let q = rotation_quat_from_axis_angle(Vec3::Y, 2.5f64);
        assert_eq!(axis_angle_from_quat(-q), axis_angle_from_quat(q));
    }

    #[test]
    fn test_axis_angle_from_euler() {
        let aa = axis_angle_from_euler(Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_abs_diff_eq!(aa.axis, Vec3::Z, epsilon = EPS);
        assert!((aa.angle - FRAC_PI_2).abs() < EPS);
        assert_abs_diff_eq!(euler_from_axis_angle(aa.axis, aa.angle), Vec3::new(0.0, 0.0, FRAC_PI_2), epsilon = EPS);
    }

    #[test]
    fn test_from_to() {
        let from = Vec3::new(1.0, 0.0, 0.0);
        let to = Vec3::new(0.0, 0.6, 0.8);
        let q = rotation_quat_from_to(from, to);
        assert!(q.is_unit(EPS));
        assert_abs_diff_eq!(q * from, to, epsilon = EPS);
        assert_abs_diff_eq!(rotation_matrix_from_to(from, to) * from, to, epsilon = EPS);
        assert!(rotation_quat_from_to(to, to).is_identity());
    }

    #[test]
    fn test_from_to_antiparallel() {
        let q = rotation_quat_from_to(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(q, Quat::new(-1.0f64, 0.0, 0.0, 0.0));

        // from along UP falls back to FORWARD
        let q = rotation_quat_from_to(Vec3::<f64>::UP, Vec3::DOWN);
        assert_eq!(q, Quat::new(1.0, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(q * Vec3::UP, Vec3::DOWN, epsilon = EPS);
    }

    #[test]
    fn test_rotate_by_axis_angle() {
        let axis = Vec3::new(0.0, 0.6, 0.8);
        let v = Vec3::new(1.0, -2.0, 0.5);
        let expected = rotation_matrix_from_axis_angle(axis, 0.7) * v;
        assert_abs_diff_eq!(rotate_by_axis_angle(v, axis, 0.7), expected, epsilon = EPS);
    }

    #[test]
    fn test_into_rotation_matrix() {
        let q = rotation_quat_from_euler(Vec3::new(0.1f32, 0.2, 0.3));
        let m = rotation_matrix_from_quat(q);
        assert_eq!(q.into_rotation_matrix(), m);
        assert_eq!((&m).into_rotation_matrix(), m);
        let aa = AxisAngle::new(Vec3::Z, 0.5f32);
        assert_eq!(aa.into_rotation_matrix(), rotation_matrix_from_axis_angle(Vec3::Z, 0.5));
    }
}
