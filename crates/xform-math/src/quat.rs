//! Quaternion type for 3D rotations.
//!
//! [`Quat`] stores `x, y, z` (vector part) and `w` (scalar part). Rotation
//! functions assume unit length; the type itself never enforces it.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{rotation, Quat, Vec3};
//!
//! let q = rotation::rotation_quat_from_axis_angle(Vec3::Z, std::f32::consts::FRAC_PI_2);
//! let v = q * Vec3::new(1.0, 0.0, 0.0);
//! assert!((v - Vec3::Y).magnitude() < 1e-6);
//!
//! // q and -q encode the same rotation
//! assert!(((-q) * Vec3::X - v).magnitude() < 1e-6);
//! ```

use std::fmt;
use std::ops::{Mul, MulAssign, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Real, Vec3};

/// A quaternion `xi + yj + zk + w`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T> {
    /// i component
    pub x: T,
    /// j component
    pub y: T,
    /// k component
    pub z: T,
    /// Scalar component
    pub w: T,
}

impl<T: Real> Quat<T> {
    /// Identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a quaternion from components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates from `[x, y, z, w]`.
    #[inline]
    pub const fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Creates from a vector part and a scalar part.
    #[inline]
    pub const fn from_xyz_w(v: Vec3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Vector part.
    #[inline]
    pub const fn xyz(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// 4D dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length.
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Length.
    #[inline]
    pub fn magnitude(self) -> T {
        self.magnitude_squared().sqrt()
    }

    /// Scales to unit length. A zero quaternion yields non-finite output.
    #[inline]
    pub fn normalize(self) -> Self {
        self * self.magnitude().recip()
    }

    /// Scales to unit length, or `None` for a near-zero quaternion.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.magnitude();
        if len.is_finite() && len > T::NEAR_ZERO {
            Some(self * len.recip())
        } else {
            None
        }
    }

    /// Conjugate; the inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse: `conjugate / |q|²`.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * self.magnitude_squared().recip()
    }

    /// Returns true for exactly `(0, 0, 0, 1)`.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Returns true if the rotation is the identity within `tolerance`,
    /// accepting either sign of `w`.
    #[inline]
    pub fn is_almost_identity(self, tolerance: T) -> bool {
        self.xyz().is_almost_equal(Vec3::ZERO, tolerance)
            && (self.w.abs() - T::ONE).abs() <= tolerance
    }

    /// Returns true if the length is within `tolerance` of 1.
    #[inline]
    pub fn is_unit(self, tolerance: T) -> bool {
        (self.magnitude_squared() - T::ONE).abs() <= tolerance
    }

    /// Returns true if every component differs by at most `tolerance`.
    #[inline]
    pub fn is_almost_equal(self, other: Self, tolerance: T) -> bool {
        self.xyz().is_almost_equal(other.xyz(), tolerance) && (self.w - other.w).abs() <= tolerance
    }

    /// Returns true if both quaternions describe the same rotation within
    /// `tolerance` (`q` and `-q` compare equal).
    #[inline]
    pub fn is_same_rotation(self, other: Self, tolerance: T) -> bool {
        self.is_almost_equal(other, tolerance) || self.is_almost_equal(-other, tolerance)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.xyz().is_finite() && self.w.is_finite()
    }

    /// Angle of the rotation taking `self` to `other`, in `[0, π]`.
    #[inline]
    pub fn angle_between(self, other: Self) -> T {
        let d = self.dot(other).abs().min_of(T::ONE);
        T::TWO * d.acos()
    }

    /// Rotates a vector: `q v q⁻¹` for unit `q`.
    #[inline]
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        let u = self.xyz();
        let t = u.cross(v) * T::TWO;
        v + t * self.w + u.cross(t)
    }

    /// Normalized linear interpolation along the shorter arc.
    pub fn nlerp(self, other: Self, t: T) -> Self {
        let other = if self.dot(other) < T::ZERO { -other } else { other };
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
        .normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to [`Quat::nlerp`] for nearly identical inputs.
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        // Ensure shortest path
        if dot < T::ZERO {
            other = -other;
            dot = -dot;
        }

        if dot > T::ONE - T::from_f64(1e-4) {
            return self.nlerp(other, t);
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((T::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;

        Self::new(
            self.x * a + other.x * b,
            self.y * a + other.y * b,
            self.z * a + other.z * b,
            self.w * a + other.w * b,
        )
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Hamilton product: `a * b` applies `b` first.
impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T: Real> MulAssign for Quat<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Quat * scalar
impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// Quat * Vec3 (rotation)
impl<T: Real> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate(rhs)
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<glam::Quat> for Quat<f32> {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat<f32>> for glam::Quat {
    #[inline]
    fn from(q: Quat<f32>) -> glam::Quat {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<glam::DQuat> for Quat<f64> {
    #[inline]
    fn from(q: glam::DQuat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat<f64>> for glam::DQuat {
    #[inline]
    fn from(q: Quat<f64>) -> glam::DQuat {
        glam::DQuat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl<T: Real> AbsDiffEq for Quat<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T: Real> RelativeEq for Quat<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl<T: Real> UlpsEq for Quat<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    fn about_z(angle: f64) -> Quat<f64> {
        let (s, c) = (angle * 0.5).sin_cos();
        Quat::new(0.0, 0.0, s, c)
    }

    #[test]
    fn test_quat_identity() {
        let q = Quat::<f32>::IDENTITY;
        assert!(q.is_identity());
        assert!(q.is_unit(0.0));
        assert_eq!(Quat::<f32>::default(), q);
        assert_eq!(q * Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0));
        assert!((-q).is_almost_identity(1e-6));
        assert!(!(-q).is_identity());
    }

    #[test]
    fn test_quat_rotate_vector() {
        let q = about_z(FRAC_PI_2);
        assert_abs_diff_eq!(q * Vec3::X, Vec3::Y, epsilon = 1e-12);
        assert_abs_diff_eq!(q * Vec3::Y, Vec3::LEFT, epsilon = 1e-12);
        assert_abs_diff_eq!(q * Vec3::Z, Vec3::Z, epsilon = 1e-12);
    }

    #[test]
    fn test_quat_hamilton_product() {
        let i = Quat::new(1.0f64, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quat::IDENTITY);
    }

    #[test]
    fn test_quat_composition_order() {
        // b applied first, then a
        let a = about_z(FRAC_PI_2);
        let b = Quat::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2); // 90° about X
        let v = Vec3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = 1e-12);
    }

    #[test]
    fn test_quat_inverse() {
        let q = Quat::new(1.0f64, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(q * q.inverse(), Quat::IDENTITY, epsilon = 1e-12);
        let u = q.normalize();
        assert!(u.is_unit(1e-12));
        assert_abs_diff_eq!(u.inverse(), u.conjugate(), epsilon = 1e-12);
    }

    #[test]
    fn test_quat_try_normalize() {
        assert!(Quat::new(0.0f32, 0.0, 0.0, 0.0).try_normalize().is_none());
        let q = Quat::new(0.0f32, 0.0, 0.0, 2.0).try_normalize().unwrap();
        assert!(q.is_identity());
    }

    #[test]
    fn test_quat_same_rotation() {
        let q = about_z(1.0);
        assert!(q.is_same_rotation(-q, 1e-12));
        assert!(!q.is_same_rotation(about_z(1.1), 1e-3));
    }

    #[test]
    fn test_quat_angle_between() {
        let a = about_z(0.2);
        let b = about_z(1.2);
        assert!((a.angle_between(b) - 1.0).abs() < 1e-9);
        assert!((a.angle_between(-b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quat_slerp() {
        let a = Quat::<f64>::IDENTITY;
        let b = about_z(PI * 0.5);
        assert_abs_diff_eq!(a.slerp(b, 0.0), a, epsilon = 1e-12);
        assert_abs_diff_eq!(a.slerp(b, 1.0), b, epsilon = 1e-12);
        assert_abs_diff_eq!(a.slerp(b, 0.5), about_z(PI * 0.25), epsilon = 1e-12);
        // Takes the short way round even when the target has negative w
        assert_abs_diff_eq!(a.slerp(-b, 0.5), about_z(PI * 0.25), epsilon = 1e-12);
    }

    #[test]
    fn test_quat_nlerp() {
        let a = Quat::<f32>::IDENTITY;
        let b = about_z(0.01);
        let mid = a.nlerp(Quat::new(b.x as f32, b.y as f32, b.z as f32, b.w as f32), 0.5);
        assert!(mid.is_unit(1e-6));
        assert!((mid.z - (0.0025f32).sin()).abs() < 1e-5);
    }

    #[test]
    fn test_quat_glam_roundtrip() {
        let g = glam::Quat::from_rotation_y(0.3);
        let q = Quat::from(g);
        assert_eq!(glam::Quat::from(q), g);
        let v = glam::Vec3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(Vec3::from(g * v), q * Vec3::from(v), epsilon = 1e-6);
    }
}
