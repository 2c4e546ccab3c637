//! 2D rotations.
//!
//! A 2D rotation is a single angle in radians, counter-clockwise positive,
//! or the equivalent [`Mat2`]:
//!
//! ```text
//! | cos -sin |
//! | sin  cos |
//! ```

use crate::{Mat2, Real, Vec2};

/// Anything that can be turned into a 2x2 rotation matrix: a [`Mat2`] or an
/// angle in radians.
pub trait IntoRotationMatrix2d<T: Real> {
    /// Converts to a rotation matrix.
    fn into_rotation_matrix_2d(self) -> Mat2<T>;
}

impl<T: Real> IntoRotationMatrix2d<T> for Mat2<T> {
    #[inline]
    fn into_rotation_matrix_2d(self) -> Mat2<T> {
        self
    }
}

impl<T: Real> IntoRotationMatrix2d<T> for &Mat2<T> {
    #[inline]
    fn into_rotation_matrix_2d(self) -> Mat2<T> {
        *self
    }
}

macro_rules! impl_angle_into_rotation {
    ($($t:ty),*) => {$(
        impl IntoRotationMatrix2d<$t> for $t {
            #[inline]
            fn into_rotation_matrix_2d(self) -> Mat2<$t> {
                rotation_matrix_2d(self)
            }
        }
    )*};
}

impl_angle_into_rotation!(f32, f64);

/// Counter-clockwise rotation matrix for `angle` radians.
///
/// # Example
///
/// ```rust
/// use xform_math::rotation2d::rotation_matrix_2d;
///
/// let m = rotation_matrix_2d(std::f32::consts::FRAC_PI_2);
/// assert!(m.m00().abs() < 1e-3);
/// assert!((m.m10() - 1.0).abs() < 1e-3);
/// assert!((m.m01() + 1.0).abs() < 1e-3);
/// ```
#[inline]
pub fn rotation_matrix_2d<T: Real>(angle: T) -> Mat2<T> {
    let (s, c) = angle.sin_cos();
    Mat2::from_rows([[c, -s], [s, c]])
}

/// Angle of a 2D rotation matrix, in `(-π, π]`.
#[inline]
pub fn angle_from_matrix_2d<T: Real>(m: &Mat2<T>) -> T {
    m.m10().atan2(m.m00())
}

/// Signed counter-clockwise angle taking `from` onto `to`, in `(-π, π]`.
///
/// Inputs need not be unit length.
pub fn rotation_angle_from_to_2d<T: Real>(from: Vec2<T>, to: Vec2<T>) -> T {
    let angle = from.signed_angle(to);
    // atan2(-0, -1) is -π
    if angle <= -T::PI { T::PI } else { angle }
}

/// Rotation matrix taking the direction of `from` onto the direction of `to`.
#[inline]
pub fn rotation_matrix_2d_from_to<T: Real>(from: Vec2<T>, to: Vec2<T>) -> Mat2<T> {
    rotation_matrix_2d(rotation_angle_from_to_2d(from, to))
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate_2d<T: Real>(v: Vec2<T>, angle: T) -> Vec2<T> {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quarter_turn_matrix() {
        let m = rotation_matrix_2d(std::f32::consts::FRAC_PI_2);
        assert!((m.m00() - 0.0).abs() < 0.001);
        assert!((m.m10() - 1.0).abs() < 0.001);
        assert!((m.m01() + 1.0).abs() < 0.001);
        assert!((m.m11() - 0.0).abs() < 0.001);
        assert_abs_diff_eq!(m * Vec2::X, Vec2::Y, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_roundtrip() {
        for angle in [0.0, 0.5, -1.0, 2.5, -3.0, PI] {
            let m = rotation_matrix_2d(angle);
            assert!((angle_from_matrix_2d(&m) - angle).abs() < 1e-12);
        }
    }

    #[test]
    fn test_from_to() {
        let from = Vec2::new(2.0, 0.0);
        let to = Vec2::new(0.0, -3.0);
        assert!((rotation_angle_from_to_2d(from, to) + FRAC_PI_2).abs() < 1e-12);

        let m = rotation_matrix_2d_from_to(from, to);
        assert_abs_diff_eq!(m * Vec2::X, Vec2::DOWN, epsilon = 1e-12);
    }

    #[test]
    fn test_from_to_opposite_is_positive_pi() {
        let angle = rotation_angle_from_to_2d(Vec2::new(1.0, 0.0), Vec2::new(-1.0, -0.0));
        assert_eq!(angle, PI);
        assert_eq!(rotation_angle_from_to_2d(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)), PI);
    }

    #[test]
    fn test_rotate_2d() {
        let v = Vec2::new(3.0, -1.5);
        let expected = rotation_matrix_2d(0.8) * v;
        assert_abs_diff_eq!(rotate_2d(v, 0.8), expected, epsilon = 1e-12);
        assert_eq!(rotate_2d(v, 0.0), v);
    }

    #[test]
    fn test_into_rotation_matrix_2d() {
        let m = rotation_matrix_2d(0.3f32);
        assert_eq!(0.3f32.into_rotation_matrix_2d(), m);
        assert_eq!((&m).into_rotation_matrix_2d(), m);
    }
}
