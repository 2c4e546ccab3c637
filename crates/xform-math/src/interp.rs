//! Scalar interpolation and angle helpers.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`], [`remap`])
//! - Angle unit conversion ([`deg_to_rad`], [`rad_to_deg`])
//! - Angle wrapping ([`wrap_angle`])
//! - Tolerant comparison ([`are_almost_equal`])
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{deg_to_rad, lerp, wrap_angle};
//!
//! let mid = lerp(0.0f32, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//!
//! let right = deg_to_rad(90.0f64);
//! assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let wrapped = wrap_angle(2.5 * std::f64::consts::PI);
//! assert!((wrapped - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use crate::Real;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use xform_math::lerp;
///
/// assert_eq!(lerp(0.0f32, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0f32, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Returns `0` when the range is empty.
///
/// # Example
///
/// ```rust
/// use xform_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0f32, 10.0, 5.0), 0.5);
/// ```
#[inline]
pub fn inverse_lerp<T: Real>(a: T, b: T, value: T) -> T {
    if (b - a).abs() < T::NEAR_ZERO {
        T::ZERO
    } else {
        (value - a) / (b - a)
    }
}

/// Remaps a value from one range to another.
#[inline]
pub fn remap<T: Real>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees * (T::PI / T::from_f64(180.0))
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians * (T::from_f64(180.0) / T::PI)
}

/// Wraps an angle in radians into `(-π, π]`.
///
/// # Example
///
/// ```rust
/// use xform_math::wrap_angle;
///
/// let a = wrap_angle(-3.5f64 * std::f64::consts::PI);
/// assert!((a - 0.5 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn wrap_angle<T: Real>(radians: T) -> T {
    let wrapped = (radians + T::PI).rem_euclid(T::TAU) - T::PI;
    if wrapped <= -T::PI { wrapped + T::TAU } else { wrapped }
}

/// Returns true if `|a - b| <= tolerance`.
#[inline]
pub fn are_almost_equal<T: Real>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}
