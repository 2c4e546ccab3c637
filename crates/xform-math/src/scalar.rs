//! Scalar traits shared by every vector, matrix and quaternion type.
//!
//! Component types implement [`Arithmetic`]. Each one names a
//! *computational* float type that is used whenever a result needs a square
//! root, trigonometry or a division that must not truncate:
//!
//! | component | computational |
//! |---|---|
//! | `i8`, `u8`, `i16`, `u16` | `f32` |
//! | `i32`, `u32`, `i64`, `u64` | `f64` |
//! | `f32` | `f32` |
//! | `f64` | `f64` |
//!
//! So `Vec3::<i16>::new(3, 4, 0).magnitude()` is an `f32` equal to `5.0`.
//!
//! [`Real`] is implemented by `f32` and `f64` only and is the bound for
//! everything rotation-related.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{RelativeEq, UlpsEq};

/// A numeric component type usable in vectors and matrices.
pub trait Arithmetic:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Float type used for magnitudes, trigonometry and interpolation.
    type Computational: Real;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Widens the value to the computational type.
    fn to_computational(self) -> Self::Computational;

    /// Narrows a computational value back to this type.
    ///
    /// Integers truncate toward zero and saturate at their bounds.
    fn from_computational(value: Self::Computational) -> Self;

    /// Smaller of two values (`self` when they are unordered).
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values (`self` when they are unordered).
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// An [`Arithmetic`] type with a sign.
pub trait Signed: Arithmetic + Neg<Output = Self> {
    /// `-1` as a constant.
    const NEG_ONE: Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

/// A floating-point scalar: `f32` or `f64`.
pub trait Real:
    Signed
    + Arithmetic<Computational = Self>
    + Display
    + RelativeEq<Epsilon = Self>
    + UlpsEq<Epsilon = Self>
{
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// `π / 2`.
    const FRAC_PI_2: Self;
    /// `2π`.
    const TAU: Self;
    /// Machine epsilon.
    const EPSILON: Self;
    /// Threshold below which lengths, sines and determinants count as zero
    /// in degenerate-case branches (`1e-6` for `f32`, `1e-12` for `f64`).
    const NEAR_ZERO: Self;
    /// Largest deviation of `RᵀR` from identity still accepted as a rotation
    /// by the guarded decompositions (`1e-4` for `f32`, `1e-6` for `f64`).
    const ORTHONORMAL_TOLERANCE: Self;

    /// Converts an `f64` literal.
    fn from_f64(value: f64) -> Self;
    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Sine and cosine at once.
    fn sin_cos(self) -> (Self, Self);
    /// Arcsine.
    fn asin(self) -> Self;
    /// Arccosine.
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;
    /// `1 / self`.
    fn recip(self) -> Self;
    /// Magnitude of `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
    /// Euclidean remainder.
    fn rem_euclid(self, rhs: Self) -> Self;
    /// Clamps to `[min, max]`.
    fn clamp(self, min: Self, max: Self) -> Self;
    /// `true` unless NaN or infinite.
    fn is_finite(self) -> bool;
    /// `true` for NaN.
    fn is_nan(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty => $c:ty),* $(,)?) => {$(
        impl Arithmetic for $t {
            type Computational = $c;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn to_computational(self) -> $c {
                self as $c
            }

            #[inline]
            fn from_computational(value: $c) -> Self {
                value as $t
            }
        }
    )*};
}

impl_integer!(
    i8 => f32,
    u8 => f32,
    i16 => f32,
    u16 => f32,
    i32 => f64,
    u32 => f64,
    i64 => f64,
    u64 => f64,
);

macro_rules! impl_signed_integer {
    ($($t:ty),* $(,)?) => {$(
        impl Signed for $t {
            const NEG_ONE: Self = -1;

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_signed_integer!(i8, i16, i32, i64);

macro_rules! impl_real {
    ($t:ident, $near_zero:expr, $ortho:expr) => {
        impl Arithmetic for $t {
            type Computational = $t;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn to_computational(self) -> $t {
                self
            }

            #[inline]
            fn from_computational(value: $t) -> Self {
                value
            }
        }

        impl Signed for $t {
            const NEG_ONE: Self = -1.0;

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }
        }

        impl Real for $t {
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = std::$t::consts::PI;
            const FRAC_PI_2: Self = std::$t::consts::FRAC_PI_2;
            const TAU: Self = std::$t::consts::TAU;
            const EPSILON: Self = $t::EPSILON;
            const NEAR_ZERO: Self = $near_zero;
            const ORTHONORMAL_TOLERANCE: Self = $ortho;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $t::sin_cos(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $t::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }

            #[inline]
            fn recip(self) -> Self {
                $t::recip(self)
            }

            #[inline]
            fn copysign(self, sign: Self) -> Self {
                $t::copysign(self, sign)
            }

            #[inline]
            fn rem_euclid(self, rhs: Self) -> Self {
                $t::rem_euclid(self, rhs)
            }

            #[inline]
            fn clamp(self, min: Self, max: Self) -> Self {
                $t::clamp(self, min, max)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
        }
    };
}

impl_real!(f32, 1e-6, 1e-4);
impl_real!(f64, 1e-12, 1e-6);
