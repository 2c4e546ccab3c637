//! 3D vector type.
//!
//! [`Vec3`] is generic over any [`Arithmetic`] component type. Operations that
//! need a square root or trigonometry are available on every component type
//! through the computational float (see [`crate::scalar`]), while
//! normalization, projection and reflection require a [`Real`] component.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::Vec3;
//!
//! let a = Vec3::new(1.0f32, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.dot(b), 32.0);
//! assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
//!
//! // Integer vectors compute magnitudes in floating point.
//! let short = Vec3::<i16>::new(2, 3, 6);
//! assert_eq!(short.magnitude(), 7.0f32);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Arithmetic, Error, Real, Signed};

/// A 3D vector.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use xform_math::Vec3;
///
/// let v = Vec3::new(0.5f64, 0.5, 0.5);
/// assert_eq!(v.x, 0.5);
/// assert_eq!(v[2], 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl<T: Arithmetic> Vec3<T> {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Right direction, same as [`Vec3::X`].
    pub const RIGHT: Self = Self::X;

    /// Up direction, same as [`Vec3::Y`].
    pub const UP: Self = Self::Y;

    /// Forward direction, same as [`Vec3::Z`].
    pub const FORWARD: Self = Self::Z;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length, in the component type.
    #[inline]
    pub fn magnitude_squared(self) -> T {
        self.dot(self)
    }

    /// Length, computed in the computational float type.
    #[inline]
    pub fn magnitude(self) -> T::Computational {
        self.to_computational().magnitude_squared().sqrt()
    }

    /// Returns the smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        self.x.min_of(self.y).min_of(self.z)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> T {
        self.x.max_of(self.y).max_of(self.z)
    }

    /// Sum of the components.
    #[inline]
    pub fn element_sum(self) -> T {
        self.x + self.y + self.z
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min_of(other.x),
            self.y.min_of(other.y),
            self.z.min_of(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max_of(other.x),
            self.y.max_of(other.y),
            self.z.max_of(other.z),
        )
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Linear interpolation, evaluated in the computational type.
    ///
    /// `t = 0` returns self, `t = 1` returns other. Integer results truncate.
    #[inline]
    pub fn lerp(self, other: Self, t: T::Computational) -> Self {
        let a = self.to_computational();
        let b = other.to_computational();
        Self::from_computational(a + (b - a) * t)
    }

    /// Widens every component to the computational type.
    #[inline]
    pub fn to_computational(self) -> Vec3<T::Computational> {
        Vec3::new(
            self.x.to_computational(),
            self.y.to_computational(),
            self.z.to_computational(),
        )
    }

    /// Narrows a computational vector back to this component type.
    #[inline]
    pub fn from_computational(v: Vec3<T::Computational>) -> Self {
        Self::new(
            T::from_computational(v.x),
            T::from_computational(v.y),
            T::from_computational(v.z),
        )
    }
}

impl<T: Signed> Vec3<T> {
    /// Left direction (-1, 0, 0).
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO, T::ZERO);

    /// Down direction (0, -1, 0).
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE, T::ZERO);

    /// Back direction (0, 0, -1).
    pub const BACK: Self = Self::new(T::ZERO, T::ZERO, T::NEG_ONE);

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl<T: Real> Vec3<T> {
    /// Normalizes the vector to unit length.
    ///
    /// A zero vector yields non-finite components; use
    /// [`Vec3::try_normalize`] when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        self * self.magnitude().recip()
    }

    /// Normalizes the vector, or returns `None` if its length is near zero
    /// or not finite.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.magnitude();
        if len.is_finite() && len > T::NEAR_ZERO {
            Some(self / len)
        } else {
            None
        }
    }

    /// Returns true if the length is within `tolerance` of 1.
    #[inline]
    pub fn is_unit(self, tolerance: T) -> bool {
        (self.magnitude_squared() - T::ONE).abs() <= tolerance
    }

    /// Returns true if every component differs by at most `tolerance`.
    #[inline]
    pub fn is_almost_equal(self, other: Self, tolerance: T) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).magnitude()
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    #[inline]
    pub fn angle_between(self, other: Self) -> T {
        self.cross(other).magnitude().atan2(self.dot(other))
    }

    /// Angle from `self` to `other`, signed by the direction of `axis`.
    ///
    /// Positive when `self × other` points along `axis`.
    #[inline]
    pub fn signed_angle(self, other: Self, axis: Self) -> T {
        let angle = self.angle_between(other);
        if self.cross(other).dot(axis) < T::ZERO {
            -angle
        } else {
            angle
        }
    }

    /// Projection of `self` onto `onto`.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.magnitude_squared())
    }

    /// Projection onto the plane with the given unit normal.
    #[inline]
    pub fn project_on_plane(self, normal: Self) -> Self {
        self - normal * self.dot(normal)
    }

    /// Reflection about the plane with the given unit normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::TWO * self.dot(normal))
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

// Indexing
impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl<T: Arithmetic> Add for Vec3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 - Vec3
impl<T: Arithmetic> Sub for Vec3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 * Vec3 (component-wise)
impl<T: Arithmetic> Mul for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * scalar
impl<T: Arithmetic> Mul<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// Vec3 / Vec3 (component-wise)
impl<T: Arithmetic> Div for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// Vec3 / scalar
impl<T: Arithmetic> Div<T> for Vec3<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Signed> Neg for Vec3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Arithmetic> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Arithmetic> SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Arithmetic> MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Arithmetic> DivAssign<T> for Vec3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<T: Arithmetic> Sum for Vec3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

// scalar * Vec3
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec3<$t>> for $t {
            type Output = Vec3<$t>;

            #[inline]
            fn mul(self, rhs: Vec3<$t>) -> Vec3<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Arithmetic> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Arithmetic> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vec3<T>) -> [T; 3] {
        v.to_array()
    }
}

impl<T: Arithmetic> TryFrom<&[T]> for Vec3<T> {
    type Error = Error;

    fn try_from(span: &[T]) -> Result<Self, Error> {
        match span {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(Error::ComponentCount {
                expected: 3,
                got: span.len(),
            }),
        }
    }
}

impl From<glam::Vec3> for Vec3<f32> {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3<f32>> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3<f32>) -> glam::Vec3 {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::DVec3> for Vec3<f64> {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3<f64>> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3<f64>) -> glam::DVec3 {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

impl<T: Real> AbsDiffEq for Vec3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: Real> RelativeEq for Vec3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: Real> UlpsEq for Vec3<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
