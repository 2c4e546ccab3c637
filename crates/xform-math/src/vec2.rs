//! 2D vector type.
//!
//! [`Vec2`] mirrors [`crate::Vec3`] for planar math. The 2D "cross product"
//! is the scalar perp-dot `x1*y2 - y1*x2`, positive when the second vector
//! is counter-clockwise from the first.
//!
//! ```rust
//! use xform_math::Vec2;
//!
//! let a = Vec2::new(1.0f32, 0.0);
//! let b = Vec2::new(0.0f32, 2.0);
//! assert_eq!(a.cross(b), 2.0);
//! assert_eq!(a.perp(), Vec2::new(0.0, 1.0));
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Arithmetic, Error, Real, Signed};

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

impl<T: Arithmetic> Vec2<T> {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(T::ONE, T::ONE);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(T::ZERO, T::ONE);

    /// Right direction, same as [`Vec2::X`].
    pub const RIGHT: Self = Self::X;

    /// Up direction, same as [`Vec2::Y`].
    pub const UP: Self = Self::Y;

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to the same value.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perp-dot product (z of the 3D cross product).
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
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
        self.x.min_of(self.y)
    }

    /// Returns the largest component.
    #[inline]
    pub fn max_element(self) -> T {
        self.x.max_of(self.y)
    }

    /// Sum of the components.
    #[inline]
    pub fn element_sum(self) -> T {
        self.x + self.y
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min_of(other.x), self.y.min_of(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max_of(other.x), self.y.max_of(other.y))
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Linear interpolation, evaluated in the computational type.
    #[inline]
    pub fn lerp(self, other: Self, t: T::Computational) -> Self {
        let a = self.to_computational();
        let b = other.to_computational();
        Self::from_computational(a + (b - a) * t)
    }

    /// Widens every component to the computational type.
    #[inline]
    pub fn to_computational(self) -> Vec2<T::Computational> {
        Vec2::new(self.x.to_computational(), self.y.to_computational())
    }

    /// Narrows a computational vector back to this component type.
    #[inline]
    pub fn from_computational(v: Vec2<T::Computational>) -> Self {
        Self::new(T::from_computational(v.x), T::from_computational(v.y))
    }
}

impl<T: Signed> Vec2<T> {
    /// Left direction (-1, 0).
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO);

    /// Down direction (0, -1).
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE);

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl<T: Real> Vec2<T> {
    /// Normalizes the vector to unit length.
    ///
    /// A zero vector yields non-finite components.
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
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).magnitude()
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    #[inline]
    pub fn angle_between(self, other: Self) -> T {
        self.signed_angle(other).abs()
    }

    /// Counter-clockwise angle from `self` to `other`, in `(-π, π]`.
    #[inline]
    pub fn signed_angle(self, other: Self) -> T {
        self.cross(other).atan2(self.dot(other))
    }

    /// Projection of `self` onto `onto`.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.magnitude_squared())
    }

    /// Projection onto the line through the origin with the given unit
    /// normal (the 2D counterpart of [`Vec3::project_on_plane`]).
    ///
    /// [`Vec3::project_on_plane`]: crate::Vec3::project_on_plane
    #[inline]
    pub fn project_on_plane(self, normal: Self) -> Self {
        self - normal * self.dot(normal)
    }

    /// Reflection about the line with the given unit normal.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (T::TWO * self.dot(normal))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl<T> IndexMut<usize> for Vec2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl<T: Arithmetic> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Arithmetic> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Component-wise
impl<T: Arithmetic> Mul for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Arithmetic> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// Component-wise
impl<T: Arithmetic> Div for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Arithmetic> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Signed> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Arithmetic> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Arithmetic> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Arithmetic> MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Arithmetic> DivAssign<T> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Arithmetic> Sum for Vec2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, v| acc + v)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            #[inline]
            fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Arithmetic> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from(a: [T; 2]) -> Self {
        Self::from_array(a)
    }
}

impl<T: Arithmetic> From<Vec2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vec2<T>) -> [T; 2] {
        v.to_array()
    }
}

impl<T: Arithmetic> TryFrom<&[T]> for Vec2<T> {
    type Error = Error;

    fn try_from(span: &[T]) -> Result<Self, Error> {
        match span {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(Error::ComponentCount {
                expected: 2,
                got: span.len(),
            }),
        }
    }
}

impl From<glam::Vec2> for Vec2<f32> {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2<f32>> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2<f32>) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<glam::DVec2> for Vec2<f64> {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2<f64>> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2<f64>) -> glam::DVec2 {
        glam::DVec2::new(v.x, v.y)
    }
}

impl<T: Real> AbsDiffEq for Vec2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T: Real> RelativeEq for Vec2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T: Real> UlpsEq for Vec2<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
