//! Operations shared by [`crate::Mat2`], [`crate::Mat3`] and [`crate::Mat4`].
//!
//! # Convention
//!
//! Matrices are stored **column-major** (`cols[col][row]`) and use
//! **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! `mRC` always names row `R`, column `C`, regardless of storage order.

/// Implements storage-generic methods and operators for an `N x N` matrix.
macro_rules! impl_matrix_common {
    ($mat:ident, $n:literal) => {
        impl<T: $crate::Arithmetic> $mat<T> {
            /// Creates a matrix from column arrays.
            #[inline]
            pub const fn from_cols(cols: [[T; $n]; $n]) -> Self {
                Self { cols }
            }

            /// Creates a matrix from row arrays.
            ///
            /// Transposes the input into column-major storage.
            #[inline]
            pub const fn from_rows(rows: [[T; $n]; $n]) -> Self {
                Self { cols: rows }.transpose()
            }

            /// Returns the element at `row`, `col`.
            #[inline]
            pub const fn get(&self, row: usize, col: usize) -> T {
                self.cols[col][row]
            }

            /// Sets the element at `row`, `col`.
            #[inline]
            pub fn set(&mut self, row: usize, col: usize, value: T) {
                self.cols[col][row] = value;
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub const fn transpose(&self) -> Self {
                let mut cols = self.cols;
                let mut c = 0;
                while c < $n {
                    let mut r = 0;
                    while r < $n {
                        cols[c][r] = self.cols[r][c];
                        r += 1;
                    }
                    c += 1;
                }
                Self { cols }
            }

            /// Sum of the diagonal.
            #[inline]
            pub fn trace(&self) -> T {
                (0..$n).fold(T::ZERO, |acc, i| acc + self.cols[i][i])
            }

            /// Returns the elements in column-major order.
            #[inline]
            pub fn to_cols_array(&self) -> [T; $n * $n] {
                let mut out = [T::ZERO; $n * $n];
                for c in 0..$n {
                    out[c * $n..(c + 1) * $n].copy_from_slice(&self.cols[c]);
                }
                out
            }
        }

        impl<T: $crate::Real> $mat<T> {
            /// Returns true if all elements are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.cols.iter().flatten().all(|x| x.is_finite())
            }

            /// Returns true if every element differs by at most `tolerance`.
            #[inline]
            pub fn is_almost_equal(&self, other: &Self, tolerance: T) -> bool {
                self.cols
                    .iter()
                    .flatten()
                    .zip(other.cols.iter().flatten())
                    .all(|(a, b)| (*a - *b).abs() <= tolerance)
            }

            /// Largest element of `|MᵀM - I|`: zero for a rotation or
            /// reflection, growing with scale and shear.
            pub fn orthonormal_deviation(&self) -> T {
                let d = self.transpose() * *self - Self::IDENTITY;
                d.cols.iter().flatten().fold(T::ZERO, |m, &x| $crate::Arithmetic::max_of(m, x.abs()))
            }

            /// Returns true if the columns are orthonormal within `tolerance`.
            #[inline]
            pub fn is_orthonormal(&self, tolerance: T) -> bool {
                self.orthonormal_deviation() <= tolerance
            }
        }

        impl<T: $crate::Arithmetic> Default for $mat<T> {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        // Matrix * Matrix
        impl<T: $crate::Arithmetic> std::ops::Mul for $mat<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                let mut cols = [[T::ZERO; $n]; $n];
                for c in 0..$n {
                    for r in 0..$n {
                        let mut sum = T::ZERO;
                        for k in 0..$n {
                            sum += self.cols[k][r] * rhs.cols[c][k];
                        }
                        cols[c][r] = sum;
                    }
                }
                Self { cols }
            }
        }

        // Matrix * scalar
        impl<T: $crate::Arithmetic> std::ops::Mul<T> for $mat<T> {
            type Output = Self;

            #[inline]
            fn mul(mut self, rhs: T) -> Self {
                self.cols.iter_mut().flatten().for_each(|x| *x *= rhs);
                self
            }
        }

        impl<T: $crate::Arithmetic> std::ops::Add for $mat<T> {
            type Output = Self;

            #[inline]
            fn add(mut self, rhs: Self) -> Self {
                self.cols
                    .iter_mut()
                    .flatten()
                    .zip(rhs.cols.iter().flatten())
                    .for_each(|(a, b)| *a += *b);
                self
            }
        }

        impl<T: $crate::Arithmetic> std::ops::Sub for $mat<T> {
            type Output = Self;

            #[inline]
            fn sub(mut self, rhs: Self) -> Self {
                self.cols
                    .iter_mut()
                    .flatten()
                    .zip(rhs.cols.iter().flatten())
                    .for_each(|(a, b)| *a -= *b);
                self
            }
        }

        impl<T: $crate::Signed> std::ops::Neg for $mat<T> {
            type Output = Self;

            #[inline]
            fn neg(mut self) -> Self {
                self.cols.iter_mut().flatten().for_each(|x| *x = -*x);
                self
            }
        }

        // (row, col) indexing
        impl<T> std::ops::Index<(usize, usize)> for $mat<T> {
            type Output = T;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &T {
                &self.cols[col][row]
            }
        }

        impl<T> std::ops::IndexMut<(usize, usize)> for $mat<T> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                &mut self.cols[col][row]
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $mat<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "[")?;
                for r in 0..$n {
                    if r > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for c in 0..$n {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.cols[c][r])?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }

        impl<T: $crate::Real> approx::AbsDiffEq for $mat<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.cols
                    .iter()
                    .flatten()
                    .zip(other.cols.iter().flatten())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: $crate::Real> approx::RelativeEq for $mat<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.cols
                    .iter()
                    .flatten()
                    .zip(other.cols.iter().flatten())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T: $crate::Real> approx::UlpsEq for $mat<T> {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.cols
                    .iter()
                    .flatten()
                    .zip(other.cols.iter().flatten())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

/// Generates `mRC()` element accessors.
macro_rules! impl_element_accessors {
    ($mat:ident; $($name:ident => $row:literal, $col:literal);* $(;)?) => {
        impl<T: $crate::Arithmetic> $mat<T> {
            $(
                #[doc = concat!("Element at row ", stringify!($row), ", column ", stringify!($col), ".")]
                #[inline]
                pub const fn $name(&self) -> T {
                    self.cols[$col][$row]
                }
            )*
        }
    };
}

pub(crate) use impl_element_accessors;
pub(crate) use impl_matrix_common;
