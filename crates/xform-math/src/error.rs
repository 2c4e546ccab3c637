//! Error types for the guarded entry points.
//!
//! Most functions in this crate follow a no-validation contract: degenerate
//! input (zero scale, zero-length vectors, NaN) propagates silently into
//! non-finite output. The `try_*` variants check their preconditions and
//! report failures through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{trs, Error, Mat3, Vec3};
//!
//! let rs = trs::rs_matrix(&Mat3::<f32>::IDENTITY, Vec3::new(1.0, 0.0, 2.0));
//! match trs::try_extract_rotation_matrix(&rs) {
//!     Err(Error::ZeroScale { axis }) => assert_eq!(axis, 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the guarded operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A scaling component is zero, so the rotation cannot be recovered.
    #[error("scaling component {axis} is zero; rotation is not recoverable")]
    ZeroScale {
        /// Index of the offending column (0 = x).
        axis: usize,
    },

    /// Input contained NaN or infinity.
    #[error("{what} contains non-finite values")]
    NonFinite {
        /// Name of the offending input.
        what: &'static str,
    },

    /// The RS block has shear: its de-scaled columns are not orthonormal.
    #[error("{what} is not a rotation times a scale (deviation {deviation:e})")]
    NotOrthogonal {
        /// Name of the offending input.
        what: &'static str,
        /// Largest element of `|RᵀR - I|`.
        deviation: f64,
    },

    /// A slice had the wrong number of components.
    #[error("expected {expected} components, got {got}")]
    ComponentCount {
        /// Required length
        expected: usize,
        /// Provided length
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::ZeroScale { axis: 2 };
        assert!(err.to_string().contains('2'));

        let err = Error::ComponentCount { expected: 3, got: 5 };
        assert_eq!(err.to_string(), "expected 3 components, got 5");

        let err = Error::NonFinite { what: "TRS matrix" };
        assert!(err.to_string().starts_with("TRS matrix"));

        let err = Error::NotOrthogonal { what: "RS matrix", deviation: 0.25 };
        assert_eq!(err.to_string(), "RS matrix is not a rotation times a scale (deviation 2.5e-1)");
    }
}
