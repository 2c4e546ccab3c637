//! # xform-math
//!
//! Vectors, matrices and quaternions for 2D/3D rotation and TRS transforms.
//!
//! This crate provides:
//!
//! - [`Vec2`], [`Vec3`] - generic vectors over any [`Arithmetic`] component
//! - [`Mat2`], [`Mat3`], [`Mat4`] - column-major square matrices
//! - [`Quat`] - rotation quaternions
//! - [`rotation`] - conversions between matrix, quaternion, Euler angles and
//!   axis-angle
//! - [`trs`] / [`trs2d`] - translation-rotation-scaling composition and
//!   decomposition
//! - [`batch`] - SIMD and parallel transforms of `f32` point arrays
//!
//! # Design
//!
//! Matrices are stored **column-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Integer component types widen to a float (`f32` or `f64`) for lengths and
//! angles, so `Vec3::<i16>::magnitude` returns `f32`.
//!
//! Core operations do no validation: degenerate input propagates into NaN or
//! infinity. The `try_*` functions and [`Trs::try_from_matrix`] check their
//! input and return [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{rotation, trs, Vec3};
//!
//! let rot = rotation::rotation_quat_from_euler(Vec3::new(0.1f64, 0.2, 0.3));
//! let m = trs::trs_matrix(Vec3::new(1.0, 2.0, 3.0), rot, Vec3::splat(2.0));
//!
//! let euler = trs::extract_euler(&m);
//! assert!((euler - Vec3::new(0.1, 0.2, 0.3)).magnitude() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for all value types
//!
//! # Dependencies
//!
//! - [`glam`] - interop conversions for f32/f64 vector and matrix types
//! - [`wide`] - portable SIMD in [`batch`]
//! - [`rayon`] - parallel batch transforms
//! - [`approx`] - float comparison traits on every value type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod scalar;
mod interp;
mod error;
mod matrix;
mod vec2;
mod vec3;
mod mat2;
mod mat3;
mod mat4;
mod quat;
pub mod rotation;
pub mod rotation2d;
pub mod trs;
pub mod trs2d;
pub mod batch;

pub use scalar::{Arithmetic, Real, Signed};
pub use interp::*;
pub use error::{Error, Result};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use rotation::{AxisAngle, IntoRotationMatrix};
pub use rotation2d::IntoRotationMatrix2d;
pub use trs::{RsBlock, Trs};
pub use trs2d::RsBlock2d;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{
        DMat2, DMat3, DMat4, DQuat, DVec2, DVec3, EulerRot, Mat2 as GlamMat2, Mat3 as GlamMat3,
        Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3,
    };
}

/// Common imports.
pub mod prelude {
    pub use crate::rotation::{AxisAngle, IntoRotationMatrix};
    pub use crate::rotation2d::IntoRotationMatrix2d;
    pub use crate::trs::{RsBlock, Trs};
    pub use crate::trs2d::RsBlock2d;
    pub use crate::{Arithmetic, Mat2, Mat3, Mat4, Quat, Real, Signed, Vec2, Vec3};
}
