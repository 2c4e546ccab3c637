//! CLI command implementations

pub mod compose;
pub mod convert;
pub mod decompose;
pub mod transform;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;
use tracing::warn;
use xform_math::{rotation, AxisAngle, IntoRotationMatrix, Mat3, Mat4, Quat, Vec3};

use crate::{Repr, TrsArgs};

/// Output settings shared by every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Print JSON instead of plain text
    pub json: bool,
    /// Angles in and out are in degrees
    pub degrees: bool,
}

impl Options {
    /// Converts a user-supplied angle to radians.
    pub fn angle_in(&self, angle: f64) -> f64 {
        if self.degrees { angle.to_radians() } else { angle }
    }

    /// Converts radians to the user's angle unit.
    pub fn angle_out(&self, angle: f64) -> f64 {
        if self.degrees { angle.to_degrees() } else { angle }
    }

    /// Converts user-supplied Euler angles to radians.
    pub fn euler_in(&self, e: Vec3<f64>) -> Vec3<f64> {
        Vec3::new(self.angle_in(e.x), self.angle_in(e.y), self.angle_in(e.z))
    }

    /// Converts Euler angles in radians to the user's unit.
    pub fn euler_out(&self, e: Vec3<f64>) -> Vec3<f64> {
        Vec3::new(self.angle_out(e.x), self.angle_out(e.y), self.angle_out(e.z))
    }
}

/// A rotation in one of the supported representations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Rotation {
    /// Quaternion
    Quat(Quat<f64>),
    /// Rotation matrix
    Matrix(Mat3<f64>),
    /// Euler angles
    Euler(Vec3<f64>),
    /// Axis-angle
    AxisAngle(AxisAngle<f64>),
}

impl Rotation {
    /// Parses `values` as the given representation. Angles follow `opts`.
    pub fn parse(repr: Repr, values: &[f64], opts: Options) -> Result<Self> {
        match repr {
            Repr::Quat => {
                let [x, y, z, w] = exact::<4>(values, "quaternion")?;
                let q = Quat::new(x, y, z, w);
                let unit = q.try_normalize().context("Quaternion has zero length")?;
                if !q.is_unit(1e-6) {
                    warn!(length = q.magnitude(), "quaternion is not unit length; normalizing");
                }
                Ok(Self::Quat(unit))
            }
            Repr::Matrix => {
                let v = exact::<9>(values, "rotation matrix")?;
                let m = Mat3::from_rows([[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]]);
                if !m.is_orthonormal(1e-6) {
                    warn!(matrix = %m, "matrix is not orthonormal; results are approximate");
                }
                Ok(Self::Matrix(m))
            }
            Repr::Euler => Ok(Self::Euler(opts.euler_in(vec3(values, "Euler angles")?))),
            Repr::AxisAngle => {
                let [x, y, z, angle] = exact::<4>(values, "axis-angle")?;
                let axis = Vec3::new(x, y, z).try_normalize().context("Rotation axis has zero length")?;
                Ok(Self::AxisAngle(AxisAngle::new(axis, opts.angle_in(angle))))
            }
        }
    }

    /// Representation of this value.
    pub fn repr(&self) -> Repr {
        match self {
            Self::Quat(_) => Repr::Quat,
            Self::Matrix(_) => Repr::Matrix,
            Self::Euler(_) => Repr::Euler,
            Self::AxisAngle(_) => Repr::AxisAngle,
        }
    }

    /// Converts to another representation.
    pub fn convert(self, to: Repr) -> Self {
        use rotation::*;

        match (self, to) {
            (Self::Matrix(m), Repr::Quat) => Self::Quat(rotation_quat_from_matrix(&m)),
            (Self::Matrix(m), Repr::Euler) => Self::Euler(euler_from_matrix(&m)),
            (Self::Matrix(m), Repr::AxisAngle) => Self::AxisAngle(axis_angle_from_matrix(&m)),
            (Self::Quat(q), Repr::Matrix) => Self::Matrix(rotation_matrix_from_quat(q)),
            (Self::Quat(q), Repr::Euler) => Self::Euler(euler_from_quat(q)),
            (Self::Quat(q), Repr::AxisAngle) => Self::AxisAngle(axis_angle_from_quat(q)),
            (Self::Euler(e), Repr::Matrix) => Self::Matrix(rotation_matrix_from_euler(e)),
            (Self::Euler(e), Repr::Quat) => Self::Quat(rotation_quat_from_euler(e)),
            (Self::Euler(e), Repr::AxisAngle) => Self::AxisAngle(axis_angle_from_euler(e)),
            (Self::AxisAngle(a), Repr::Matrix) => {
                Self::Matrix(rotation_matrix_from_axis_angle(a.axis, a.angle))
            }
            (Self::AxisAngle(a), Repr::Quat) => Self::Quat(rotation_quat_from_axis_angle(a.axis, a.angle)),
            (Self::AxisAngle(a), Repr::Euler) => Self::Euler(euler_from_axis_angle(a.axis, a.angle)),
            // Same representation
            (r, _) => r,
        }
    }

    /// Rotation matrix of this value.
    pub fn to_matrix(self) -> Mat3<f64> {
        match self {
            Self::Quat(q) => q.into_rotation_matrix(),
            Self::Matrix(m) => m,
            Self::Euler(e) => rotation::rotation_matrix_from_euler(e),
            Self::AxisAngle(a) => a.into_rotation_matrix(),
        }
    }

    /// Converts stored angles to the user's unit for display.
    pub fn for_output(self, opts: Options) -> Self {
        match self {
            Self::Euler(e) => Self::Euler(opts.euler_out(e)),
            Self::AxisAngle(a) => Self::AxisAngle(AxisAngle::new(a.axis, opts.angle_out(a.angle))),
            other => other,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quat(q) => write!(f, "{}", join(&q.to_array())),
            Self::Matrix(m) => {
                for r in 0..3 {
                    if r > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", join(&m.row(r).to_array()))?;
                }
                Ok(())
            }
            Self::Euler(e) => write!(f, "{}", join(&e.to_array())),
            Self::AxisAngle(a) => write!(f, "{} {}", join(&a.axis.to_array()), fmt_value(a.angle)),
        }
    }
}

/// Formats a number for plain-text output: 9 decimals, trailing zeros
/// dropped, and anything that rounds to `-0` printed as `0`.
pub fn fmt_value(v: f64) -> String {
    let s = format!("{v:.9}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Space-separated numbers.
pub fn join(values: &[f64]) -> String {
    values.iter().map(|v| fmt_value(*v)).collect::<Vec<_>>().join(" ")
}

/// Rows of a 4x4 matrix as plain text.
pub fn format_mat4(m: &Mat4<f64>) -> String {
    (0..4).map(|r| join(&m.row(r))).collect::<Vec<_>>().join("\n")
}

/// Exactly `N` values, or an error naming `what`.
pub fn exact<const N: usize>(values: &[f64], what: &str) -> Result<[f64; N]> {
    match <[f64; N]>::try_from(values) {
        Ok(a) => Ok(a),
        Err(_) => bail!("{} needs {} values, got {}", what, N, values.len()),
    }
}

/// Three values as a vector.
pub fn vec3(values: &[f64], what: &str) -> Result<Vec3<f64>> {
    Vec3::try_from(values).with_context(|| format!("Invalid {what}"))
}

/// Builds the TRS matrix described by the shared flags.
pub fn trs_from_args(args: &TrsArgs, opts: Options) -> Result<Mat4<f64>> {
    let translation = vec3(&args.translation, "translation")?;
    let euler = opts.euler_in(vec3(&args.euler, "Euler angles")?);
    let scaling = vec3(&args.scaling, "scaling")?;
    Ok(xform_math::trs::trs_matrix(
        translation,
        rotation::rotation_quat_from_euler(euler),
        scaling,
    ))
}

/// Prints `value` as JSON or via its plain-text form.
pub fn emit<T: Serialize>(opts: Options, value: &T, plain: impl FnOnce() -> String) -> Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
    } else {
        println!("{}", plain());
    }
    Ok(())
}
