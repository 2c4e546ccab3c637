//! Decompose command - split a TRS matrix into its parts

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use xform_math::{rotation, AxisAngle, Mat4, Quat, Trs, Vec3};

use super::{emit, exact, join, Options};
use crate::DecomposeArgs;

/// Decomposed parts, angles in the user's unit.
#[derive(Debug, Serialize)]
struct DecomposeOutput {
    translation: Vec3<f64>,
    rotation: Quat<f64>,
    euler: Vec3<f64>,
    axis_angle: AxisAngle<f64>,
    scaling: Vec3<f64>,
}

impl DecomposeOutput {
    fn plain(&self) -> String {
        let aa = &self.axis_angle;
        [
            format!("translation: {}", join(&self.translation.to_array())),
            format!("rotation:    {}", join(&self.rotation.to_array())),
            format!("euler:       {}", join(&self.euler.to_array())),
            format!("axis-angle:  {} {}", join(&aa.axis.to_array()), join(&[aa.angle])),
            format!("scaling:     {}", join(&self.scaling.to_array())),
        ]
        .join("\n")
    }
}

pub fn run(args: DecomposeArgs, opts: Options) -> Result<()> {
    let rows: [f64; 16] = exact(&args.values, "TRS matrix")?;
    let out = decompose(&rows, opts)?;
    emit(opts, &out, || out.plain())
}

fn decompose(rows: &[f64; 16], opts: Options) -> Result<DecomposeOutput> {
    let m = Mat4::from_rows(std::array::from_fn(|r| std::array::from_fn(|c| rows[r * 4 + c])));

    if m.row(3) != [0.0, 0.0, 0.0, 1.0] {
        warn!(row = ?m.row(3), "bottom row is not (0, 0, 0, 1); ignoring it");
    }

    let trs = Trs::try_from_matrix(&m).context("Matrix is not a decomposable TRS matrix")?;
    info!(scaling = %trs.scaling, "decomposed TRS matrix");

    let aa = rotation::axis_angle_from_quat(trs.rotation);
    Ok(DecomposeOutput {
        translation: trs.translation,
        rotation: trs.rotation,
        euler: opts.euler_out(rotation::euler_from_quat(trs.rotation)),
        axis_angle: AxisAngle::new(aa.axis, opts.angle_out(aa.angle)),
        scaling: trs.scaling,
    })
}
