//! Transform command - apply a TRS matrix to a point or direction

use anyhow::Result;
use tracing::debug;
use xform_math::{trs, Vec3};

use super::{emit, join, trs_from_args, vec3, Options};
use crate::TransformArgs;

pub fn run(args: TransformArgs, opts: Options) -> Result<()> {
    let out = transform(&args, opts)?;
    emit(opts, &out, || join(&out.to_array()))
}

fn transform(args: &TransformArgs, opts: Options) -> Result<Vec3<f64>> {
    let m = trs_from_args(&args.trs, opts)?;
    debug!(matrix = %m, "TRS matrix");

    match (&args.point, &args.direction) {
        (Some(p), _) => Ok(trs::transform_point(&m, vec3(p, "point")?)),
        (None, Some(d)) => Ok(trs::transform_direction(&m, vec3(d, "direction")?)),
        (None, None) => anyhow::bail!("Either --point or --direction is required"),
    }
}
