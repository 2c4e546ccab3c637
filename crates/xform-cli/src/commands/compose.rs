//! Compose command - build a TRS matrix

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::{emit, format_mat4, trs_from_args, Options};
use crate::TrsArgs;

#[derive(Serialize)]
struct ComposeOutput {
    /// Row-major
    matrix: [[f64; 4]; 4],
}

pub fn run(args: TrsArgs, opts: Options) -> Result<()> {
    let m = trs_from_args(&args, opts)?;
    info!(translation = ?args.translation, euler = ?args.euler, scaling = ?args.scaling, "composed TRS matrix");

    let out = ComposeOutput { matrix: std::array::from_fn(|r| m.row(r)) };
    emit(opts, &out, || format_mat4(&m))
}
