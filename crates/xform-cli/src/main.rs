//! xform - rotation conversion and TRS transform calculator
//!
//! Converts between rotation representations and composes, decomposes and
//! applies TRS matrices from the command line.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "xform")]
#[command(author, version, about = "Rotation conversion and TRS transform calculator")]
#[command(long_about = "
Converts between rotation matrices, quaternions, Euler angles and axis-angle
pairs, and builds, decomposes and applies translation-rotation-scaling
matrices.

Euler angles (x, y, z) are applied X first, then Y, then Z.
Matrices are given and printed row by row.

Examples:
  xform convert --from euler --to quat 0.1 0.2 0.3
  xform --degrees convert --from axis-angle --to matrix 0 0 1 90
  xform compose --translation 1 2 3 --euler 0 0 1.57 --scaling 2 2 2
  xform decompose 2 0 0 1  0 2 0 2  0 0 2 3  0 0 0 1
  xform transform --euler 0 0 1.57 --point 1 0 0
  xform --json decompose 1 0 0 0  0 1 0 0  0 0 1 0  0 0 0 1

Set XFORM_LOG (e.g. XFORM_LOG=xform_math=trace) to override -v.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Read and print angles in degrees instead of radians
    #[arg(short, long, global = true)]
    degrees: bool,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a rotation between representations
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Build a TRS matrix from translation, Euler rotation and scaling
    Compose(TrsArgs),

    /// Split a TRS matrix into translation, rotation and scaling
    #[command(visible_alias = "d")]
    Decompose(DecomposeArgs),

    /// Apply a TRS transform to a point or direction
    #[command(visible_alias = "t")]
    Transform(TransformArgs),
}

/// Rotation representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Repr {
    /// Quaternion: x y z w
    Quat,
    /// 3x3 rotation matrix: 9 values, row by row
    Matrix,
    /// Euler angles: x y z
    Euler,
    /// Axis and angle: ax ay az angle
    AxisAngle,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input representation
    #[arg(long)]
    pub from: Repr,

    /// Output representation
    #[arg(long)]
    pub to: Repr,

    /// Input values
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Args)]
pub struct TrsArgs {
    /// Translation
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true,
          default_values_t = [0.0, 0.0, 0.0])]
    pub translation: Vec<f64>,

    /// Euler rotation (X, then Y, then Z)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true,
          default_values_t = [0.0, 0.0, 0.0])]
    pub euler: Vec<f64>,

    /// Per-axis scaling
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true,
          default_values_t = [1.0, 1.0, 1.0])]
    pub scaling: Vec<f64>,
}

#[derive(Args)]
pub struct DecomposeArgs {
    /// 16 matrix values, row by row
    #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub trs: TrsArgs,

    /// Point to transform (translation applies)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true,
          required_unless_present = "direction", conflicts_with = "direction")]
    pub point: Option<Vec<f64>>,

    /// Direction to transform (translation ignored)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub direction: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    let opts = commands::Options { json: cli.json, degrees: cli.degrees };

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, opts),
        Commands::Compose(args) => commands::compose::run(args, opts),
        Commands::Decompose(args) => commands::decompose::run(args, opts),
        Commands::Transform(args) => commands::transform::run(args, opts),
    }
}
