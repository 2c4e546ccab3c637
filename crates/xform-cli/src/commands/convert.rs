//! Convert command - rotation representation conversion

use anyhow::Result;
use tracing::{debug, info};

use super::{emit, Options, Rotation};
use crate::ConvertArgs;

pub fn run(args: ConvertArgs, opts: Options) -> Result<()> {
    let input = Rotation::parse(args.from, &args.values, opts)?;
    debug!(?input, "parsed rotation");

    let output = convert(input, args.to, opts);
    info!(from = ?input.repr(), to = ?args.to, "converted rotation");

    emit(opts, &output, || output.to_string())
}

/// Converts `input` and prepares it for display in the user's angle unit.
fn convert(input: Rotation, to: crate::Repr, opts: Options) -> Rotation {
    input.convert(to).for_output(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Repr;

    #[test]
    fn test_euler_degrees_to_axis_angle() {
        let opts = Options { json: false, degrees: true };
        let input = Rotation::parse(Repr::Euler, &[0.0, 0.0, 90.0], opts).unwrap();
        let out = convert(input, Repr::AxisAngle, opts);
        assert_eq!(out.to_string(), "0 0 1 90");
    }

    #[test]
    fn test_antiparallel_quat_to_matrix() {
        // Half turn about -X
        let opts = Options::default();
        let input = Rotation::parse(Repr::Quat, &[-1.0, 0.0, 0.0, 0.0], opts).unwrap();
        let out = convert(input, Repr::Matrix, opts);
        assert_eq!(out.to_string(), "1 0 0\n0 -1 0\n0 0 -1");
    }
}
