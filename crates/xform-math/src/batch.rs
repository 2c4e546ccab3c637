//! SIMD batch transforms for `f32` point and vector arrays.
//!
//! Points are loaded four at a time into structure-of-arrays lanes
//! (`wide::f32x4`), multiplied by a splatted 3x4 affine block, and written
//! back. Leftover elements go through the scalar path, so results match
//! [`crate::trs::transform_point`] up to float rounding.
//!
//! # Example
//!
//! ```rust
//! use xform_math::{batch, trs, Quat, Vec3};
//!
//! let m = trs::trs_matrix(Vec3::new(1.0f32, 0.0, 0.0), Quat::IDENTITY, Vec3::splat(2.0));
//! let points: Vec<Vec3<f32>> = (0..10).map(|i| Vec3::splat(i as f32)).collect();
//! let out = batch::transform_points(&m, &points);
//! assert_eq!(out[3], Vec3::new(7.0, 6.0, 6.0));
//! ```

use rayon::prelude::*;
use wide::f32x4;

use crate::{rotation, Mat3, Mat4, Quat, Vec3};

/// Elements handled per rayon task in [`par_transform_points`].
pub const PAR_CHUNK: usize = 4096;

/// A 3x4 affine block splatted across four lanes.
#[derive(Clone, Copy)]
struct AffineX4 {
    rows: [[f32x4; 4]; 3],
    scalar: Mat4<f32>,
}

impl AffineX4 {
    /// `translate = false` drops the translation column (directions).
    fn from_mat4(m: &Mat4<f32>, translate: bool) -> Self {
        let mut scalar = *m;
        if !translate {
            scalar.cols[3] = [0.0, 0.0, 0.0, 1.0];
        }
        let rows = std::array::from_fn(|r| std::array::from_fn(|c| f32x4::splat(scalar.get(r, c))));
        Self { rows, scalar }
    }

    fn from_mat3(m: &Mat3<f32>) -> Self {
        Self::from_mat4(&Mat4::from_mat3(*m), false)
    }

    #[inline]
    fn apply_x4(&self, chunk: &mut [Vec3<f32>]) {
        let x = f32x4::from([chunk[0].x, chunk[1].x, chunk[2].x, chunk[3].x]);
        let y = f32x4::from([chunk[0].y, chunk[1].y, chunk[2].y, chunk[3].y]);
        let z = f32x4::from([chunk[0].z, chunk[1].z, chunk[2].z, chunk[3].z]);

        let [ox, oy, oz] = self
            .rows
            .map(|[a, b, c, t]| (a * x + b * y + c * z + t).to_array());

        for (i, v) in chunk.iter_mut().enumerate() {
            *v = Vec3::new(ox[i], oy[i], oz[i]);
        }
    }

    fn apply_inplace(&self, values: &mut [Vec3<f32>]) {
        let mut chunks = values.chunks_exact_mut(4);
        for chunk in &mut chunks {
            self.apply_x4(chunk);
        }

        // Remainder with scalar ops
        for v in chunks.into_remainder() {
            *v = self.scalar.transform_point3(*v);
        }
    }
}

/// Applies a TRS matrix to every point.
pub fn transform_points(trs: &Mat4<f32>, points: &[Vec3<f32>]) -> Vec<Vec3<f32>> {
    let mut out = points.to_vec();
    transform_points_inplace(trs, &mut out);
    out
}

/// Applies a TRS matrix to every point in place.
#[inline]
pub fn transform_points_inplace(trs: &Mat4<f32>, points: &mut [Vec3<f32>]) {
    AffineX4::from_mat4(trs, true).apply_inplace(points);
}

/// Applies a TRS matrix to every direction, ignoring translation.
pub fn transform_directions(trs: &Mat4<f32>, directions: &[Vec3<f32>]) -> Vec<Vec3<f32>> {
    let mut out = directions.to_vec();
    AffineX4::from_mat4(trs, false).apply_inplace(&mut out);
    out
}

/// Rotates every vector by a unit quaternion.
pub fn rotate_vectors(q: Quat<f32>, vectors: &[Vec3<f32>]) -> Vec<Vec3<f32>> {
    let mut out = vectors.to_vec();
    AffineX4::from_mat3(&rotation::rotation_matrix_from_quat(q)).apply_inplace(&mut out);
    out
}

/// Parallel [`transform_points`] over rayon's global pool.
///
/// Splits the input into [`PAR_CHUNK`]-sized pieces; small inputs run on a
/// single task.
pub fn par_transform_points(trs: &Mat4<f32>, points: &[Vec3<f32>]) -> Vec<Vec3<f32>> {
    let affine = AffineX4::from_mat4(trs, true);
    let mut out = points.to_vec();
    out.par_chunks_mut(PAR_CHUNK)
        .for_each(|chunk| affine.apply_inplace(chunk));
    out
}
