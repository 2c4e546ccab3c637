//! Integration tests for xform crates.
//!
//! These tests exercise the public API across modules and cross-check the
//! conversions against `glam`.

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use glam::{DMat3, DMat4, DQuat, DVec3, EulerRot};
    use xform_math::prelude::*;
    use xform_math::{rotation, rotation2d, trs, trs2d, Error};

    const EPS: f64 = 1e-9;

    /// Deterministic Euler angles covering every quadrant, away from gimbal lock.
    fn sample_eulers() -> Vec<Vec3<f64>> {
        let mut out = Vec::new();
        for i in 0..7 {
            for j in 0..5 {
                for k in 0..7 {
                    out.push(Vec3::new(
                        -3.0 + i as f64 * 0.97,
                        -1.3 + j as f64 * 0.61,
                        -3.1 + k as f64 * 1.01,
                    ));
                }
            }
        }
        out
    }

    fn sample_quats() -> Vec<Quat<f64>> {
        sample_eulers().into_iter().map(rotation::rotation_quat_from_euler).collect()
    }

    fn dvec(v: Vec3<f64>) -> DVec3 {
        v.into()
    }

    // ------------------------------------------------------------------------
    // Round trips
    // ------------------------------------------------------------------------

    #[test]
    fn test_quat_matrix_quat_roundtrip() {
        for q in sample_quats() {
            let m = rotation::rotation_matrix_from_quat(q);
            let back = rotation::rotation_quat_from_matrix(&m);
            assert!(back.is_same_rotation(q, 1e-9), "{q} -> {back}");
            assert!(back.is_unit(1e-12));
        }
    }

    #[test]
    fn test_matrix_quat_matrix_roundtrip() {
        for e in sample_eulers() {
            let m = rotation::rotation_matrix_from_euler(e);
            let back = rotation::rotation_matrix_from_quat(rotation::rotation_quat_from_matrix(&m));
            assert!(back.is_almost_equal(&m, EPS), "{m}\n{back}");
        }
    }

    #[test]
    fn test_quat_euler_quat_roundtrip() {
        for q in sample_quats() {
            let back = rotation::rotation_quat_from_euler(rotation::euler_from_quat(q));
            assert!(back.is_same_rotation(q, 1e-9));
        }
    }

    #[test]
    fn test_euler_roundtrip_in_principal_range() {
        for e in sample_eulers() {
            if e.x.abs() >= PI || e.z.abs() >= PI || e.y.abs() >= FRAC_PI_2 {
                continue;
            }
            let back = rotation::euler_from_matrix(&rotation::rotation_matrix_from_euler(e));
            assert!(back.is_almost_equal(e, 1e-9), "{e} -> {back}");
        }
    }

    #[test]
    fn test_axis_angle_roundtrip() {
        for q in sample_quats() {
            let aa = rotation::axis_angle_from_quat(q);
            assert!(aa.angle >= 0.0 && aa.angle <= PI + EPS);
            assert!(aa.axis.is_unit(1e-9));
            let back = rotation::rotation_quat_from_axis_angle(aa.axis, aa.angle);
            assert!(back.is_same_rotation(q, 1e-9));
        }
    }

    #[test]
    fn test_double_cover() {
        for q in sample_quats() {
            let a = rotation::rotation_matrix_from_quat(q);
            let b = rotation::rotation_matrix_from_quat(-q);
            assert!(a.is_almost_equal(&b, 1e-12));
        }
    }

    // ------------------------------------------------------------------------
    // Identity laws
    // ------------------------------------------------------------------------

    #[test]
    fn test_identity_everywhere() {
        let zero = Vec3::<f64>::ZERO;
        assert_eq!(rotation::rotation_quat_from_euler(zero), Quat::IDENTITY);
        assert_eq!(rotation::rotation_matrix_from_euler(zero), Mat3::IDENTITY);
        assert_eq!(rotation::rotation_matrix_from_quat(Quat::<f64>::IDENTITY), Mat3::IDENTITY);
        assert_eq!(rotation::rotation_quat_from_matrix(&Mat3::<f64>::IDENTITY), Quat::IDENTITY);
        assert_eq!(rotation::euler_from_quat(Quat::<f64>::IDENTITY), zero);
        assert_eq!(
            rotation::axis_angle_from_quat(Quat::<f64>::IDENTITY),
            AxisAngle::new(Vec3::FORWARD, 0.0)
        );
        assert_eq!(rotation::rotation_quat_from_axis_angle(zero, 0.0), Quat::IDENTITY);
        assert_eq!(
            trs::trs_matrix(zero, Quat::IDENTITY, Vec3::ONE),
            Mat4::<f64>::IDENTITY
        );
        assert_eq!(Trs::from_matrix(&Mat4::<f64>::IDENTITY), Trs::IDENTITY);
    }

    #[test]
    fn test_compose_with_inverse() {
        for q in sample_quats() {
            assert!((q * q.inverse()).is_almost_identity(1e-12));
            let m = rotation::rotation_matrix_from_quat(q);
            assert!((m * m.transpose()).is_almost_equal(&Mat3::IDENTITY, 1e-12));
        }
    }

    // ------------------------------------------------------------------------
    // From-to
    // ------------------------------------------------------------------------

    #[test]
    fn test_from_to_maps_direction() {
        let dirs = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.6, 0.0, 0.8),
            Vec3::new(1.0, 2.0, -3.0).normalize(),
            Vec3::new(-0.2, 0.9, 0.1).normalize(),
        ];
        for from in dirs {
            for to in dirs {
                let q = rotation::rotation_quat_from_to(from, to);
                assert!((q * from).is_almost_equal(to, 1e-9), "{from} -> {to}");
                let m = rotation::rotation_matrix_from_to(from, to);
                assert!(m.transform(from).is_almost_equal(to, 1e-9));
            }
        }
    }

    #[test]
    fn test_from_to_anti_parallel() {
        let q = rotation::rotation_quat_from_to(Vec3::<f64>::Z, -Vec3::Z);
        assert_eq!(q, Quat::new(-1.0, 0.0, 0.0, 0.0));

        // Along the up axis the fallback axis is used
        let q = rotation::rotation_quat_from_to(Vec3::<f64>::UP, Vec3::DOWN);
        assert!(q.is_unit(1e-12));
        assert!((q * Vec3::UP).is_almost_equal(Vec3::DOWN, 1e-12));
        assert_eq!(q.w, 0.0);
    }

    #[test]
    fn test_from_to_matches_glam() {
        let from = Vec3::new(0.3, -0.4, 0.5).normalize();
        let to = Vec3::new(-0.8, 0.1, 0.2).normalize();
        let ours = rotation::rotation_quat_from_to(from, to);
        let theirs: Quat<f64> = DQuat::from_rotation_arc(dvec(from), dvec(to)).into();
        assert!(ours.is_same_rotation(theirs, 1e-9));
    }

    // ------------------------------------------------------------------------
    // Cross-checks against glam
    // ------------------------------------------------------------------------

    #[test]
    fn test_euler_matches_glam_zyx() {
        for e in sample_eulers() {
            let ours = rotation::rotation_quat_from_euler(e);
            let theirs: Quat<f64> = DQuat::from_euler(EulerRot::ZYX, e.z, e.y, e.x).into();
            assert!(ours.is_same_rotation(theirs, 1e-12), "{e}");
        }
    }

    #[test]
    fn test_euler_extraction_matches_glam() {
        for q in sample_quats() {
            let (z, y, x) = DQuat::from(q).to_euler(EulerRot::ZYX);
            let e = rotation::euler_from_quat(q);
            let ours = rotation::rotation_matrix_from_euler(e);
            let theirs = rotation::rotation_matrix_from_euler(Vec3::new(x, y, z));
            assert!(ours.is_almost_equal(&theirs, 1e-9));
            assert!((e.y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quat_to_matrix_matches_glam() {
        for q in sample_quats() {
            let ours = rotation::rotation_matrix_from_quat(q);
            let theirs: Mat3<f64> = DMat3::from_quat(q.into()).into();
            assert!(ours.is_almost_equal(&theirs, 1e-12));
        }
    }

    #[test]
    fn test_matrix_to_quat_matches_glam() {
        for e in sample_eulers() {
            let m = rotation::rotation_matrix_from_euler(e);
            let ours = rotation::rotation_quat_from_matrix(&m);
            let theirs: Quat<f64> = DQuat::from_mat3(&m.into()).into();
            assert!(ours.is_same_rotation(theirs, 1e-9));
        }
    }

    #[test]
    fn test_axis_angle_matches_glam() {
        let axis = Vec3::new(1.0, -2.0, 0.5).normalize();
        for i in -6..=6 {
            let angle = i as f64 * 0.5;
            let ours = rotation::rotation_quat_from_axis_angle(axis, angle);
            let theirs: Quat<f64> = DQuat::from_axis_angle(dvec(axis), angle).into();
            assert!(ours.is_almost_equal(theirs, 1e-12));
            let m: Mat3<f64> = DMat3::from_axis_angle(dvec(axis), angle).into();
            assert!(rotation::rotation_matrix_from_axis_angle(axis, angle).is_almost_equal(&m, 1e-12));
        }
    }

    #[test]
    fn test_rotate_matches_glam() {
        let v = Vec3::new(0.7, -1.1, 2.3);
        for q in sample_quats() {
            let ours = q * v;
            let theirs: Vec3<f64> = (DQuat::from(q) * dvec(v)).into();
            assert!(ours.is_almost_equal(theirs, 1e-12));
        }
    }

    #[test]
    fn test_trs_matches_glam() {
        let t = Vec3::new(1.0, -2.0, 3.5);
        let s = Vec3::new(2.0, 0.5, 3.0);
        for q in sample_quats().into_iter().step_by(7) {
            let ours = trs::trs_matrix(t, q, s);
            let theirs: Mat4<f64> =
                DMat4::from_scale_rotation_translation(dvec(s), q.into(), dvec(t)).into();
            assert!(ours.is_almost_equal(&theirs, 1e-12));

            let (gs, gq, gt) = DMat4::from(ours).to_scale_rotation_translation();
            let d = Trs::try_from_matrix(&ours).unwrap();
            assert!(d.translation.is_almost_equal(gt.into(), 1e-12));
            assert!(d.scaling.is_almost_equal(gs.into(), 1e-9));
            assert!(d.rotation.is_same_rotation(gq.into(), 1e-9));
        }
    }

    // ------------------------------------------------------------------------
    // Gimbal lock
    // ------------------------------------------------------------------------

    #[test]
    fn test_euler_near_gimbal_lock_f32() {
        for offset in [2e-3f32, 1.2e-3, 3e-4] {
            let e = Vec3::new(0.4f32, std::f32::consts::FRAC_PI_2 - offset, 0.1);
            let m = trs::trs_matrix(Vec3::ZERO, rotation::rotation_quat_from_euler(e), Vec3::splat(2.0f32));
            let back = trs::extract_euler(&m);
            assert!((back.y - e.y).abs() < 1e-3);
            let r = rotation::rotation_matrix_from_euler(back);
            assert!(r.is_almost_equal(&trs::extract_rotation_matrix(&m), 1e-3), "{e} -> {back}");
        }
    }

    #[test]
    fn test_gimbal_lock_preserves_rotation() {
        for y in [FRAC_PI_2, -FRAC_PI_2] {
            for (x, z) in [(0.4, 0.1), (-1.0, 2.0), (2.5, -0.7)] {
                let m = rotation::rotation_matrix_from_euler(Vec3::new(x, y, z));
                let e = rotation::euler_from_matrix(&m);
                assert_eq!(e.z, 0.0);
                assert!((e.y - y).abs() < 1e-6);
                assert!(rotation::rotation_matrix_from_euler(e).is_almost_equal(&m, 1e-6));
            }
        }
    }

    // ------------------------------------------------------------------------
    // RS / TRS decomposition
    // ------------------------------------------------------------------------

    #[test]
    fn test_rs_decomposition() {
        let s = Vec3::new(0.5, 2.0, 3.0);
        for q in sample_quats() {
            let rs = trs::rs_matrix(q, s);
            assert!(trs::extract_scaling(&rs).is_almost_equal(s, 1e-9));
            let r = trs::extract_rotation_matrix(&rs);
            assert!(r.is_orthonormal(1e-9));
            assert!((r.determinant() - 1.0).abs() < 1e-9);
            assert!(trs::extract_rotation_quat(&rs).is_same_rotation(q, 1e-9));
        }
    }

    #[test]
    fn test_negative_scale_goes_to_x() {
        let q = rotation::rotation_quat_from_euler(Vec3::new(0.2, 0.4, -0.6));
        for s in [Vec3::new(-2.0, 1.0, 1.0), Vec3::new(1.0, -2.0, 1.0), Vec3::new(1.0, 1.0, -2.0)] {
            let m = trs::trs_matrix(Vec3::ZERO, q, s);
            let d = Trs::try_from_matrix(&m).unwrap();
            assert!(d.scaling.x < 0.0);
            assert!(d.scaling.y > 0.0 && d.scaling.z > 0.0);
            // Recomposing gives the same matrix even if the split differs
            assert!(d.to_matrix().is_almost_equal(&m, 1e-9), "{s}");
        }
    }

    #[test]
    fn test_trs_roundtrip() {
        let t = Vec3::new(-4.0, 0.25, 9.0);
        let s = Vec3::new(1.5, 0.75, 4.0);
        for q in sample_quats() {
            let m = trs::trs_matrix(t, q, s);
            assert_eq!(trs::extract_translation(&m), t);
            let d = Trs::from_matrix(&m);
            assert!(d.scaling.is_almost_equal(s, 1e-9));
            assert!(d.rotation.is_same_rotation(q, 1e-9));
            assert!(trs::extract_euler(&m).is_almost_equal(rotation::euler_from_quat(q), 1e-9));
        }
    }

    #[test]
    fn test_try_decompose_errors() {
        let rs = trs::rs_matrix(Mat3::<f64>::IDENTITY, Vec3::new(1.0, 1.0, 0.0));
        let err = trs::try_extract_rotation_matrix(&rs).unwrap_err();
        assert_eq!(err, Error::ZeroScale { axis: 2 });

        let mut m = Mat4::<f64>::IDENTITY;
        m.set(0, 3, f64::NAN);
        assert!(matches!(Trs::try_from_matrix(&m), Err(Error::NonFinite { .. })));
    }

    // ------------------------------------------------------------------------
    // Transform laws
    // ------------------------------------------------------------------------

    #[test]
    fn test_point_and_direction() {
        let t = Vec3::new(5.0, -1.0, 2.0);
        let s = Vec3::new(2.0, 3.0, 4.0);
        let q = rotation::rotation_quat_from_axis_angle(Vec3::Z, FRAC_PI_2);
        let m = trs::trs_matrix(t, q, s);
        let p = Vec3::new(1.0, 1.0, 1.0);

        let expected_dir = q * (p * s);
        assert!(trs::transform_direction(&m, p).is_almost_equal(expected_dir, 1e-12));
        assert!(trs::transform_point(&m, p).is_almost_equal(expected_dir + t, 1e-12));

        let trs = Trs::new(t, q, s);
        assert!(trs.transform_point(p).is_almost_equal(trs::transform_point(&m, p), 1e-12));
        assert!(trs.inverse_transform_point(trs.transform_point(p)).is_almost_equal(p, 1e-12));
    }

    #[test]
    fn test_matrix_product_composes_transforms() {
        let a = trs::trs_matrix(Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY, Vec3::splat(2.0));
        let b = trs::trs_matrix(
            Vec3::new(0.0, 3.0, 0.0),
            rotation::rotation_quat_from_euler(Vec3::new(0.0, 0.0, FRAC_PI_2)),
            Vec3::ONE,
        );
        let p = Vec3::new(1.0, 2.0, 3.0);
        let composed = trs::transform_point(&(a * b), p);
        let stepwise = trs::transform_point(&a, trs::transform_point(&b, p));
        assert!(composed.is_almost_equal(stepwise, 1e-12));
    }

    // ------------------------------------------------------------------------
    // 2D
    // ------------------------------------------------------------------------

    #[test]
    fn test_2d_quarter_turn() {
        let m = trs2d::trs_matrix(Vec2::new(1.0f32, 2.0), FRAC_PI_2 as f32, Vec2::new(2.0, 3.0));
        let p = trs2d::transform_point(&m, Vec2::new(1.0, 0.0));
        assert!(p.is_almost_equal(Vec2::new(1.0, 4.0), 1e-3));
        assert!((trs2d::extract_angle(&m) - FRAC_PI_2 as f32).abs() < 1e-3);
        assert!(trs2d::extract_scaling(&m).is_almost_equal(Vec2::new(2.0, 3.0), 1e-3));
    }

    #[test]
    fn test_2d_from_to() {
        let from = Vec2::new(1.0, 0.0);
        let to = Vec2::new(0.0, 1.0);
        assert!((rotation2d::rotation_angle_from_to_2d(from, to) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(rotation2d::rotation_angle_from_to_2d(from, -from), PI);
        let m = rotation2d::rotation_matrix_2d_from_to(from, to);
        assert!(m.transform(from).is_almost_equal(to, 1e-12));
    }

    // ------------------------------------------------------------------------
    // Generic components
    // ------------------------------------------------------------------------

    #[test]
    fn test_integer_vectors_widen() {
        let v = Vec3::<i16>::new(3, 4, 12);
        let len: f32 = v.magnitude();
        assert_eq!(len, 13.0);
        assert_eq!(v.dot(Vec3::new(1, 1, 1)), 19);
        let w = Vec2::<i32>::new(6, 8);
        assert_eq!(w.magnitude(), 10.0f64);
    }

    #[test]
    fn test_f32_pipeline() {
        let e = Vec3::new(0.3f32, -0.2, 1.1);
        let q = rotation::rotation_quat_from_euler(e);
        let m = trs::trs_matrix(Vec3::new(1.0, 2.0, 3.0), q, Vec3::new(1.0, 2.0, 0.5));
        let d = Trs::try_from_matrix(&m).unwrap();
        assert!(d.rotation.is_same_rotation(q, 1e-5));
        assert!(rotation::euler_from_quat(d.rotation).is_almost_equal(e, 1e-4));
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    #[test]
    fn test_trs_json() {
        let t = Trs::new(
            Vec3::new(1.0, 2.0, 3.0),
            rotation::rotation_quat_from_axis_angle(Vec3::Z, 0.5),
            Vec3::splat(2.0),
        );
        let json = serde_json::to_string(&t).unwrap();
        let back: Trs<f64> = serde_json::from_str(&json).unwrap();
        // Decimal text is not bit-exact for every f64
        assert_abs_diff_eq!(back.translation, t.translation, epsilon = 1e-15);
        assert_abs_diff_eq!(back.rotation, t.rotation, epsilon = 1e-15);
        assert_abs_diff_eq!(back.scaling, t.scaling, epsilon = 1e-15);

        let v: serde_json::Value = serde_json::to_value(t).unwrap();
        assert_eq!(v["translation"]["y"], 2.0);
        assert_eq!(v["scaling"]["z"], 2.0);
    }
}
