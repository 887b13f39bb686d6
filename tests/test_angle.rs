use tiltportal::sensor::vec3::{Vec3, signed_angle};

const EPSILON: f32 = 1e-4;

#[test]
fn test_signed_angle_is_antisymmetric() {
    let pairs = [
        (Vec3::Z, Vec3::X),
        (Vec3::Z, Vec3::new(0.3, 0.1, 0.9).normalized()),
        (
            Vec3::new(0.7, -0.2, 0.4).normalized(),
            Vec3::new(-0.1, 0.5, 0.8).normalized(),
        ),
    ];

    for (a, b) in pairs {
        for axis in [Vec3::X, Vec3::Y] {
            let forward = signed_angle(a, b, axis);
            let backward = signed_angle(b, a, axis);
            assert!(
                (forward + backward).abs() < EPSILON,
                "expected antisymmetry, got {forward} and {backward}"
            );
        }
    }
}

#[test]
fn test_signed_angle_of_vector_with_itself_is_zero() {
    let vectors = [
        Vec3::Z,
        Vec3::X,
        Vec3::new(0.6, 0.0, 0.8),
        Vec3::new(-0.3, 0.4, 0.5).normalized(),
    ];

    for v in vectors {
        assert!(signed_angle(v, v, Vec3::Y).abs() < EPSILON);
        assert!(signed_angle(v, v, Vec3::X).abs() < EPSILON);
    }
}

#[test]
fn test_signed_angle_stays_in_half_open_range() {
    // Sweep through a ring of directions in the XZ plane, including the
    // antipodal pair that lands exactly on the wrap point
    for i in 0..72 {
        let theta = (i as f32) * 5.0_f32.to_radians();
        let b = Vec3::new(theta.sin(), 0.0, theta.cos());
        let angle = signed_angle(Vec3::Z, b, Vec3::Y);

        assert!(
            angle > -180.0 - EPSILON && angle <= 180.0,
            "angle {angle} out of (-180, 180] for step {i}"
        );
    }
}

#[test]
fn test_opposite_vectors_yield_negative_180() {
    // Exactly antipodal inputs sit on the wrap point; the endpoint is
    // folded so only -180 is ever reported
    let angle = signed_angle(Vec3::X, Vec3::new(-1.0, 0.0, 0.0), Vec3::Y);
    assert_eq!(angle, -180.0);
}

#[test]
fn test_quarter_turns_have_opposite_signs() {
    let plus = signed_angle(Vec3::Z, Vec3::X, Vec3::Y);
    let minus = signed_angle(Vec3::Z, Vec3::new(-1.0, 0.0, 0.0), Vec3::Y);

    assert!((plus - 90.0).abs() < EPSILON);
    assert!((minus + 90.0).abs() < EPSILON);
}

#[test]
fn test_zero_vector_degenerates_to_zero_angle() {
    // A dropped sample must not fault the math
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    assert_eq!(signed_angle(Vec3::ZERO, Vec3::Z, Vec3::Y), 0.0);
    assert_eq!(signed_angle(Vec3::Z, Vec3::ZERO, Vec3::Y), 0.0);
}

#[test]
fn test_normalized_produces_unit_vectors() {
    let v = Vec3::new(3.0, -4.0, 12.0);
    assert!((v.normalized().magnitude() - 1.0).abs() < EPSILON);
}

#[test]
fn test_angle_ignores_input_magnitude() {
    // signed_angle normalizes internally, so raw (unscaled) sensor readings
    // and unit vectors agree
    let raw = Vec3::new(0.0, 0.0, 0.25);
    let tilted_raw = Vec3::new(0.18, 0.0, 0.18);

    let from_raw = signed_angle(raw, tilted_raw, Vec3::Y);
    let from_unit = signed_angle(Vec3::Z, tilted_raw.normalized(), Vec3::Y);

    assert!((from_raw - from_unit).abs() < EPSILON);
    assert!((from_raw - 45.0).abs() < EPSILON);
}
