#![allow(dead_code)]

use approx::assert_relative_eq;
use kepler_orbit::Orbit;
use nalgebra::Vector3;

pub const MU_EARTH: f64 = 398_600.0;

/// Curtis, example 4.3.
pub fn curtis_4_3() -> Orbit {
    Orbit::new(
        Vector3::new(-6045.0, -3490.0, 2500.0),
        Vector3::new(-3.457, 6.618, 2.533),
    )
}

/// Curtis, example 3.7.
pub fn curtis_3_7() -> Orbit {
    Orbit::new(
        Vector3::new(7000.0, -12124.0, 0.0),
        Vector3::new(2.6679, 4.6210, 0.0),
    )
}

/// Component-wise absolute comparison of two vectors.
pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    for k in 0..3 {
        assert!(
            (actual[k] - expected[k]).abs() <= epsilon,
            "component {k}: {} vs {} (epsilon {epsilon})",
            actual[k],
            expected[k]
        );
    }
}

/// Relative comparison of two states, scaled by the norm of each expected vector.
pub fn assert_state_close(actual: &Orbit, expected: &Orbit, max_relative: f64) {
    let dr = (actual.position() - expected.position()).norm();
    let dv = (actual.velocity() - expected.velocity()).norm();
    assert_relative_eq!(
        dr / expected.position().norm(),
        0.0,
        epsilon = max_relative
    );
    assert_relative_eq!(
        dv / expected.velocity().norm(),
        0.0,
        epsilon = max_relative
    );
}
