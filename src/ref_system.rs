use nalgebra::{Matrix3, Rotation3, Unit};

use crate::constants::{i_hat, j_hat, k_hat, Degree, Radian};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotation matrix of angle `alpha` (radians) about one coordinate axis.
///
/// The rotation is active: applied to a vector, it turns the vector by
/// `alpha` counter-clockwise around `axis`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => i_hat(),
        Axis::Y => j_hat(),
        Axis::Z => k_hat(),
    };

    Rotation3::from_axis_angle(&Unit::new_unchecked(axis), alpha).into()
}

/// Direction-cosine matrix from the perifocal frame to the inertial frame.
///
/// The classical 3-1-3 Euler sequence: argument of periapsis `ω` about `Z`,
/// inclination `i` about `X`, right ascension of the ascending node `Ω`
/// about `Z`, composed as `Q = R_Z(Ω)·R_X(i)·R_Z(ω)`. A perifocal vector
/// `x_p` maps to the inertial frame as `Q·x_p`.
///
/// Arguments
/// ---------
/// * `argument_of_periapsis`: `ω` in degrees.
/// * `inclination`: `i` in degrees.
/// * `right_ascension`: `Ω` in degrees.
pub fn perifocal_to_inertial(
    argument_of_periapsis: Degree,
    inclination: Degree,
    right_ascension: Degree,
) -> Matrix3<f64> {
    rotmt(right_ascension.to_radians(), Axis::Z)
        * rotmt(inclination.to_radians(), Axis::X)
        * rotmt(argument_of_periapsis.to_radians(), Axis::Z)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    /// Explicit expansion of the 3-1-3 matrix in terms of sines and cosines.
    fn closed_form(w: f64, i: f64, o: f64) -> Matrix3<f64> {
        let (w, i, o) = (w.to_radians(), i.to_radians(), o.to_radians());
        let (sin_o, cos_o) = o.sin_cos();
        let (sin_i, cos_i) = i.sin_cos();
        let (sin_w, cos_w) = w.sin_cos();

        Matrix3::new(
            -sin_o * cos_i * sin_w + cos_o * cos_w,
            -sin_o * cos_i * cos_w - cos_o * sin_w,
            sin_o * sin_i,
            cos_o * cos_i * sin_w + sin_o * cos_w,
            cos_o * cos_i * cos_w - sin_o * sin_w,
            -cos_o * sin_i,
            sin_i * sin_w,
            sin_i * cos_w,
            cos_i,
        )
    }

    fn assert_matrix_eq(a: &Matrix3<f64>, b: &Matrix3<f64>, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a[(i, j)], b[(i, j)], epsilon = tol);
            }
        }
    }

    #[test]
    fn rotmt_turns_counter_clockwise() {
        let r = rotmt(std::f64::consts::FRAC_PI_2, Axis::Z);
        let v = r * Vector3::x();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-15);

        let r = rotmt(std::f64::consts::FRAC_PI_2, Axis::X);
        let v = r * Vector3::y();
        assert_abs_diff_eq!(v.z, 1.0, epsilon = 1e-15);

        let r = rotmt(std::f64::consts::FRAC_PI_2, Axis::Y);
        let v = r * Vector3::z();
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn zero_angles_give_identity() {
        assert_matrix_eq(
            &perifocal_to_inertial(0.0, 0.0, 0.0),
            &Matrix3::identity(),
            1e-15,
        );
    }

    #[test]
    fn matches_closed_form() {
        for (w, i, o) in [
            (60.0, 30.0, 40.0),
            (117.7713, 51.65, 304.0847),
            (270.0, 179.0, 15.0),
        ] {
            assert_matrix_eq(
                &perifocal_to_inertial(w, i, o),
                &closed_form(w, i, o),
                1e-14,
            );
        }
    }

    #[test]
    fn is_orthonormal() {
        let q = perifocal_to_inertial(20.0, 153.0, 255.0);
        assert_matrix_eq(&(q * q.transpose()), &Matrix3::identity(), 1e-14);
        assert_abs_diff_eq!(q.determinant(), 1.0, epsilon = 1e-14);
    }
}
