//! Stumpff functions `c(z)` and `s(z)` of the universal-variable formulation.
//!
//! Both functions are evaluated with their closed forms on each side of
//! `z = 0` and take their series limit exactly at the origin, so they are
//! continuous over the whole real line.

/// Stumpff function `C(z)`.
///
/// * `z > 0`: `(1 − cos √z) / z`
/// * `z < 0`: `(cosh √−z − 1) / (−z)`
/// * `z = 0`: `1/2`
pub fn c(z: f64) -> f64 {
    if z > 0.0 {
        (1.0 - z.sqrt().cos()) / z
    } else if z < 0.0 {
        ((-z).sqrt().cosh() - 1.0) / (-z)
    } else {
        0.5
    }
}

/// Stumpff function `S(z)`.
///
/// * `z > 0`: `(√z − sin √z) / (√z)³`
/// * `z < 0`: `(sinh √−z − √−z) / (√−z)³`
/// * `z = 0`: `1/6`
pub fn s(z: f64) -> f64 {
    if z > 0.0 {
        let sqrt_z = z.sqrt();
        (sqrt_z - sqrt_z.sin()) / sqrt_z.powi(3)
    } else if z < 0.0 {
        let sqrt_z = (-z).sqrt();
        (sqrt_z.sinh() - sqrt_z) / sqrt_z.powi(3)
    } else {
        1.0 / 6.0
    }
}
