//! Lagrange coefficients `f, g, ḟ, ġ` in universal-variable form.
//!
//! The new state is a linear combination of the initial one:
//!
//! ```text
//! r = f·r₀ + g·v₀
//! v = ḟ·r₀ + ġ·v₀
//! ```
//!
//! `ḟ` and `ġ` are evaluated with the norm of the **new** position, and all
//! four coefficients share the same `z`, computed once from the semi-major
//! axis of the initial state. [`propagate_state`] enforces that order.

use nalgebra::Vector3;

use crate::{constants::Second, stumpff};

/// `f = 1 − (x²/|r₀|)·C(z)`
pub fn f(x: f64, z: f64, r0: &Vector3<f64>) -> f64 {
    1.0 - (x * x / r0.norm()) * stumpff::c(z)
}

/// `g = dt − (x³/√μ)·S(z)`
pub fn g(x: f64, z: f64, mu: f64, dt: Second) -> f64 {
    dt - (1.0 / mu.sqrt()) * x.powi(3) * stumpff::s(z)
}

/// `ḟ = √μ/(|r|·|r₀|)·(S(z)·z − 1)·x`, with `r` the propagated position.
pub fn df(x: f64, z: f64, r: &Vector3<f64>, r0: &Vector3<f64>, mu: f64) -> f64 {
    (mu.sqrt() / (r.norm() * r0.norm())) * (stumpff::s(z) * z - 1.0) * x
}

/// `ġ = 1 − (x²/|r|)·C(z)`, with `r` the propagated position.
pub fn dg(x: f64, z: f64, r: &Vector3<f64>) -> f64 {
    1.0 - (x * x / r.norm()) * stumpff::c(z)
}

/// Advance `(r0, v0)` by `dt` given the solved universal anomaly `x` and its `z`.
///
/// Return
/// ------
/// * `(r, v)` – propagated position and velocity.
pub fn propagate_state(
    r0: &Vector3<f64>,
    v0: &Vector3<f64>,
    x: f64,
    z: f64,
    mu: f64,
    dt: Second,
) -> (Vector3<f64>, Vector3<f64>) {
    let r = r0 * f(x, z, r0) + v0 * g(x, z, mu, dt);
    let v = r0 * df(x, z, &r, r0, mu) + v0 * dg(x, z, &r);
    (r, v)
}
