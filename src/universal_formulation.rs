//! # Universal Kepler equation
//!
//! Time-of-flight equation written in terms of the universal anomaly `x`,
//! valid for every conic. For a fixed initial state `(r, v)`, gravitational
//! parameter `μ`, semi-major axis `a` and elapsed time `dt`, with
//! `z(x) = x²/a` and `σ = r·v/√μ`:
//!
//! ```text
//! F(x)   = (1 − |r|/a)·S(z)·x³ + σ·C(z)·x² + |r|·x − √μ·dt
//! F'(x)  = C(z)·x² + σ·(1 − S(z)·z)·x + |r|·(1 − C(z)·z)
//! F''(x) = (1 − |r|/a)·(1 − S(z)·z)·x + σ·(1 − C(z)·z)
//! ```
//!
//! The root of `F` is found with the [`laguerre`](crate::laguerre) solver,
//! seeded with `x₀ = √μ·dt/a`.

use nalgebra::Vector3;

use crate::{
    constants::Second,
    laguerre::{self, LaguerreReport},
    stumpff,
};

/// Auxiliary variable `z = x²/a` fed to the Stumpff functions.
#[inline]
pub fn z(x: f64, a: f64) -> f64 {
    x * x / a
}

/// Universal Kepler equation frozen on one initial state and one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniversalKepler {
    r_norm: f64,
    sigma: f64,
    sqrt_mu: f64,
    semimajor_axis: f64,
    dt: Second,
}

impl UniversalKepler {
    /// Arguments
    /// ---------
    /// * `r`, `v`: initial position (km) and velocity (km/s).
    /// * `mu`: gravitational parameter (km³/s²).
    /// * `semimajor_axis`: semi-major axis of the osculating orbit (km).
    /// * `dt`: elapsed time (s).
    pub fn new(
        r: &Vector3<f64>,
        v: &Vector3<f64>,
        mu: f64,
        semimajor_axis: f64,
        dt: Second,
    ) -> Self {
        let sqrt_mu = mu.sqrt();
        UniversalKepler {
            r_norm: r.norm(),
            sigma: r.dot(v) / sqrt_mu,
            sqrt_mu,
            semimajor_axis,
            dt,
        }
    }

    /// Starting value `√μ·dt/a` for the root finder.
    pub fn initial_guess(&self) -> f64 {
        self.sqrt_mu * (self.dt / self.semimajor_axis)
    }

    pub fn z(&self, x: f64) -> f64 {
        z(x, self.semimajor_axis)
    }

    /// Time-of-flight residual `F(x)`.
    pub fn f(&self, x: f64) -> f64 {
        let z = self.z(x);
        (1.0 - self.r_norm / self.semimajor_axis) * stumpff::s(z) * x.powi(3)
            + self.sigma * stumpff::c(z) * x * x
            + self.r_norm * x
            - self.sqrt_mu * self.dt
    }

    /// First derivative `F'(x)`.
    pub fn dfdx(&self, x: f64) -> f64 {
        let z = self.z(x);
        let s = stumpff::s(z);
        let c = stumpff::c(z);
        c * x * x + self.sigma * (1.0 - s * z) * x + self.r_norm * (1.0 - c * z)
    }

    /// Second derivative `F''(x)`.
    pub fn d2fdx2(&self, x: f64) -> f64 {
        let z = self.z(x);
        let s = stumpff::s(z);
        let c = stumpff::c(z);
        (1.0 - self.r_norm / self.semimajor_axis) * (1.0 - s * z) * x
            + self.sigma * (1.0 - c * z)
    }

    /// Universal anomaly after `dt`, by Laguerre iteration from [`Self::initial_guess`].
    pub fn solve(&self) -> f64 {
        self.solve_with_report().root
    }

    pub fn solve_with_report(&self) -> LaguerreReport {
        laguerre::solve_with_report(
            self.initial_guess(),
            |x| self.f(x),
            |x| self.dfdx(x),
            |x| self.d2fdx2(x),
        )
    }
}
