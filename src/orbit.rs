//! # Two-body orbit
//!
//! [`Orbit`] is an immutable value holding a Cartesian state `(r, v)` and the
//! [`CentralBody`] it orbits. Every classical element is a pure function of
//! that state, recomputed on each call and therefore always consistent with
//! the orbit it came from. Propagation never mutates: [`Orbit::propagate`]
//! returns a new `Orbit`, so snapshots can be kept in a history or shared
//! across threads freely.
//!
//! ## Element derivations
//!
//! ```text
//! h = r × v
//! e = [r·(v² − μ/|r|) − v·(|r|·v_r)] / μ
//! a = h²/μ · 1/(1 − e²)        b = a·√(1 − e²)        p = h²/μ
//! i = acos(K·h / |h|)
//! n = K × h
//! Ω = acos(n_x / |n|),          360° − Ω when n_y < 0
//! ω = acos(n·e / (|n|·|e|)),    360° − ω when e_z < 0
//! θ = angle from e (or n, or I) to r,   360° − θ when r·v < 0
//! ```
//!
//! Angles are returned in degrees. For equatorial orbits the node line
//! vanishes and `Ω`, `ω` are reported as `0`; circular orbits also report
//! `ω = 0`. Nothing else is guarded: for
//! parabolic and hyperbolic states, quantities such as the period come out as
//! `NaN` or infinite.
//!
//! ## Propagation
//!
//! Universal-variable formulation: the universal anomaly `x` after `dt` is the
//! root of the [`UniversalKepler`] equation, found by the bounded
//! [`laguerre`](crate::laguerre) iteration, and the new state follows from the
//! [`lagrange`] coefficients.
//!
//! ```rust
//! use kepler_orbit::orbit::Orbit;
//! use nalgebra::Vector3;
//!
//! let orbit = Orbit::new(
//!     Vector3::new(7000.0, -12124.0, 0.0),
//!     Vector3::new(2.6679, 4.6210, 0.0),
//! );
//! let later = orbit.propagate(3600.0);
//! assert!((later.position().x + 3297.768625).abs() < 1e-5);
//! ```

use nalgebra::Vector3;
use tracing::debug;

use crate::{
    central_body::CentralBody,
    constants::{i_hat, k_hat, Degree, Kilometer, Second, DEGENERACY_DECIMALS, DPI},
    kepler_errors::KeplerError,
    lagrange,
    laguerre::LaguerreReport,
    orbit_type::{classical_element::ClassicalElements, minimal_params::OrbitParams},
    state_from_params::state_from_expanded,
    universal_formulation::{self, UniversalKepler},
};

/// Keplerian orbit around a central body, defined by one state vector pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    position: Vector3<f64>,
    velocity: Vector3<f64>,
    body: CentralBody,
}

/// Round `value` to `decimals` decimal places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `360° − angle` when `flip` holds.
fn full_circle_if(angle: Degree, flip: bool) -> Degree {
    if flip {
        360.0 - angle
    } else {
        angle
    }
}

impl Orbit {
    /// Orbit around the Earth from position (km) and velocity (km/s).
    ///
    /// No validation is performed; see [`Orbit::try_new`].
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Orbit::with_body(position, velocity, CentralBody::earth())
    }

    /// Orbit around an arbitrary central body, without validation.
    pub fn with_body(position: Vector3<f64>, velocity: Vector3<f64>, body: CentralBody) -> Self {
        Orbit {
            position,
            velocity,
            body,
        }
    }

    /// Validated constructor.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::NonFiniteState`] if any component is NaN or infinite.
    /// * [`KeplerError::ZeroPosition`] if `position` is the zero vector.
    /// * Central body errors if `body` does not hold `μ > 0`.
    pub fn try_new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        body: CentralBody,
    ) -> Result<Self, KeplerError> {
        body.validate()?;
        if position.iter().chain(velocity.iter()).any(|c| !c.is_finite()) {
            return Err(KeplerError::NonFiniteState);
        }
        if position.norm() == 0.0 {
            return Err(KeplerError::ZeroPosition);
        }
        Ok(Orbit::with_body(position, velocity, body))
    }

    /// Orbit built from a minimal orbital parameter set.
    ///
    /// The central body is the one described by the mapping (`mu`,
    /// `centralBodyRadius`), the Earth by default.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::InvalidParameterSet`] when no minimal set is present.
    /// * Any error of [`Orbit::try_new`] on the resulting state.
    pub fn from_params(params: &OrbitParams) -> Result<Self, KeplerError> {
        let expanded = params.expand()?;
        let (position, velocity) = state_from_expanded(&expanded);
        debug!(set = ?expanded.set, "orbit built from orbital parameters");
        Orbit::try_new(position, velocity, expanded.body)
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    pub fn body(&self) -> &CentralBody {
        &self.body
    }

    pub fn mu(&self) -> f64 {
        self.body.mu()
    }

    pub fn central_body_radius(&self) -> Kilometer {
        self.body.radius()
    }

    // ---------------------------------------------------------------------------------------------
    // Element derivations
    // ---------------------------------------------------------------------------------------------

    /// Specific angular momentum vector `h = r × v` (km²/s).
    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.position.cross(&self.velocity)
    }

    /// Radial velocity `r·v/|r|` (km/s), positive when moving away from periapsis.
    pub fn radial_velocity(&self) -> f64 {
        self.position.dot(&self.velocity) / self.position.norm()
    }

    /// Eccentricity vector, pointing towards periapsis.
    pub fn eccentricity(&self) -> Vector3<f64> {
        let r = self.position.norm();
        let v2 = self.velocity.norm_squared();
        let mu = self.mu();

        (self.position * (v2 - mu / r) - self.velocity * (r * self.radial_velocity())) * (1.0 / mu)
    }

    pub fn semimajor_axis(&self) -> Kilometer {
        let h = self.angular_momentum().norm();
        let e = self.eccentricity().norm();
        (h.powi(2) / self.mu()) * (1.0 / (1.0 - e.powi(2)))
    }

    pub fn semiminor_axis(&self) -> Kilometer {
        let e = self.eccentricity().norm();
        self.semimajor_axis() * (1.0 - e.powi(2)).sqrt()
    }

    pub fn semilatus_rectum(&self) -> Kilometer {
        self.angular_momentum().norm().powi(2) / self.mu()
    }

    /// Inclination in degrees, in `[0, 180]`.
    pub fn inclination(&self) -> Degree {
        let h = self.angular_momentum();
        (k_hat().dot(&h) / h.norm()).acos().to_degrees()
    }

    /// Node line `n = K × h`, zero for equatorial orbits.
    pub fn node_line(&self) -> Vector3<f64> {
        k_hat().cross(&self.angular_momentum())
    }

    /// Right ascension of the ascending node in degrees, `0` for equatorial orbits.
    pub fn right_ascension(&self) -> Degree {
        let n = self.node_line();
        let n_norm = n.norm();
        if n_norm == 0.0 {
            return 0.0;
        }
        let omega = (n.x / n_norm).acos().to_degrees();
        full_circle_if(omega, n.y < 0.0)
    }

    /// Argument of periapsis in degrees, `0` for equatorial or circular orbits.
    ///
    /// The eccentricity norm is rounded to [`DEGENERACY_DECIMALS`] decimals
    /// before testing for zero, as in [`Orbit::true_anomaly`].
    pub fn argument_of_periapsis(&self) -> Degree {
        let n = self.node_line();
        let n_norm = n.norm();
        let e = self.eccentricity();
        if n_norm == 0.0 || round_to(e.norm(), DEGENERACY_DECIMALS) == 0.0 {
            return 0.0;
        }
        let w = (n.dot(&e) / (n_norm * e.norm())).acos().to_degrees();
        full_circle_if(w, e.z < 0.0)
    }

    /// True anomaly in degrees.
    ///
    /// Measured from the eccentricity vector. For circular orbits the node
    /// line is used instead, and for circular equatorial orbits the inertial
    /// `I` axis. Norms are rounded to [`DEGENERACY_DECIMALS`] decimals before
    /// testing for zero.
    pub fn true_anomaly(&self) -> Degree {
        let e = self.eccentricity();
        let n = self.node_line();
        let e_is_zero = round_to(e.norm(), DEGENERACY_DECIMALS) == 0.0;
        let n_is_zero = round_to(n.norm(), DEGENERACY_DECIMALS) == 0.0;
        let r = &self.position;

        let reference = match (e_is_zero, n_is_zero) {
            (true, true) => i_hat(),
            (true, false) => n,
            (false, _) => e,
        };
        let cos_theta = (reference.dot(r) / (reference.norm() * r.norm())).min(1.0);
        let theta = cos_theta.acos().to_degrees();

        full_circle_if(theta, r.dot(&self.velocity) < 0.0)
    }

    /// Periapsis radius, `p/(1 + e·cos 0)` (km).
    pub fn periapsis(&self) -> Kilometer {
        self.radius_at(0.0)
    }

    /// Apoapsis radius, `p/(1 + e·cos π)` (km). Negative for hyperbolic orbits.
    pub fn apoapsis(&self) -> Kilometer {
        self.radius_at(std::f64::consts::PI)
    }

    /// Orbit radius at true anomaly `theta` (radians), from the conic equation.
    fn radius_at(&self, theta: f64) -> Kilometer {
        let h = self.angular_momentum().norm();
        let e = self.eccentricity().norm();
        (h.powi(2) / self.mu()) * (1.0 / (1.0 + e * theta.cos()))
    }

    /// Periapsis altitude above the central body (km).
    pub fn periapsis_altitude(&self) -> Kilometer {
        self.periapsis() - self.central_body_radius()
    }

    /// Apoapsis altitude above the central body (km).
    pub fn apoapsis_altitude(&self) -> Kilometer {
        self.apoapsis() - self.central_body_radius()
    }

    /// Orbital period `2π/√μ · a^{3/2}` (s). `NaN` when `a < 0`.
    pub fn period(&self) -> Second {
        let a = self.semimajor_axis();
        (DPI / self.mu().sqrt()) * a.powi(3).sqrt()
    }

    /// Mean motion `√(μ/a³)` (rad/s). `NaN` when `a < 0`.
    pub fn mean_motion(&self) -> f64 {
        (self.mu() / self.semimajor_axis().powi(3)).sqrt()
    }

    /// Specific orbital energy `v²/2 − μ/r` (km²/s²).
    pub fn specific_energy(&self) -> f64 {
        self.velocity.norm_squared() / 2.0 - self.mu() / self.position.norm()
    }

    /// `true` for elliptical (and circular) orbits.
    pub fn is_bound(&self) -> bool {
        self.eccentricity().norm() < 1.0
    }

    /// Snapshot of every derived element.
    pub fn elements(&self) -> ClassicalElements {
        ClassicalElements::from(self)
    }

    // ---------------------------------------------------------------------------------------------
    // Propagation
    // ---------------------------------------------------------------------------------------------

    fn kepler_equation(&self, dt: Second) -> UniversalKepler {
        UniversalKepler::new(
            &self.position,
            &self.velocity,
            self.mu(),
            self.semimajor_axis(),
            dt,
        )
    }

    /// Universal anomaly `x` reached after `dt` seconds.
    pub fn universal_anomaly(&self, dt: Second) -> f64 {
        self.kepler_equation(dt).solve()
    }

    /// State after `dt` seconds, as a new orbit around the same body.
    ///
    /// The solver runs a fixed number of passes and does not report
    /// convergence; use [`Orbit::propagate_with_report`] to inspect it.
    /// Degenerate inputs yield non-finite states.
    pub fn propagate(&self, dt: Second) -> Orbit {
        self.propagate_with_report(dt).0
    }

    /// Same as [`Orbit::propagate`], also returning the Laguerre run summary.
    pub fn propagate_with_report(&self, dt: Second) -> (Orbit, LaguerreReport) {
        let a = self.semimajor_axis();
        let report = self.kepler_equation(dt).solve_with_report();
        let x = report.root;
        // z comes from the initial a and is shared by all four coefficients
        let z = universal_formulation::z(x, a);

        let (position, velocity) =
            lagrange::propagate_state(&self.position, &self.velocity, x, z, self.mu(), dt);
        debug!(dt, x, iterations = report.iterations, "orbit propagated");

        (Orbit::with_body(position, velocity, self.body), report)
    }
}
