//! # Orbital elements → state vectors
//!
//! Build a Cartesian position/velocity pair from a minimal set of orbital
//! parameters ([`OrbitParams`]).
//!
//! The state is first written in the **perifocal frame** (x-axis towards
//! periapsis, z-axis along the angular momentum) at true anomaly `θ`:
//!
//! ```text
//! r_p = (h²/μ) / (1 + e·cos θ) · [cos θ, sin θ, 0]
//! v_p = (μ/h) · [−sin θ, e + cos θ, 0]
//! ```
//!
//! then rotated to the inertial frame with the 3-1-3 direction-cosine matrix
//! `Q(ω, i, Ω)` from [`perifocal_to_inertial`]: `r = Q·r_p`, `v = Q·v_p`.
//!
//! ## Example
//!
//! ```rust
//! use kepler_orbit::{orbit_type::minimal_params::OrbitParams, state_from_params::state_from_params};
//!
//! let params = OrbitParams {
//!     semimajor_axis: Some(7000.0),
//!     eccentricity: Some(0.0),
//!     ..Default::default()
//! };
//! let (r, v) = state_from_params(&params).unwrap();
//! assert!((r.x - 7000.0).abs() < 1e-9);
//! assert!(v.y > 0.0);
//! ```

use nalgebra::Vector3;
use tracing::debug;

use crate::{
    constants::Degree,
    kepler_errors::KeplerError,
    orbit_type::minimal_params::{ExpandedParams, OrbitParams},
    ref_system::perifocal_to_inertial,
};

/// Perifocal position at true anomaly `true_anomaly` (degrees).
///
/// Arguments
/// ---------
/// * `angular_momentum`: specific angular momentum `h` (km²/s).
/// * `eccentricity`: `e`.
/// * `true_anomaly`: `θ` in degrees.
/// * `mu`: gravitational parameter (km³/s²).
pub fn perifocal_position(
    angular_momentum: f64,
    eccentricity: f64,
    true_anomaly: Degree,
    mu: f64,
) -> Vector3<f64> {
    let (sin_theta, cos_theta) = true_anomaly.to_radians().sin_cos();
    let radius = (angular_momentum.powi(2) / mu) * (1.0 / (1.0 + eccentricity * cos_theta));
    Vector3::new(cos_theta, sin_theta, 0.0) * radius
}

/// Perifocal velocity at true anomaly `true_anomaly` (degrees).
///
/// Same arguments as [`perifocal_position`].
pub fn perifocal_velocity(
    angular_momentum: f64,
    eccentricity: f64,
    true_anomaly: Degree,
    mu: f64,
) -> Vector3<f64> {
    let (sin_theta, cos_theta) = true_anomaly.to_radians().sin_cos();
    Vector3::new(-sin_theta, eccentricity + cos_theta, 0.0) * (mu / angular_momentum)
}

/// Inertial state vectors of already expanded parameters.
pub fn state_from_expanded(params: &ExpandedParams) -> (Vector3<f64>, Vector3<f64>) {
    let mu = params.body.mu();
    let r_p = perifocal_position(
        params.angular_momentum,
        params.eccentricity,
        params.true_anomaly,
        mu,
    );
    let v_p = perifocal_velocity(
        params.angular_momentum,
        params.eccentricity,
        params.true_anomaly,
        mu,
    );
    let q = perifocal_to_inertial(
        params.argument_of_periapsis,
        params.inclination,
        params.right_ascension,
    );

    (q * r_p, q * v_p)
}

/// Inertial position and velocity described by a parameter mapping.
///
/// Return
/// ------
/// * `(r, v)` in km and km/s.
///
/// Errors
/// ------
/// * [`KeplerError::InvalidParameterSet`] when no minimal parameter set is present.
/// * Central body errors for invalid `mu` / `centralBodyRadius` overrides.
pub fn state_from_params(
    params: &OrbitParams,
) -> Result<(Vector3<f64>, Vector3<f64>), KeplerError> {
    let expanded = params.expand()?;
    debug!(
        set = ?expanded.set,
        semimajor_axis = expanded.semimajor_axis,
        eccentricity = expanded.eccentricity,
        "expanded orbital parameters"
    );
    Ok(state_from_expanded(&expanded))
}
