//! # Classical element snapshot
//!
//! [`ClassicalElements`] gathers every element derived by [`Orbit`] into one
//! plain struct, computed once. It is convenient for reporting (it implements
//! [`fmt::Display`]) and for turning a state back into an [`OrbitParams`]
//! mapping:
//!
//! ```rust
//! use kepler_orbit::{orbit::Orbit, orbit_type::minimal_params::OrbitParams};
//! use nalgebra::Vector3;
//!
//! let orbit = Orbit::new(
//!     Vector3::new(-6045.0, -3490.0, 2500.0),
//!     Vector3::new(-3.457, 6.618, 2.533),
//! );
//! let elements = orbit.elements();
//! let params = OrbitParams::from(&elements);
//! let rebuilt = Orbit::from_params(&params).unwrap();
//! assert!((rebuilt.position() - orbit.position()).norm() < 1e-6);
//! ```
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **degrees**
//! - Time: **seconds**

use std::fmt;

use nalgebra::Vector3;

use crate::{
    central_body::CentralBody,
    constants::{Degree, Kilometer, Second},
    orbit::Orbit,
    orbit_type::minimal_params::OrbitParams,
};

/// Every classical element of an orbit, evaluated at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalElements {
    pub angular_momentum: Vector3<f64>,
    pub eccentricity: Vector3<f64>,
    pub node_line: Vector3<f64>,
    pub radial_velocity: f64,
    pub semimajor_axis: Kilometer,
    pub semiminor_axis: Kilometer,
    pub semilatus_rectum: Kilometer,
    pub inclination: Degree,
    pub right_ascension: Degree,
    pub argument_of_periapsis: Degree,
    pub true_anomaly: Degree,
    pub periapsis: Kilometer,
    pub apoapsis: Kilometer,
    pub period: Second,
    pub specific_energy: f64,
    pub body: CentralBody,
}

impl From<&Orbit> for ClassicalElements {
    fn from(orbit: &Orbit) -> Self {
        ClassicalElements {
            angular_momentum: orbit.angular_momentum(),
            eccentricity: orbit.eccentricity(),
            node_line: orbit.node_line(),
            radial_velocity: orbit.radial_velocity(),
            semimajor_axis: orbit.semimajor_axis(),
            semiminor_axis: orbit.semiminor_axis(),
            semilatus_rectum: orbit.semilatus_rectum(),
            inclination: orbit.inclination(),
            right_ascension: orbit.right_ascension(),
            argument_of_periapsis: orbit.argument_of_periapsis(),
            true_anomaly: orbit.true_anomaly(),
            periapsis: orbit.periapsis(),
            apoapsis: orbit.apoapsis(),
            period: orbit.period(),
            specific_energy: orbit.specific_energy(),
            body: *orbit.body(),
        }
    }
}

impl From<&ClassicalElements> for OrbitParams {
    /// Parameter mapping describing the same state.
    ///
    /// Uses the `{semilatusRectum, eccentricity}` set, which stays defined for
    /// parabolic and hyperbolic orbits, plus the four angles and the central body.
    fn from(elements: &ClassicalElements) -> Self {
        OrbitParams {
            semilatus_rectum: Some(elements.semilatus_rectum),
            eccentricity: Some(elements.eccentricity.norm()),
            inclination: Some(elements.inclination),
            argument_of_periapsis: Some(elements.argument_of_periapsis),
            right_ascension: Some(elements.right_ascension),
            true_anomaly: Some(elements.true_anomaly),
            mu: Some(elements.body.mu()),
            central_body_radius: Some(elements.body.radius()),
            ..Default::default()
        }
    }
}

impl fmt::Display for ClassicalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Classical Elements (mu = {:.3} km^3/s^2)",
            self.body.mu()
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  h   (angular momentum)      = {:.6} km^2/s",
            self.angular_momentum.norm()
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity.norm()
        )?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} km",
            self.semimajor_axis
        )?;
        writeln!(
            f,
            "  p   (semilatus rectum)      = {:.6} km",
            self.semilatus_rectum
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (right ascension)       = {:.6}°",
            self.right_ascension
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.argument_of_periapsis
        )?;
        writeln!(
            f,
            "  θ   (true anomaly)          = {:.6}°",
            self.true_anomaly
        )?;
        writeln!(
            f,
            "  rp  (periapsis radius)      = {:.6} km",
            self.periapsis
        )?;
        writeln!(
            f,
            "  ra  (apoapsis radius)       = {:.6} km",
            self.apoapsis
        )?;
        write!(f, "  T   (period)                = {:.6} s", self.period)
    }
}
