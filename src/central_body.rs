//! # Central body configuration
//!
//! [`CentralBody`] carries the two physical parameters of the attracting body
//! that the two-body engine needs: the gravitational parameter `μ` and the
//! mean radius used to turn apogee/perigee altitudes into radii.
//!
//! The default is the Earth ([`MU_EARTH`], [`EARTH_RADIUS`]). The struct is
//! `serde`-deserializable so that callers can keep body definitions in their
//! own configuration files; this crate never reads files itself.
//!
//! ```rust
//! use kepler_orbit::central_body::CentralBody;
//!
//! let mars = CentralBody::new(42_828.37, 3_389.5).unwrap();
//! assert!(mars.mu() < CentralBody::earth().mu());
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Kilometer, EARTH_RADIUS, MU_EARTH},
    kepler_errors::KeplerError,
};

/// Gravitational parameter and mean radius of the attracting body.
///
/// Units
/// -----
/// * `mu`: km³/s²
/// * `radius`: km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralBody {
    mu: f64,
    #[serde(alias = "centralBodyRadius")]
    radius: Kilometer,
}

impl CentralBody {
    /// Build a validated central body.
    ///
    /// Arguments
    /// ---------
    /// * `mu`: gravitational parameter, must be finite and `> 0`.
    /// * `radius`: mean radius, must be finite and `>= 0`.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::NonPositiveMu`] or [`KeplerError::InvalidCentralBodyRadius`].
    pub fn new(mu: f64, radius: Kilometer) -> Result<Self, KeplerError> {
        let body = CentralBody { mu, radius };
        body.validate()?;
        Ok(body)
    }

    /// The Earth, with `μ = 398600 km³/s²` and a 6371 km mean radius.
    pub const fn earth() -> Self {
        CentralBody {
            mu: MU_EARTH,
            radius: EARTH_RADIUS,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn radius(&self) -> Kilometer {
        self.radius
    }

    /// Check the invariants of a body obtained through deserialization.
    pub fn validate(&self) -> Result<(), KeplerError> {
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return Err(KeplerError::NonPositiveMu(self.mu));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(KeplerError::InvalidCentralBodyRadius(self.radius));
        }
        Ok(())
    }
}

impl Default for CentralBody {
    fn default() -> Self {
        CentralBody::earth()
    }
}

#[cfg(test)]
mod central_body_test {
    use super::*;

    #[test]
    fn default_is_earth() {
        let body = CentralBody::default();
        assert_eq!(body.mu(), 398_600.0);
        assert_eq!(body.radius(), 6_371.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            CentralBody::new(0.0, 6371.0),
            Err(KeplerError::NonPositiveMu(0.0))
        );
        assert_eq!(
            CentralBody::new(f64::NAN, 6371.0),
            Err(KeplerError::NonPositiveMu(f64::NAN))
        );
        assert_eq!(
            CentralBody::new(398_600.0, -1.0),
            Err(KeplerError::InvalidCentralBodyRadius(-1.0))
        );
    }

    #[test]
    fn deserializes_from_json() {
        let body: CentralBody =
            serde_json::from_str(r#"{ "mu": 42828.37, "radius": 3389.5 }"#).unwrap();
        assert_eq!(body, CentralBody::new(42_828.37, 3_389.5).unwrap());

        let aliased: CentralBody =
            serde_json::from_str(r#"{ "mu": 42828.37, "centralBodyRadius": 3389.5 }"#).unwrap();
        assert_eq!(aliased, body);
    }
}
