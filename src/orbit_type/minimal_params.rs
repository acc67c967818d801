//! # Minimal orbital parameter sets
//!
//! [`OrbitParams`] is the parameter mapping accepted by
//! [`state_from_params`](crate::state_from_params::state_from_params). Every
//! field is optional; a mapping is usable as soon as it contains one of the
//! three **minimal parameter sets**, checked in this order:
//!
//! 1. `{semimajorAxis, eccentricity}`
//! 2. `{semilatusRectum, eccentricity}`
//! 3. `{apogee, perigee}`
//!
//! The remaining angles (`inclination`, `argumentOfPeriapsis`,
//! `rightAscension`, `trueAnomaly`) default to `0`, as does `eccentricity`
//! when it is not part of the selected set. `mu` and `centralBodyRadius`
//! default to the Earth.
//!
//! ## Expansion
//!
//! [`OrbitParams::expand`] resolves the mapping into [`ExpandedParams`]:
//!
//! * apogee and perigee given: `a = (2·R + apogee + perigee)/2`,
//!   `e = a/(R + perigee) − 1`, with `R` the central body radius;
//! * otherwise, semilatus rectum given: `a = p/(1 − e²)`;
//! * semilatus rectum absent: `p = a·(1 − e²)`;
//! * finally `h = √(p·μ)`.
//!
//! Apogee and perigee are **altitudes** above the central body, in km.
//! Angles are in degrees.
//!
//! ## Building a mapping
//!
//! ```rust
//! use kepler_orbit::orbit_type::minimal_params::OrbitParams;
//!
//! let params = OrbitParams::from_pairs([
//!     ("apogee", 416.0),
//!     ("perigee", 405.0),
//!     ("inclination", 51.65),
//! ])
//! .unwrap();
//! assert!(params.minimal_set().is_ok());
//! ```
//!
//! The struct also derives `serde::Deserialize` with the same camelCase keys,
//! and rejects unknown keys.

use serde::{Deserialize, Serialize};

use crate::{
    central_body::CentralBody,
    constants::{Degree, Kilometer},
    kepler_errors::KeplerError,
};

/// The three recognised minimal parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimalParamSet {
    SemimajorAxisEccentricity,
    SemilatusRectumEccentricity,
    ApogeePerigee,
}

/// Orbital parameter mapping, keyed by the camelCase names of its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct OrbitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semimajor_axis: Option<Kilometer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semilatus_rectum: Option<Kilometer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apogee: Option<Kilometer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perigee: Option<Kilometer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclination: Option<Degree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_of_periapsis: Option<Degree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_ascension: Option<Degree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_anomaly: Option<Degree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_body_radius: Option<Kilometer>,
}

/// Fully resolved parameters, ready for the perifocal construction.
///
/// `set` names the parameters the expansion actually used, which may differ
/// from [`OrbitParams::minimal_set`] when several sets are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedParams {
    pub set: MinimalParamSet,
    pub semimajor_axis: Kilometer,
    pub eccentricity: f64,
    pub semilatus_rectum: Kilometer,
    pub angular_momentum: f64,
    pub inclination: Degree,
    pub argument_of_periapsis: Degree,
    pub right_ascension: Degree,
    pub true_anomaly: Degree,
    pub body: CentralBody,
}

impl OrbitParams {
    /// Build a mapping from `(key, value)` pairs.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::UnknownParameter`] for a key that is not a field name.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, KeplerError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut params = OrbitParams::default();
        for (key, value) in pairs {
            params.set(key.as_ref(), value)?;
        }
        Ok(params)
    }

    /// Set one parameter by its camelCase key. A later value replaces an earlier one.
    pub fn set(&mut self, key: &str, value: f64) -> Result<(), KeplerError> {
        let slot = match key {
            "semimajorAxis" => &mut self.semimajor_axis,
            "eccentricity" => &mut self.eccentricity,
            "semilatusRectum" => &mut self.semilatus_rectum,
            "apogee" => &mut self.apogee,
            "perigee" => &mut self.perigee,
            "inclination" => &mut self.inclination,
            "argumentOfPeriapsis" => &mut self.argument_of_periapsis,
            "rightAscension" => &mut self.right_ascension,
            "trueAnomaly" => &mut self.true_anomaly,
            "mu" => &mut self.mu,
            "centralBodyRadius" => &mut self.central_body_radius,
            _ => return Err(KeplerError::UnknownParameter(key.to_string())),
        };
        *slot = Some(value);
        Ok(())
    }

    /// camelCase keys of the parameters present in the mapping.
    pub fn keys(&self) -> Vec<String> {
        [
            ("semimajorAxis", self.semimajor_axis),
            ("eccentricity", self.eccentricity),
            ("semilatusRectum", self.semilatus_rectum),
            ("apogee", self.apogee),
            ("perigee", self.perigee),
            ("inclination", self.inclination),
            ("argumentOfPeriapsis", self.argument_of_periapsis),
            ("rightAscension", self.right_ascension),
            ("trueAnomaly", self.true_anomaly),
            ("mu", self.mu),
            ("centralBodyRadius", self.central_body_radius),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|_| key.to_string()))
        .collect()
    }

    /// First minimal parameter set fully contained in the mapping.
    ///
    /// Only decides whether the mapping is usable. When apogee and perigee are
    /// both present, [`OrbitParams::expand`] uses them whatever this returns.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::InvalidParameterSet`] when none of the three sets is present.
    pub fn minimal_set(&self) -> Result<MinimalParamSet, KeplerError> {
        if self.semimajor_axis.is_some() && self.eccentricity.is_some() {
            Ok(MinimalParamSet::SemimajorAxisEccentricity)
        } else if self.semilatus_rectum.is_some() && self.eccentricity.is_some() {
            Ok(MinimalParamSet::SemilatusRectumEccentricity)
        } else if self.apogee.is_some() && self.perigee.is_some() {
            Ok(MinimalParamSet::ApogeePerigee)
        } else {
            Err(KeplerError::InvalidParameterSet {
                provided: self.keys(),
            })
        }
    }

    /// Central body described by the `mu` / `centralBodyRadius` entries, Earth by default.
    pub fn central_body(&self) -> Result<CentralBody, KeplerError> {
        let earth = CentralBody::earth();
        CentralBody::new(
            self.mu.unwrap_or(earth.mu()),
            self.central_body_radius.unwrap_or(earth.radius()),
        )
    }

    /// Resolve defaults and derived quantities.
    ///
    /// Return
    /// ------
    /// * [`ExpandedParams`] with semi-major axis, eccentricity, semilatus
    ///   rectum and angular momentum all filled in.
    ///
    /// Errors
    /// ------
    /// * [`KeplerError::InvalidParameterSet`] when no minimal set is present.
    /// * Central body errors for an invalid `mu` / `centralBodyRadius` override.
    pub fn expand(&self) -> Result<ExpandedParams, KeplerError> {
        self.minimal_set()?;
        let body = self.central_body()?;
        let radius = body.radius();

        let mut eccentricity = self.eccentricity.unwrap_or(0.0);
        let mut semimajor_axis = self.semimajor_axis;

        // apogee/perigee override any other set present in the mapping
        let set = if let (Some(apogee), Some(perigee)) = (self.apogee, self.perigee) {
            let a = (radius * 2.0 + apogee + perigee) / 2.0;
            eccentricity = a / (radius + perigee) - 1.0;
            semimajor_axis = Some(a);
            MinimalParamSet::ApogeePerigee
        } else if let Some(p) = self.semilatus_rectum {
            semimajor_axis = Some(p / (1.0 - eccentricity.powi(2)));
            MinimalParamSet::SemilatusRectumEccentricity
        } else {
            MinimalParamSet::SemimajorAxisEccentricity
        };

        // every minimal set yields a semi-major axis at this point
        let semimajor_axis = semimajor_axis.unwrap_or(f64::NAN);
        let semilatus_rectum = match (set, self.semilatus_rectum) {
            (MinimalParamSet::SemilatusRectumEccentricity, Some(p)) => p,
            _ => semimajor_axis * (1.0 - eccentricity.powi(2)),
        };

        Ok(ExpandedParams {
            set,
            semimajor_axis,
            eccentricity,
            semilatus_rectum,
            angular_momentum: (semilatus_rectum * body.mu()).sqrt(),
            inclination: self.inclination.unwrap_or(0.0),
            argument_of_periapsis: self.argument_of_periapsis.unwrap_or(0.0),
            right_ascension: self.right_ascension.unwrap_or(0.0),
            true_anomaly: self.true_anomaly.unwrap_or(0.0),
            body,
        })
    }
}

#[cfg(test)]
mod minimal_params_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn detects_each_minimal_set() {
        let a_e = OrbitParams::from_pairs([("semimajorAxis", 7000.0), ("eccentricity", 0.1)]);
        assert_eq!(
            a_e.unwrap().minimal_set(),
            Ok(MinimalParamSet::SemimajorAxisEccentricity)
        );

        let p_e = OrbitParams::from_pairs([("semilatusRectum", 7000.0), ("eccentricity", 0.1)]);
        assert_eq!(
            p_e.unwrap().minimal_set(),
            Ok(MinimalParamSet::SemilatusRectumEccentricity)
        );

        let apo_peri = OrbitParams::from_pairs([("apogee", 416.0), ("perigee", 405.0)]);
        assert_eq!(
            apo_peri.unwrap().minimal_set(),
            Ok(MinimalParamSet::ApogeePerigee)
        );
    }

    #[test]
    fn eccentricity_alone_is_not_a_set() {
        let params =
            OrbitParams::from_pairs([("eccentricity", 0.1), ("inclination", 28.5)]).unwrap();
        assert_eq!(
            params.minimal_set(),
            Err(KeplerError::InvalidParameterSet {
                provided: vec!["eccentricity".into(), "inclination".into()],
            })
        );
        assert!(params.expand().is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert_eq!(
            OrbitParams::from_pairs([("semiMajorAxis", 7000.0)]),
            Err(KeplerError::UnknownParameter("semiMajorAxis".into()))
        );
    }

    #[test]
    fn expands_semimajor_axis_with_defaults() {
        let params = OrbitParams {
            semimajor_axis: Some(8000.0),
            eccentricity: Some(0.2),
            ..Default::default()
        };
        let expanded = params.expand().unwrap();

        assert_relative_eq!(expanded.semilatus_rectum, 7680.0, max_relative = 1e-14);
        assert_eq!(expanded.inclination, 0.0);
        assert_eq!(expanded.argument_of_periapsis, 0.0);
        assert_eq!(expanded.right_ascension, 0.0);
        assert_eq!(expanded.true_anomaly, 0.0);
        assert_eq!(expanded.body, CentralBody::earth());
        assert_relative_eq!(
            expanded.angular_momentum,
            (7680.0f64 * 398_600.0).sqrt(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn expands_semilatus_rectum() {
        let params = OrbitParams {
            semilatus_rectum: Some(16_056.196_688_409_433),
            eccentricity: Some(1.4),
            ..Default::default()
        };
        let expanded = params.expand().unwrap();

        assert_eq!(expanded.semilatus_rectum, 16_056.196_688_409_433);
        assert!(expanded.semimajor_axis < 0.0, "hyperbola has a < 0");
        assert_relative_eq!(
            expanded.semimajor_axis,
            16_056.196_688_409_433 / (1.0 - 1.96),
            max_relative = 1e-12
        );
    }

    #[test]
    fn expands_apogee_and_perigee_altitudes() {
        let params = OrbitParams {
            apogee: Some(416.0),
            perigee: Some(405.0),
            ..Default::default()
        };
        let expanded = params.expand().unwrap();

        let a = (2.0 * 6371.0 + 416.0 + 405.0) / 2.0;
        assert_eq!(expanded.semimajor_axis, a);
        assert_eq!(expanded.eccentricity, a / (6371.0 + 405.0) - 1.0);
        assert_relative_eq!(
            expanded.semilatus_rectum,
            a * (1.0 - expanded.eccentricity.powi(2)),
            max_relative = 1e-14
        );
    }

    #[test]
    fn expansion_reports_the_set_it_used() {
        let params = OrbitParams::from_pairs([
            ("semimajorAxis", 9000.0),
            ("eccentricity", 0.1),
            ("apogee", 416.0),
            ("perigee", 405.0),
        ])
        .unwrap();
        assert_eq!(
            params.minimal_set(),
            Ok(MinimalParamSet::SemimajorAxisEccentricity)
        );

        let expanded = params.expand().unwrap();
        assert_eq!(expanded.set, MinimalParamSet::ApogeePerigee);
        assert_eq!(expanded.semimajor_axis, 6781.5);

        // a stray semilatus rectum does not survive the override either
        let mixed = OrbitParams {
            semilatus_rectum: Some(7000.0),
            ..params
        };
        let expanded = mixed.expand().unwrap();
        assert_eq!(expanded.set, MinimalParamSet::ApogeePerigee);
        assert_relative_eq!(
            expanded.semilatus_rectum,
            6781.5 * (1.0 - expanded.eccentricity.powi(2)),
            max_relative = 1e-14
        );

        let p_over_a = OrbitParams::from_pairs([
            ("semimajorAxis", 9000.0),
            ("semilatusRectum", 7000.0),
            ("eccentricity", 0.1),
        ])
        .unwrap();
        let expanded = p_over_a.expand().unwrap();
        assert_eq!(expanded.set, MinimalParamSet::SemilatusRectumEccentricity);
        assert_relative_eq!(expanded.semimajor_axis, 7000.0 / 0.99, max_relative = 1e-14);

        let a_e = OrbitParams::from_pairs([("semimajorAxis", 9000.0), ("eccentricity", 0.1)]);
        assert_eq!(
            a_e.unwrap().expand().unwrap().set,
            MinimalParamSet::SemimajorAxisEccentricity
        );
    }

    #[test]
    fn custom_central_body() {
        let params = OrbitParams {
            apogee: Some(400.0),
            perigee: Some(400.0),
            mu: Some(42_828.37),
            central_body_radius: Some(3_389.5),
            ..Default::default()
        };
        let expanded = params.expand().unwrap();
        assert_eq!(expanded.semimajor_axis, 3_789.5);
        assert_eq!(expanded.eccentricity, 0.0);
        assert_eq!(expanded.body.mu(), 42_828.37);

        let bad_mu = OrbitParams {
            mu: Some(-1.0),
            ..params
        };
        assert_eq!(bad_mu.expand(), Err(KeplerError::NonPositiveMu(-1.0)));
    }

    #[test]
    fn deserializes_camel_case_mapping() {
        let params: OrbitParams = serde_json::from_str(
            r#"{ "semilatusRectum": 16056.196688409433, "eccentricity": 1.4,
                 "inclination": 30, "argumentOfPeriapsis": 60,
                 "rightAscension": 40, "trueAnomaly": 30 }"#,
        )
        .unwrap();

        assert_eq!(params.semilatus_rectum, Some(16_056.196_688_409_433));
        assert_eq!(params.argument_of_periapsis, Some(60.0));
        assert_eq!(params.semimajor_axis, None);

        let unknown = serde_json::from_str::<OrbitParams>(r#"{ "apogee": 1, "altitude": 2 }"#);
        assert!(unknown.is_err());
    }
}
