//! # kepler_orbit
//!
//! Two-body Keplerian orbit engine.
//!
//! - Derive the classical elements of a Cartesian state around a central body
//!   ([`orbit::Orbit`]).
//! - Propagate the state analytically with the universal-variable formulation
//!   ([`universal_formulation`], [`laguerre`], [`lagrange`]).
//! - Build a state from a minimal set of orbital parameters
//!   ([`state_from_params`], [`orbit_type::minimal_params`]).
//!
//! Units are km, km/s and seconds; angles are exchanged in degrees. The
//! default central body is the Earth (`μ = 398600 km³/s²`, `R = 6371 km`).
//!
//! ```rust
//! use kepler_orbit::{Orbit, OrbitParams};
//!
//! let params = OrbitParams::from_pairs([
//!     ("apogee", 416.0),
//!     ("perigee", 405.0),
//!     ("inclination", 51.65),
//! ])
//! .unwrap();
//! let orbit = Orbit::from_params(&params).unwrap();
//! let later = orbit.propagate(orbit.period() / 2.0);
//! assert!((later.position().norm() - orbit.apoapsis()).abs() < 1e-3);
//! ```

pub mod central_body;
pub mod constants;
pub mod kepler_errors;
pub mod lagrange;
pub mod laguerre;
pub mod orbit;
pub mod orbit_type;
pub mod ref_system;
pub mod state_from_params;
pub mod stumpff;
pub mod universal_formulation;

pub use central_body::CentralBody;
pub use kepler_errors::KeplerError;
pub use orbit::Orbit;
pub use orbit_type::{classical_element::ClassicalElements, minimal_params::OrbitParams};
