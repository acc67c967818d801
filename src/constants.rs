//! # Constants and type definitions for `kepler_orbit`
//!
//! This module centralizes the **physical constants** and **common type aliases**
//! used throughout the crate.
//!
//! ## Overview
//!
//! - Default central body (Earth) gravitational parameter and mean radius
//! - Unit vectors `I, J, K` of the inertial reference frame
//! - Angle and length type aliases used in public signatures
//!
//! Units follow the usual astrodynamics convention: kilometres, seconds, and
//! km³/s² for gravitational parameters. Angles crossing the public API are in
//! **degrees**; trigonometry is done internally in radians.

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Earth gravitational parameter μ = GM in km³/s²
pub const MU_EARTH: f64 = 398_600.0;

/// Earth mean radius in kilometres
pub const EARTH_RADIUS: f64 = 6_371.0;

/// Number of decimals kept when deciding whether an eccentricity or node-line
/// norm is zero.
pub const DEGENERACY_DECIMALS: i32 = 5;

// -------------------------------------------------------------------------------------------------
// Inertial frame
// -------------------------------------------------------------------------------------------------

/// Unit vector `I` of the inertial frame (towards the reference direction).
#[inline]
pub fn i_hat() -> Vector3<f64> {
    Vector3::x()
}

/// Unit vector `J` of the inertial frame.
#[inline]
pub fn j_hat() -> Vector3<f64> {
    Vector3::y()
}

/// Unit vector `K` of the inertial frame (the pole).
#[inline]
pub fn k_hat() -> Vector3<f64> {
    Vector3::z()
}

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometres
pub type Kilometer = f64;
/// Elapsed time in seconds
pub type Second = f64;
