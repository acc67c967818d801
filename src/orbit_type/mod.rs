//! # Orbital element representations
//!
//! Two views of an orbit besides its Cartesian state:
//!
//! - [`minimal_params`](crate::orbit_type::minimal_params) – the user-facing
//!   parameter mapping (`semimajorAxis`, `apogee`, `inclination`, …) from which
//!   a state can be constructed, and its expansion rules.
//! - [`classical_element`](crate::orbit_type::classical_element) – a snapshot
//!   of every classical element derived from a state.

/// Classical element snapshot of an [`Orbit`](crate::orbit::Orbit).
pub mod classical_element;

/// Minimal orbital parameter sets and their expansion.
pub mod minimal_params;
