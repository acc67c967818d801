use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeplerError {
    #[error(
        "Invalid parameter set: expected one of {{semimajorAxis, eccentricity}}, \
         {{semilatusRectum, eccentricity}} or {{apogee, perigee}}, got {provided:?}"
    )]
    InvalidParameterSet { provided: Vec<String> },

    #[error("Unknown orbital parameter: {0}")]
    UnknownParameter(String),

    #[error("Position vector is zero, orbital elements are undefined")]
    ZeroPosition,

    #[error("Gravitational parameter must be strictly positive and finite, got {0}")]
    NonPositiveMu(f64),

    #[error("Central body radius must be positive and finite, got {0}")]
    InvalidCentralBodyRadius(f64),

    #[error("State vector contains a non-finite component")]
    NonFiniteState,
}

impl PartialEq for KeplerError {
    fn eq(&self, other: &Self) -> bool {
        use KeplerError::*;
        match (self, other) {
            (InvalidParameterSet { provided: a }, InvalidParameterSet { provided: b }) => a == b,
            (UnknownParameter(a), UnknownParameter(b)) => a == b,

            // f64 payloads: NaN inputs still count as the same failure
            (NonPositiveMu(a), NonPositiveMu(b)) => a == b || (a.is_nan() && b.is_nan()),
            (InvalidCentralBodyRadius(a), InvalidCentralBodyRadius(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }

            (ZeroPosition, ZeroPosition) => true,
            (NonFiniteState, NonFiniteState) => true,

            _ => false,
        }
    }
}
