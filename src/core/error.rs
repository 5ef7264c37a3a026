use thiserror::Error;

use crate::quantity::speed::MetersPerSecond;

/// Rejected input to the estimation core.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("wind speed must be a non-negative finite number, got {0}")]
    WindSpeed(MetersPerSecond),

    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("power coefficient must lie within (0, 1], got {0}")]
    PowerCoefficient(f64),

    #[error("expected cut-in ({cut_in}) ≤ rated ({rated}) ≤ cut-out ({cut_out}) speed")]
    SpeedOrder { cut_in: MetersPerSecond, rated: MetersPerSecond, cut_out: MetersPerSecond },

    #[error("wind speed range up to {max} in steps of {step} exceeds {limit} points")]
    TooManyPoints { max: MetersPerSecond, step: MetersPerSecond, limit: usize },

    #[error("mean wind speed {0} is too low to fit the distribution")]
    DegenerateDistribution(MetersPerSecond),

    #[error("cubic ramp requires the rated speed ({rated}) above the cut-in speed ({cut_in})")]
    DegenerateRamp { cut_in: MetersPerSecond, rated: MetersPerSecond },
}

impl InvalidInputError {
    pub fn ensure_positive(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 { Ok(()) } else { Err(Self::NotPositive { name, value }) }
    }

    pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 { Ok(()) } else { Err(Self::Negative { name, value }) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(InvalidInputError::ensure_positive("x", 1.0).is_ok());
        assert_eq!(
            InvalidInputError::ensure_positive("x", 0.0),
            Err(InvalidInputError::NotPositive { name: "x", value: 0.0 }),
        );
        assert!(InvalidInputError::ensure_positive("x", f64::INFINITY).is_err());
        assert!(InvalidInputError::ensure_positive("x", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(InvalidInputError::ensure_non_negative("x", 0.0).is_ok());
        assert!(InvalidInputError::ensure_non_negative("x", -0.1).is_err());
    }

    #[test]
    fn test_display() {
        let error = InvalidInputError::WindSpeed(MetersPerSecond(-1.0));
        assert_eq!(error.to_string(), "wind speed must be a non-negative finite number, got -1 m/s");
    }
}
