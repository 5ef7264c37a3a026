use crate::{core::error::InvalidInputError, quantity::speed::MetersPerSecond};

/// Evenly spaced wind speeds from zero up to and including the maximum.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedRange {
    max: MetersPerSecond,
    step: MetersPerSecond,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self { max: MetersPerSecond(30.0), step: MetersPerSecond(0.5) }
    }
}

impl SpeedRange {
    /// Absorbs the rounding error of `max / step`.
    const TOLERANCE: f64 = 1e-9;

    pub const MAX_POINTS: usize = 1_000_000;

    pub fn try_new(max: MetersPerSecond, step: MetersPerSecond) -> Result<Self, InvalidInputError> {
        InvalidInputError::ensure_non_negative("maximum wind speed", max.0)?;
        InvalidInputError::ensure_positive("wind speed step", step.0)?;
        #[expect(clippy::cast_precision_loss)]
        let limit = Self::MAX_POINTS as f64;
        if Self::n_steps(max, step) >= limit {
            return Err(InvalidInputError::TooManyPoints { max, step, limit: Self::MAX_POINTS });
        }
        Ok(Self { max, step })
    }

    fn n_steps(max: MetersPerSecond, step: MetersPerSecond) -> f64 {
        (max / step + Self::TOLERANCE).floor()
    }

    pub const fn step(self) -> MetersPerSecond {
        self.step
    }

    #[must_use]
    pub fn n_points(self) -> usize {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_steps = Self::n_steps(self.max, self.step) as usize;
        n_steps.saturating_add(1)
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn iter(self) -> impl Iterator<Item = MetersPerSecond> + Clone {
        (0..self.n_points()).map(move |index| self.step * index as f64)
    }
}
