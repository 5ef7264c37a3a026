use std::f64::consts::PI;

use crate::{
    core::{error::InvalidInputError, series::Series, speed_range::SpeedRange},
    quantity::speed::MetersPerSecond,
};

/// [Rayleigh distribution][1] of wind speeds: the Weibull distribution with the shape `k = 2`.
///
/// [1]: https://en.wikipedia.org/wiki/Rayleigh_distribution
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Rayleigh {
    scale: MetersPerSecond,
}

impl Rayleigh {
    /// Fit the distribution to the mean wind speed: `c = v̄·√(2/π)`.
    pub fn with_mean(mean: MetersPerSecond) -> Result<Self, InvalidInputError> {
        InvalidInputError::ensure_positive("mean wind speed", mean.0)?;
        let scale = mean * (2.0 / PI).sqrt();
        if !scale.0.powi(2).is_normal() {
            return Err(InvalidInputError::DegenerateDistribution(mean));
        }
        Ok(Self { scale })
    }

    pub const fn scale(self) -> MetersPerSecond {
        self.scale
    }

    /// Probability density, per m/s.
    #[must_use]
    pub fn pdf(self, wind_speed: MetersPerSecond) -> f64 {
        let scale_squared = self.scale.0.powi(2);
        wind_speed.0 / scale_squared * (-wind_speed.0.powi(2) / (2.0 * scale_squared)).exp()
    }

    /// Discrete probabilities over the range, normalized to sum up to one.
    ///
    /// Each point carries the probability mass of its `step`-wide bin.
    pub fn probabilities(self, range: SpeedRange) -> Series<MetersPerSecond, f64> {
        let mut weights: Series<MetersPerSecond, f64> = range
            .iter()
            .map(|wind_speed| (wind_speed, self.pdf(wind_speed) * range.step().0))
            .collect();
        let total_weight: f64 = weights.iter().map(|(_, weight)| weight).sum();
        if total_weight > 0.0 {
            for (_, weight) in &mut weights {
                *weight /= total_weight;
            }
        }
        weights
    }
}
