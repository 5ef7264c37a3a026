use serde::Serialize;

use crate::{
    core::{
        error::InvalidInputError,
        estimator::PowerEstimator,
        rayleigh::Rayleigh,
        speed_range::SpeedRange,
    },
    prelude::*,
    quantity::{
        energy::KilowattHours,
        power::Watts,
        power_density::WattsPerSquareMeter,
        speed::MetersPerSecond,
        time::Hours,
    },
};

/// Long-term production of a turbine at a site with Rayleigh-distributed wind speeds.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct AnnualYield {
    #[serde(rename = "mean_wind_speed_meters_per_second")]
    pub mean_wind_speed: MetersPerSecond,

    /// Power density of the wind blowing constantly at the mean speed.
    #[serde(rename = "wind_power_density_watts_per_square_meter")]
    pub wind_power_density: WattsPerSquareMeter,

    #[serde(rename = "expected_power_watts")]
    pub expected_power: Watts,

    #[serde(rename = "annual_energy_kilowatt_hours")]
    pub annual_energy: KilowattHours,

    pub capacity_factor: Option<f64>,
}

impl AnnualYield {
    #[instrument(skip_all, fields(mean_wind_speed = ?mean_wind_speed))]
    pub fn try_estimate(
        estimator: &PowerEstimator,
        mean_wind_speed: MetersPerSecond,
        range: SpeedRange,
    ) -> Result<Self, InvalidInputError> {
        let distribution = Rayleigh::with_mean(mean_wind_speed)?;
        debug!(
            scale = ?distribution.scale(),
            n_points = range.n_points(),
            "fitted the distribution",
        );

        let mut expected_power = Watts::ZERO;
        for (wind_speed, probability) in distribution.probabilities(range) {
            expected_power += estimator.estimate(wind_speed)? * probability;
        }
        let rated_power = estimator.rated_power();

        Ok(Self {
            mean_wind_speed,
            wind_power_density: WattsPerSquareMeter::of_wind(
                estimator.parameters().air_density(),
                mean_wind_speed,
            ),
            expected_power,
            annual_energy: (expected_power * Hours::ONE_YEAR).into(),
            capacity_factor: (rated_power > Watts::ZERO).then(|| expected_power / rated_power),
        })
    }
}
