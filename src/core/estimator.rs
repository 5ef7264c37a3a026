use std::ops::Sub;

use chrono::TimeDelta;

use crate::{
    core::{
        error::InvalidInputError,
        series::{Integrate, Series, SeriesSummary},
        speed_range::SpeedRange,
        turbine::{PowerCurve, TurbineParameters},
    },
    quantity::{
        length::SquareMeters,
        power::Watts,
        power_density::WattsPerSquareMeter,
        speed::MetersPerSecond,
    },
};

/// Turbine power output as a pure function of the wind speed.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct PowerEstimator {
    parameters: TurbineParameters,
    swept_area: SquareMeters,
    rated_power: Watts,
}

impl PowerEstimator {
    pub fn new(parameters: TurbineParameters) -> Self {
        let swept_area = SquareMeters::swept_by(parameters.rotor_diameter());
        let rated_power = match parameters.power_curve() {
            PowerCurve::Aerodynamic => {
                aerodynamic_power(&parameters, swept_area, parameters.rated_speed())
            }
            PowerCurve::CubicRamp { rated_power } => Watts::from(rated_power),
        };
        Self { parameters, swept_area, rated_power }
    }

    pub const fn parameters(&self) -> &TurbineParameters {
        &self.parameters
    }

    pub const fn swept_area(&self) -> SquareMeters {
        self.swept_area
    }

    /// Power output at the rated speed and above, until the cut-out.
    pub const fn rated_power(&self) -> Watts {
        self.rated_power
    }

    /// Estimate the power output at the given wind speed.
    pub fn estimate(&self, wind_speed: MetersPerSecond) -> Result<Watts, InvalidInputError> {
        if !(wind_speed.is_finite() && wind_speed >= MetersPerSecond::ZERO) {
            return Err(InvalidInputError::WindSpeed(wind_speed));
        }
        let parameters = &self.parameters;
        if wind_speed < parameters.cut_in_speed() || wind_speed >= parameters.cut_out_speed() {
            return Ok(Watts::ZERO);
        }
        let power = match parameters.power_curve() {
            PowerCurve::Aerodynamic => {
                aerodynamic_power(parameters, self.swept_area, wind_speed).min(self.rated_power)
            }
            PowerCurve::CubicRamp { .. } if wind_speed >= parameters.rated_speed() => {
                self.rated_power
            }
            PowerCurve::CubicRamp { .. } => {
                let fraction = (wind_speed - parameters.cut_in_speed())
                    / (parameters.rated_speed() - parameters.cut_in_speed());
                self.rated_power * fraction.powi(3)
            }
        };
        // `-0.0` wind speed at the zero cut-in yields `-0.0` otherwise:
        Ok(power.max(Watts::ZERO))
    }

    /// Estimate the power output for each sample, lazily and in the same order.
    ///
    /// The returned iterator may be cloned to replay the estimation.
    pub fn estimate_series<'a, K: Copy>(
        &'a self,
        samples: &'a [(K, MetersPerSecond)],
    ) -> impl Iterator<Item = Result<(K, Watts), InvalidInputError>> + Clone + 'a {
        samples.iter().map(move |(key, wind_speed)| Ok((*key, self.estimate(*wind_speed)?)))
    }

    /// Sample the power curve over the wind speed range.
    pub fn sample_curve(
        &self,
        range: SpeedRange,
    ) -> Result<Series<MetersPerSecond, Watts>, InvalidInputError> {
        range.iter().map(|wind_speed| Ok((wind_speed, self.estimate(wind_speed)?))).collect()
    }

    pub fn summarize<K>(&self, series: &[(K, Watts)]) -> SeriesSummary
    where
        K: Copy + Sub<Output = TimeDelta>,
    {
        let integrator = series.iter().copied().integrate();
        let mean_power = integrator.average();
        SeriesSummary {
            n_samples: series.len(),
            duration: integrator.time_delta.into(),
            total_energy: integrator.value,
            mean_power,
            capacity_factor: mean_power
                .filter(|_| self.rated_power > Watts::ZERO)
                .map(|mean_power| mean_power / self.rated_power),
        }
    }
}

/// `½·ρ·A·v³·Cp`
fn aerodynamic_power(
    parameters: &TurbineParameters,
    swept_area: SquareMeters,
    wind_speed: MetersPerSecond,
) -> Watts {
    WattsPerSquareMeter::of_wind(parameters.air_density(), wind_speed)
        * swept_area
        * parameters.power_coefficient()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, Local, TimeZone};
    use itertools::Itertools;

    use super::*;
    use crate::quantity::{length::Meters, power::Kilowatts};

    /// 80-meter rotor, `Cp = 0.4`, 3/12/25 m/s.
    fn estimator() -> PowerEstimator {
        PowerEstimator::new(
            TurbineParameters::builder()
                .rotor_diameter(Meters(80.0))
                .power_coefficient(0.4)
                .cut_in_speed(MetersPerSecond(3.0))
                .rated_speed(MetersPerSecond(12.0))
                .cut_out_speed(MetersPerSecond(25.0))
                .build()
                .unwrap(),
        )
    }

    fn ramp_estimator() -> PowerEstimator {
        PowerEstimator::new(
            TurbineParameters::builder()
                .rotor_diameter(Meters(90.0))
                .power_coefficient(0.4)
                .cut_in_speed(MetersPerSecond(3.0))
                .rated_speed(MetersPerSecond(11.5))
                .cut_out_speed(MetersPerSecond(25.0))
                .power_curve(PowerCurve::CubicRamp { rated_power: Kilowatts(2000.0) })
                .build()
                .unwrap(),
        )
    }

    fn at(seconds: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    #[test]
    fn test_rated_power() {
        // ½ · 1.225 · π · 40² · 12³ · 0.4:
        assert_abs_diff_eq!(estimator().rated_power().0, 2_128_039.465, epsilon = 0.001);
    }

    #[test]
    fn test_example_turbine() {
        let estimator = estimator();
        assert_eq!(estimator.estimate(MetersPerSecond(0.0)), Ok(Watts::ZERO));
        assert_eq!(estimator.estimate(MetersPerSecond(2.0)), Ok(Watts::ZERO));
        assert_eq!(estimator.estimate(MetersPerSecond(12.0)), Ok(estimator.rated_power()));
        assert_eq!(estimator.estimate(MetersPerSecond(30.0)), Ok(Watts::ZERO));
    }

    #[test]
    fn test_negative_zero_wind_speed() {
        for power_curve in
            [PowerCurve::Aerodynamic, PowerCurve::CubicRamp { rated_power: Kilowatts(100.0) }]
        {
            let estimator = PowerEstimator::new(
                TurbineParameters::builder()
                    .rotor_diameter(Meters(20.0))
                    .power_coefficient(0.4)
                    .cut_in_speed(MetersPerSecond(0.0))
                    .rated_speed(MetersPerSecond(10.0))
                    .cut_out_speed(MetersPerSecond(20.0))
                    .power_curve(power_curve)
                    .build()
                    .unwrap(),
            );
            let power = estimator.estimate(MetersPerSecond(-0.0)).unwrap();
            assert!(power.0.is_sign_positive());
            assert_eq!(power.to_string(), "0 W");
        }
    }

    #[test]
    fn test_cut_in_and_cut_out_boundaries() {
        let estimator = estimator();
        assert!(estimator.estimate(MetersPerSecond(3.0)).unwrap() > Watts::ZERO);
        assert_eq!(estimator.estimate(MetersPerSecond(25.0)), Ok(Watts::ZERO));
        assert_eq!(estimator.estimate(MetersPerSecond(24.999)), Ok(estimator.rated_power()));
    }

    #[test]
    fn test_cubic_below_rated_speed() {
        let estimator = estimator();
        let lower = estimator.estimate(MetersPerSecond(5.0)).unwrap();
        let upper = estimator.estimate(MetersPerSecond(10.0)).unwrap();
        assert_abs_diff_eq!(upper / lower, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monotonic_and_then_constant() {
        let estimator = estimator();
        let range = SpeedRange::try_new(MetersPerSecond(30.0), MetersPerSecond(0.1)).unwrap();
        let curve = estimator.sample_curve(range).unwrap();
        for ((left_speed, left_power), (_, right_power)) in curve.iter().tuple_windows() {
            if *left_speed >= MetersPerSecond(3.0) && *left_speed < MetersPerSecond(11.9) {
                assert!(right_power >= left_power, "{left_speed:?}");
            }
        }
        for (wind_speed, power) in &curve {
            if *wind_speed >= MetersPerSecond(12.0) && *wind_speed < MetersPerSecond(25.0) {
                assert_eq!(*power, estimator.rated_power(), "{wind_speed:?}");
            }
        }
    }

    #[test]
    fn test_rejects_invalid_wind_speed() {
        let estimator = estimator();
        assert_eq!(
            estimator.estimate(MetersPerSecond(-0.5)),
            Err(InvalidInputError::WindSpeed(MetersPerSecond(-0.5))),
        );
        assert!(estimator.estimate(MetersPerSecond(f64::NAN)).is_err());
        assert!(estimator.estimate(MetersPerSecond(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_cubic_ramp() {
        let estimator = ramp_estimator();
        assert_abs_diff_eq!(estimator.rated_power().0, 2_000_000.0);
        assert_eq!(estimator.estimate(MetersPerSecond(3.0)), Ok(Watts::ZERO));
        assert_eq!(estimator.estimate(MetersPerSecond(11.5)), Ok(Watts(2_000_000.0)));
        assert_eq!(estimator.estimate(MetersPerSecond(20.0)), Ok(Watts(2_000_000.0)));
        assert_eq!(estimator.estimate(MetersPerSecond(25.0)), Ok(Watts::ZERO));
        // Halfway through the ramp is ⅛ of the rated power:
        assert_abs_diff_eq!(
            estimator.estimate(MetersPerSecond(7.25)).unwrap().0,
            250_000.0,
            epsilon = 1e-6,
        );
    }

    #[test]
    fn test_estimate_series_empty() {
        let samples: Vec<(DateTime<Local>, MetersPerSecond)> = Vec::new();
        let estimator = estimator();
        assert_eq!(estimator.estimate_series(&samples).count(), 0);
        let series = estimator.estimate_series(&samples).collect::<Result<Vec<_>, _>>().unwrap();
        assert_abs_diff_eq!(estimator.summarize(&series).total_energy.0, 0.0);
    }

    #[test]
    fn test_estimate_series_is_restartable() {
        let estimator = estimator();
        let samples = [(at(0), MetersPerSecond(2.0)), (at(600), MetersPerSecond(8.0))];
        let iterator = estimator.estimate_series(&samples);
        let first = iterator.clone().collect::<Result<Vec<_>, _>>().unwrap();
        let second = iterator.collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0], (at(0), Watts::ZERO));
        assert_eq!(first[1], (at(600), estimator.estimate(MetersPerSecond(8.0)).unwrap()));
    }

    #[test]
    fn test_estimate_series_fails_on_negative_sample() {
        let estimator = estimator();
        let samples = [(at(0), MetersPerSecond(5.0)), (at(60), MetersPerSecond(-1.0))];
        let result = estimator.estimate_series(&samples).collect::<Result<Vec<_>, _>>();
        assert_eq!(result, Err(InvalidInputError::WindSpeed(MetersPerSecond(-1.0))));
    }

    #[test]
    fn test_summarize_constant_power() {
        let estimator = estimator();
        let samples = [
            (at(0), MetersPerSecond(15.0)),
            (at(1800), MetersPerSecond(20.0)),
            (at(3600), MetersPerSecond(13.0)),
        ];
        let series = estimator.estimate_series(&samples).collect::<Result<Vec<_>, _>>().unwrap();
        let summary = estimator.summarize(&series);
        assert_eq!(summary.n_samples, 3);
        assert_abs_diff_eq!(summary.duration.0, 1.0);
        assert_abs_diff_eq!(summary.total_energy.0, estimator.rated_power().0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.capacity_factor.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summarize_single_sample() {
        let estimator = estimator();
        let summary = estimator.summarize(&[(at(0), Watts(1000.0))]);
        assert_eq!(summary.n_samples, 1);
        assert_abs_diff_eq!(summary.total_energy.0, 0.0);
        assert!(summary.mean_power.is_none());
        assert!(summary.capacity_factor.is_none());
    }
}
