use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{OutputFormat, print_csv, print_json},
        range::SpeedRangeArgs,
        turbine::TurbineArgs,
    },
    core::{estimator::PowerEstimator, turbine::TurbineParameters},
    prelude::*,
    quantity::{length::SquareMeters, power::Watts, speed::MetersPerSecond},
    tables::{build_curve_table, build_turbine_table},
};

#[derive(Parser)]
pub struct CurveArgs {
    #[clap(flatten)]
    turbine: TurbineArgs,

    #[clap(flatten)]
    range: SpeedRangeArgs,
}

impl CurveArgs {
    pub fn run(self, format: OutputFormat) -> Result {
        let estimator = PowerEstimator::new(self.turbine.load()?);
        let range = self.range.try_into_range()?;
        let curve = estimator.sample_curve(range)?;
        info!(n_points = curve.len(), rated_power = ?estimator.rated_power(), "sampled");

        match format {
            OutputFormat::Table => {
                println!("{}", build_turbine_table(&estimator));
                println!("{}", build_curve_table(&curve, estimator.rated_power()));
            }
            OutputFormat::Json => print_json(&CurveReport {
                turbine: estimator.parameters(),
                rated_power: estimator.rated_power(),
                swept_area: estimator.swept_area(),
                curve: curve.iter().copied().map(CurveRow::from).collect(),
            })?,
            OutputFormat::Csv => print_csv(curve.iter().copied().map(CurveRow::from))?,
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct CurveReport<'a> {
    turbine: &'a TurbineParameters,

    #[serde(rename = "rated_power_watts")]
    rated_power: Watts,

    #[serde(rename = "swept_area_square_meters")]
    swept_area: SquareMeters,

    curve: Vec<CurveRow>,
}

#[derive(Serialize)]
struct CurveRow {
    wind_speed_meters_per_second: MetersPerSecond,
    power_watts: Watts,
}

impl From<(MetersPerSecond, Watts)> for CurveRow {
    fn from((wind_speed, power): (MetersPerSecond, Watts)) -> Self {
        Self { wind_speed_meters_per_second: wind_speed, power_watts: power }
    }
}
