use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{OutputFormat, print_csv, print_json},
        turbine::TurbineArgs,
    },
    core::{
        estimator::PowerEstimator,
        series::{PowerSeries, SeriesSummary},
        turbine::TurbineParameters,
    },
    ingest::read_wind_samples,
    prelude::*,
    quantity::{power::Watts, speed::MetersPerSecond},
    tables::{build_series_table, build_summary_table, build_turbine_table},
};

#[derive(Parser)]
pub struct SeriesArgs {
    /// CSV file with the `timestamp` and `wind_speed` columns.
    path: PathBuf,

    #[clap(flatten)]
    turbine: TurbineArgs,
}

impl SeriesArgs {
    pub fn run(self, format: OutputFormat) -> Result {
        let estimator = PowerEstimator::new(self.turbine.load()?);
        let samples = read_wind_samples(&self.path)?;
        let power_series = estimator
            .estimate_series(&samples)
            .collect::<Result<PowerSeries, _>>()
            .context("failed to estimate the power series")?;
        let summary = estimator.summarize(&power_series);
        info!(
            n_samples = summary.n_samples,
            total_energy = ?summary.total_energy,
            "estimated",
        );

        match format {
            OutputFormat::Table => {
                println!("{}", build_turbine_table(&estimator));
                println!(
                    "{}",
                    build_series_table(&samples, &power_series, estimator.rated_power())
                );
                println!("{}", build_summary_table(&summary));
            }
            OutputFormat::Json => print_json(&SeriesReport {
                turbine: estimator.parameters(),
                summary,
                series: SeriesRow::zip(&samples, &power_series).collect(),
            })?,
            OutputFormat::Csv => print_csv(SeriesRow::zip(&samples, &power_series))?,
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SeriesReport<'a> {
    turbine: &'a TurbineParameters,
    summary: SeriesSummary,
    series: Vec<SeriesRow>,
}

#[derive(Serialize)]
struct SeriesRow {
    timestamp: DateTime<Local>,
    wind_speed_meters_per_second: MetersPerSecond,
    power_watts: Watts,
}

impl SeriesRow {
    fn zip<'a>(
        samples: &'a [(DateTime<Local>, MetersPerSecond)],
        power_series: &'a [(DateTime<Local>, Watts)],
    ) -> impl Iterator<Item = Self> + 'a {
        samples.iter().zip(power_series).map(|((timestamp, wind_speed), (_, power))| Self {
            timestamp: *timestamp,
            wind_speed_meters_per_second: *wind_speed,
            power_watts: *power,
        })
    }
}
