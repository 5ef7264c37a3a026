use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        output::{OutputFormat, print_csv, print_json},
        range::SpeedRangeArgs,
        turbine::TurbineArgs,
    },
    core::{
        annual_yield::AnnualYield,
        estimator::PowerEstimator,
        site::Site,
        turbine::TurbineParameters,
    },
    prelude::*,
    quantity::speed::MetersPerSecond,
    tables::{build_annual_yield_table, build_turbine_table},
};

#[derive(Parser)]
pub struct SiteArgs {
    /// Preset location.
    #[clap(
        long,
        env = "SITE",
        conflicts_with = "mean_wind_speed",
        required_unless_present = "mean_wind_speed"
    )]
    site: Option<Site>,

    /// Long-term mean wind speed at the hub height in m/s.
    #[clap(long = "mean-wind-speed", env = "MEAN_WIND_SPEED")]
    mean_wind_speed: Option<MetersPerSecond>,

    #[clap(flatten)]
    turbine: TurbineArgs,

    #[clap(flatten)]
    range: SpeedRangeArgs,
}

impl SiteArgs {
    pub fn run(self, format: OutputFormat) -> Result {
        let mean_wind_speed = self
            .site
            .map(Site::mean_wind_speed)
            .or(self.mean_wind_speed)
            .context("either the site or the mean wind speed is required")?;
        let estimator = PowerEstimator::new(self.turbine.load()?);
        let annual_yield =
            AnnualYield::try_estimate(&estimator, mean_wind_speed, self.range.try_into_range()?)?;
        info!(
            site = ?self.site,
            annual_energy = ?annual_yield.annual_energy,
            "estimated",
        );

        match format {
            OutputFormat::Table => {
                let site = self.site.map(|site| site.to_string());
                println!("{}", build_turbine_table(&estimator));
                println!("{}", build_annual_yield_table(site.as_deref(), &annual_yield));
            }
            OutputFormat::Json => print_json(&SiteReport {
                site: self.site.map(|site| site.to_string()),
                turbine: estimator.parameters(),
                annual_yield,
            })?,
            OutputFormat::Csv => print_csv([annual_yield])?,
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SiteReport<'a> {
    site: Option<String>,
    turbine: &'a TurbineParameters,

    #[serde(flatten)]
    annual_yield: AnnualYield,
}
