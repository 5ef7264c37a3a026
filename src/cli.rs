mod curve;
mod output;
mod range;
mod series;
mod site;
mod turbine;

use clap::{Parser, Subcommand};

pub use self::output::OutputFormat;
use crate::cli::{curve::CurveArgs, series::SeriesArgs, site::SiteArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Output format of the results. Logs always go to the standard error.
    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sample the turbine power curve over a wind speed range.
    #[clap(name = "curve")]
    Curve(Box<CurveArgs>),

    /// Estimate the power output and energy for measured wind speeds.
    #[clap(name = "series")]
    Series(Box<SeriesArgs>),

    /// Estimate the annual energy production at a site with the given mean wind speed.
    #[clap(name = "site")]
    Site(Box<SiteArgs>),
}

impl Command {
    pub fn run(self, format: OutputFormat) -> crate::prelude::Result {
        match self {
            Self::Curve(args) => args.run(format),
            Self::Series(args) => args.run(format),
            Self::Site(args) => args.run(format),
        }
    }
}
