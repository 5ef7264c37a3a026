use std::{fs, path::PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::{
    core::turbine::{PowerCurve, TurbineParameters},
    prelude::*,
    quantity::{
        density::KilogramsPerCubicMeter,
        length::Meters,
        power::Kilowatts,
        speed::MetersPerSecond,
    },
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum PowerCurveKind {
    /// Aerodynamic power capped at the rated speed.
    Aerodynamic,

    /// Cubic ramp from zero at the cut-in speed to the rated power at the rated speed.
    CubicRamp,
}

#[derive(Parser)]
pub struct TurbineArgs {
    /// TOML file with the turbine parameters, replacing the individual options.
    #[clap(
        long = "turbine-file",
        env = "TURBINE_FILE",
        conflicts_with_all = [
            "rotor_diameter",
            "air_density",
            "power_coefficient",
            "cut_in_speed",
            "rated_speed",
            "cut_out_speed",
            "power_curve",
            "rated_power",
        ]
    )]
    file: Option<PathBuf>,

    /// Rotor diameter in meters.
    #[clap(long = "rotor-diameter", env = "ROTOR_DIAMETER", default_value = "80")]
    rotor_diameter: Meters,

    /// Air density in kg/m³.
    #[clap(long = "air-density", env = "AIR_DENSITY", default_value = "1.225")]
    air_density: KilogramsPerCubicMeter,

    /// Power coefficient (Cp), `0 < Cp ≤ 1`.
    #[clap(long = "power-coefficient", env = "POWER_COEFFICIENT", default_value = "0.4")]
    power_coefficient: f64,

    /// Cut-in wind speed in m/s.
    #[clap(long = "cut-in-speed", env = "CUT_IN_SPEED", default_value = "3")]
    cut_in_speed: MetersPerSecond,

    /// Rated wind speed in m/s.
    #[clap(long = "rated-speed", env = "RATED_SPEED", default_value = "12")]
    rated_speed: MetersPerSecond,

    /// Cut-out wind speed in m/s.
    #[clap(long = "cut-out-speed", env = "CUT_OUT_SPEED", default_value = "25")]
    cut_out_speed: MetersPerSecond,

    #[clap(long = "power-curve", env = "POWER_CURVE", default_value = "aerodynamic")]
    power_curve: PowerCurveKind,

    /// Rated power in kilowatts, for the cubic ramp.
    #[clap(
        long = "rated-power-kilowatts",
        env = "RATED_POWER_KILOWATTS",
        required_if_eq("power_curve", "cubic-ramp")
    )]
    rated_power: Option<Kilowatts>,
}

impl TurbineArgs {
    pub fn load(&self) -> Result<TurbineParameters> {
        let parameters = match &self.file {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                TurbineFile::parse(&contents)
                    .with_context(|| format!("invalid turbine file `{}`", path.display()))?
            }
            None => self.try_into_parameters()?,
        };
        debug!(?parameters, "loaded");
        Ok(parameters)
    }

    fn try_into_parameters(&self) -> Result<TurbineParameters> {
        let power_curve = match self.power_curve {
            PowerCurveKind::Aerodynamic => PowerCurve::Aerodynamic,
            PowerCurveKind::CubicRamp => PowerCurve::CubicRamp {
                rated_power: self.rated_power.context("the cubic ramp needs the rated power")?,
            },
        };
        Ok(TurbineParameters::builder()
            .rotor_diameter(self.rotor_diameter)
            .air_density(self.air_density)
            .power_coefficient(self.power_coefficient)
            .cut_in_speed(self.cut_in_speed)
            .rated_speed(self.rated_speed)
            .cut_out_speed(self.cut_out_speed)
            .power_curve(power_curve)
            .build()?)
    }
}

/// Turbine parameters as stored in a TOML file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TurbineFile {
    rotor_diameter: Meters,
    air_density: Option<KilogramsPerCubicMeter>,
    power_coefficient: f64,
    cut_in_speed: MetersPerSecond,
    rated_speed: MetersPerSecond,
    cut_out_speed: MetersPerSecond,
    power_curve: Option<PowerCurve>,
}

impl TurbineFile {
    fn parse(contents: &str) -> Result<TurbineParameters> {
        let this: Self = toml::from_str(contents)?;
        Ok(TurbineParameters::builder()
            .rotor_diameter(this.rotor_diameter)
            .maybe_air_density(this.air_density)
            .power_coefficient(this.power_coefficient)
            .cut_in_speed(this.cut_in_speed)
            .rated_speed(this.rated_speed)
            .cut_out_speed(this.cut_out_speed)
            .maybe_power_curve(this.power_curve)
            .build()?)
    }
}
