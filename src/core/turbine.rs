use bon::bon;
use serde::{Deserialize, Serialize};

use crate::{
    core::error::InvalidInputError,
    prelude::*,
    quantity::{
        density::KilogramsPerCubicMeter,
        length::Meters,
        power::Kilowatts,
        speed::MetersPerSecond,
    },
};

/// Shape of the power curve between the cut-in and rated speeds.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PowerCurve {
    /// `½·ρ·A·v³·Cp`, capped at its own value at the rated speed.
    Aerodynamic,

    /// `P_rated·((v − v_in) / (v_rated − v_in))³` with the explicitly given rated power.
    CubicRamp { rated_power: Kilowatts },
}

/// Validated turbine description, immutable for the whole analysis run.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TurbineParameters {
    rotor_diameter: Meters,
    air_density: KilogramsPerCubicMeter,
    power_coefficient: f64,
    cut_in_speed: MetersPerSecond,
    rated_speed: MetersPerSecond,
    cut_out_speed: MetersPerSecond,
    power_curve: PowerCurve,
}

#[bon]
impl TurbineParameters {
    #[builder]
    pub fn new(
        rotor_diameter: Meters,
        #[builder(default = KilogramsPerCubicMeter::STANDARD_AIR)]
        air_density: KilogramsPerCubicMeter,
        power_coefficient: f64,
        cut_in_speed: MetersPerSecond,
        rated_speed: MetersPerSecond,
        cut_out_speed: MetersPerSecond,
        #[builder(default = PowerCurve::Aerodynamic)] power_curve: PowerCurve,
    ) -> Result<Self, InvalidInputError> {
        InvalidInputError::ensure_positive("rotor diameter", rotor_diameter.0)?;
        InvalidInputError::ensure_positive("air density", air_density.0)?;
        if !(power_coefficient > 0.0 && power_coefficient <= 1.0) {
            return Err(InvalidInputError::PowerCoefficient(power_coefficient));
        }
        InvalidInputError::ensure_non_negative("cut-in speed", cut_in_speed.0)?;
        InvalidInputError::ensure_non_negative("rated speed", rated_speed.0)?;
        InvalidInputError::ensure_non_negative("cut-out speed", cut_out_speed.0)?;
        if !(cut_in_speed <= rated_speed && rated_speed <= cut_out_speed) {
            return Err(InvalidInputError::SpeedOrder {
                cut_in: cut_in_speed,
                rated: rated_speed,
                cut_out: cut_out_speed,
            });
        }
        if let PowerCurve::CubicRamp { rated_power } = power_curve {
            InvalidInputError::ensure_positive("rated power", rated_power.0)?;
            if rated_speed <= cut_in_speed {
                return Err(InvalidInputError::DegenerateRamp {
                    cut_in: cut_in_speed,
                    rated: rated_speed,
                });
            }
        }
        if power_coefficient > Self::BETZ_LIMIT {
            warn!(power_coefficient, "power coefficient exceeds the Betz limit");
        }
        Ok(Self {
            rotor_diameter,
            air_density,
            power_coefficient,
            cut_in_speed,
            rated_speed,
            cut_out_speed,
            power_curve,
        })
    }
}

impl TurbineParameters {
    /// Theoretical maximum of the power coefficient, `16/27`.
    pub const BETZ_LIMIT: f64 = 16.0 / 27.0;

    pub const fn rotor_diameter(&self) -> Meters {
        self.rotor_diameter
    }

    pub const fn air_density(&self) -> KilogramsPerCubicMeter {
        self.air_density
    }

    #[must_use]
    pub const fn power_coefficient(&self) -> f64 {
        self.power_coefficient
    }

    pub const fn cut_in_speed(&self) -> MetersPerSecond {
        self.cut_in_speed
    }

    pub const fn rated_speed(&self) -> MetersPerSecond {
        self.rated_speed
    }

    pub const fn cut_out_speed(&self) -> MetersPerSecond {
        self.cut_out_speed
    }

    pub const fn power_curve(&self) -> PowerCurve {
        self.power_curve
    }
}
