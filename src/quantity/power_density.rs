use std::ops::Mul;

use crate::quantity::{
    density::KilogramsPerCubicMeter,
    length::SquareMeters,
    power::Watts,
    speed::MetersPerSecond,
};

quantity!(
    /// [Wind power density][1]: kinetic power carried by the wind through a unit of area.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Wind_power#Wind_energy
    WattsPerSquareMeter,
    "W/m²"
);

impl WattsPerSquareMeter {
    /// `½·ρ·v³`
    pub fn of_wind(air_density: KilogramsPerCubicMeter, wind_speed: MetersPerSecond) -> Self {
        Self(0.5 * air_density.0 * wind_speed.cubed())
    }
}

impl Mul<SquareMeters> for WattsPerSquareMeter {
    type Output = Watts;

    fn mul(self, area: SquareMeters) -> Self::Output {
        Watts(self.0 * area.0)
    }
}
