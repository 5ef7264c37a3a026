use std::fmt::{Display, Formatter};

use crate::quantity::speed::MetersPerSecond;

/// Example locations with their average wind speed at the hub height.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Site {
    Kolkata,
    Hamburg,
    OffshoreNorthSea,
    Munich,
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kolkata => write!(f, "Kolkata, India"),
            Self::Hamburg => write!(f, "Hamburg, Germany"),
            Self::OffshoreNorthSea => write!(f, "Offshore North Sea"),
            Self::Munich => write!(f, "Munich, Germany"),
        }
    }
}

impl Site {
    pub const fn mean_wind_speed(self) -> MetersPerSecond {
        match self {
            Self::Kolkata => MetersPerSecond(3.5),
            Self::Hamburg => MetersPerSecond(5.5),
            Self::OffshoreNorthSea => MetersPerSecond(8.5),
            Self::Munich => MetersPerSecond(4.5),
        }
    }
}
