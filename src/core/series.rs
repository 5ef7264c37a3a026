mod integrate;

use chrono::{DateTime, Local};
use serde::Serialize;

pub use self::integrate::Integrate;
use crate::quantity::{energy::WattHours, power::Watts, speed::MetersPerSecond, time::Hours};

pub type Point<K, V> = (K, V);
pub type Series<K, V> = Vec<Point<K, V>>;

/// Chronological wind speed measurements.
pub type WindSamples<Tz = Local> = Series<DateTime<Tz>, MetersPerSecond>;

/// Estimated power output, one point per wind sample.
pub type PowerSeries<Tz = Local> = Series<DateTime<Tz>, Watts>;

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SeriesSummary {
    pub n_samples: usize,

    #[serde(rename = "duration_hours")]
    pub duration: Hours,

    #[serde(rename = "total_energy_watt_hours")]
    pub total_energy: WattHours,

    /// Absent for a series which covers no time.
    #[serde(rename = "mean_power_watts")]
    pub mean_power: Option<Watts>,

    /// Mean power relative to the rated power, `0..=1`.
    pub capacity_factor: Option<f64>,
}
