use clap::Parser;

use crate::{core::speed_range::SpeedRange, prelude::*, quantity::speed::MetersPerSecond};

#[derive(Parser)]
pub struct SpeedRangeArgs {
    /// Highest sampled wind speed in m/s.
    #[clap(long = "max-speed", env = "MAX_SPEED", default_value = "30")]
    max: MetersPerSecond,

    /// Distance between the sampled wind speeds in m/s.
    #[clap(long = "speed-step", env = "SPEED_STEP", default_value = "0.5")]
    step: MetersPerSecond,
}

impl SpeedRangeArgs {
    pub fn try_into_range(&self) -> Result<SpeedRange> {
        Ok(SpeedRange::try_new(self.max, self.step)?)
    }
}
