use std::ops::Mul;

use chrono::TimeDelta;

use crate::quantity::{energy::WattHours, time::Hours};

quantity!(Watts, "W");
quantity!(Kilowatts, "kW");

impl From<Kilowatts> for Watts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

impl Mul<Hours> for Watts {
    type Output = WattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        WattHours(self.0 * hours.0)
    }
}

impl Mul<TimeDelta> for Watts {
    type Output = WattHours;

    fn mul(self, time_delta: TimeDelta) -> Self::Output {
        self * Hours::from(time_delta)
    }
}
