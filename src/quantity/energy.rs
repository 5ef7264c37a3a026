use std::ops::Div;

use chrono::TimeDelta;

use crate::quantity::{power::Watts, time::Hours};

quantity!(WattHours, "Wh");
quantity!(KilowattHours, "kWh");

impl From<WattHours> for KilowattHours {
    fn from(watt_hours: WattHours) -> Self {
        Self(watt_hours.0 / 1000.0)
    }
}

impl Div<Hours> for WattHours {
    type Output = Watts;

    fn div(self, hours: Hours) -> Self::Output {
        Watts(self.0 / hours.0)
    }
}

impl Div<TimeDelta> for WattHours {
    type Output = Watts;

    fn div(self, time_delta: TimeDelta) -> Self::Output {
        self / Hours::from(time_delta)
    }
}
