use std::ops::{Div, Sub};

use chrono::TimeDelta;
use derive_more::AddAssign;
use itertools::Itertools;

use crate::quantity::{energy::WattHours, power::Watts};

/// Value accumulated over time.
#[derive(Copy, Clone, Debug, AddAssign)]
pub struct Integrator<T> {
    pub time_delta: TimeDelta,
    pub value: T,
}

impl Default for Integrator<WattHours> {
    fn default() -> Self {
        Self { time_delta: TimeDelta::zero(), value: WattHours::ZERO }
    }
}

impl<T> Integrator<T> {
    pub fn average(self) -> Option<<T as Div<TimeDelta>>::Output>
    where
        T: Div<TimeDelta>,
    {
        if self.time_delta.is_zero() { None } else { Some(self.value / self.time_delta) }
    }
}

impl<T> Integrate for T where T: ?Sized {}

pub trait Integrate {
    /// Integrate the power over time with the trapezoidal rule.
    ///
    /// Windows which do not move forward in time are skipped, so that the total energy
    /// of fewer than two points is zero.
    fn integrate<K>(self) -> Integrator<WattHours>
    where
        Self: Iterator<Item = (K, Watts)> + Sized,
        K: Copy + Sub<Output = TimeDelta>,
    {
        self.tuple_windows()
            .map(|((from_key, from_power), (to_key, to_power))| {
                (to_key - from_key, (from_power + to_power) / 2.0)
            })
            .filter(|(time_delta, _)| *time_delta > TimeDelta::zero())
            .fold(Integrator::default(), |mut integrator, (time_delta, mean_power)| {
                integrator += Integrator { time_delta, value: mean_power * time_delta };
                integrator
            })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn minutes(minutes: i64) -> TimeDelta {
        TimeDelta::minutes(minutes)
    }

    /// [`TimeDelta`] keys stand in for timestamps: `TimeDelta - TimeDelta = TimeDelta`.
    #[test]
    fn test_constant_power() {
        let series =
            [(minutes(0), Watts(500.0)), (minutes(90), Watts(500.0)), (minutes(120), Watts(500.0))];
        assert_abs_diff_eq!(series.into_iter().integrate().value.0, 1000.0);
    }

    #[test]
    fn test_trapezoid() {
        let series = [(minutes(0), Watts(0.0)), (minutes(60), Watts(1000.0))];
        assert_abs_diff_eq!(series.into_iter().integrate().value.0, 500.0);
    }

    #[test]
    fn test_empty_and_single() {
        assert_abs_diff_eq!(std::iter::empty::<(TimeDelta, Watts)>().integrate().value.0, 0.0);
        assert_abs_diff_eq!([(minutes(0), Watts(1.0))].into_iter().integrate().value.0, 0.0);
    }

    #[test]
    fn test_skips_backward_windows() {
        let series = [
            (minutes(0), Watts(100.0)),
            (minutes(60), Watts(100.0)),
            (minutes(60), Watts(900.0)),
            (minutes(30), Watts(900.0)),
        ];
        let integrator = series.into_iter().integrate();
        assert_eq!(integrator.time_delta, minutes(60));
        assert_abs_diff_eq!(integrator.value.0, 100.0);
    }

    #[test]
    fn test_average() {
        let series = [(minutes(0), Watts(0.0)), (minutes(30), Watts(400.0))];
        assert_abs_diff_eq!(series.into_iter().integrate().average().unwrap().0, 200.0);
        assert!(Integrator::<WattHours>::default().average().is_none());
    }
}
