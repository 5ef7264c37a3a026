use chrono::TimeDelta;

quantity!(Hours, "h");

impl Hours {
    /// Non-leap year.
    pub const ONE_YEAR: Self = Self(8760.0);
}

impl From<TimeDelta> for Hours {
    fn from(time_delta: TimeDelta) -> Self {
        Self(time_delta.as_seconds_f64() / 3600.0)
    }
}
