quantity!(MetersPerSecond, "m/s");

impl MetersPerSecond {
    #[must_use]
    pub fn cubed(self) -> f64 {
        self.0.powi(3)
    }
}
