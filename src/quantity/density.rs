quantity!(KilogramsPerCubicMeter, "kg/m³");

impl KilogramsPerCubicMeter {
    /// Sea-level standard atmosphere.
    pub const STANDARD_AIR: Self = Self(1.225);
}
