use std::f64::consts::PI;

quantity!(Meters, "m");
quantity!(SquareMeters, "m²");

impl SquareMeters {
    /// Area of the disc swept by a rotor of the given diameter.
    pub fn swept_by(rotor_diameter: Meters) -> Self {
        Self(PI * (rotor_diameter.0 / 2.0).powi(2))
    }
}
