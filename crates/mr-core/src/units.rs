// mr-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, MassDensity as UomMassDensity,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Density = UomMassDensity;
pub type Length = UomLength;

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::acceleration::meter_per_second_squared;
    use uom::si::length::meter;
    use uom::si::mass_density::kilogram_per_cubic_meter;

    #[test]
    fn constructors_smoke() {
        assert_eq!(mps2(9.81).get::<meter_per_second_squared>(), 9.81);
        assert_eq!(kgpm3(1025.0).get::<kilogram_per_cubic_meter>(), 1025.0);
        assert_eq!(m(350.0).get::<meter>(), 350.0);
    }
}
