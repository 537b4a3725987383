// cb-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Absolute temperature [K] of a Celsius reading.
#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    celsius(t_c).get::<kelvin>()
}

/// Celsius reading of an absolute temperature [K].
#[inline]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    k(t_k).get::<degree_celsius>()
}

/// Absolute pressure [Pa] of a reading in bar.
#[inline]
pub fn bar_to_pa(p_bar: f64) -> f64 {
    use uom::si::pressure::pascal;
    bar(p_bar).get::<pascal>()
}

/// Seconds in one hour, for per-hour ↔ per-second rate conversions.
#[inline]
pub fn seconds_per_hour() -> f64 {
    use uom::si::time::second;
    hours(1.0).get::<second>()
}

pub mod constants {
    /// Universal gas constant [J/(mol·K)] as used by the calculator.
    pub const R_UNIVERSAL: f64 = 8.314;

    /// O2 mole fraction in dry air.
    pub const O2_FRACTION_DRY_AIR: f64 = 0.2095;

    /// Molar mass of dry air [g/mol].
    pub const AIR_MOLAR_MASS_G_PER_MOL: f64 = 28.97;

    /// O2 percentage in dry air used by emission O2-corrections.
    pub const O2_PERCENT_REFERENCE_AIR: f64 = 21.0;

    /// Normal temperature [K] used in mg/Nm³ conversions.
    pub const NORMAL_TEMPERATURE_K: f64 = 273.0;
}
