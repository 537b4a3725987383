//! Combustion-air composition.

use serde::{Deserialize, Serialize};

/// Mole fractions of the combustion air entering the burner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirComposition {
    pub o2: f64,
    /// N2 with the argon and trace gases lumped in.
    pub n2: f64,
    pub h2o: f64,
}

impl AirComposition {
    pub fn dry(o2_fraction: f64) -> Self {
        Self {
            o2: o2_fraction,
            n2: 1.0 - o2_fraction,
            h2o: 0.0,
        }
    }

    /// Moist air at the given relative humidity [%], temperature [°C] and
    /// absolute pressure [Pa]. The dry part keeps the `o2_fraction` split.
    pub fn humid(o2_fraction: f64, relative_humidity_percent: f64, t_c: f64, p_pa: f64) -> Self {
        let x_w = water_vapour_fraction(relative_humidity_percent, t_c, p_pa);
        let dry = 1.0 - x_w;
        Self {
            o2: o2_fraction * dry,
            n2: (1.0 - o2_fraction) * dry,
            h2o: x_w,
        }
    }
}

/// Saturation pressure of water over a liquid surface [Pa] (Tetens).
pub fn saturation_pressure_pa(t_c: f64) -> f64 {
    610.8 * ((17.27 * t_c) / (t_c + 237.3)).exp()
}

/// Water-vapour mole fraction of air, capped at 1 when the vapour pressure
/// would exceed the total pressure. Process conditions that reach the cap
/// are rejected before any air is composed.
pub fn water_vapour_fraction(relative_humidity_percent: f64, t_c: f64, p_pa: f64) -> f64 {
    let partial = relative_humidity_percent / 100.0 * saturation_pressure_pa(t_c);
    (partial / p_pa).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_air_fractions_sum_to_one() {
        let air = AirComposition::dry(0.2095);
        assert!((air.o2 + air.n2 + air.h2o - 1.0).abs() < 1e-12);
        assert_eq!(air.h2o, 0.0);
    }

    #[test]
    fn saturation_pressure_reference_points() {
        // ~611 Pa at 0 °C, ~3.17 kPa at 25 °C, ~101 kPa at 100 °C
        assert!((saturation_pressure_pa(0.0) - 610.8).abs() < 1e-9);
        assert!((saturation_pressure_pa(25.0) - 3167.0).abs() < 20.0);
        assert!((saturation_pressure_pa(100.0) - 101_325.0).abs() < 1_500.0);
    }

    #[test]
    fn humid_air_dilutes_oxygen() {
        let air = AirComposition::humid(0.2095, 50.0, 25.0, 101_325.0);
        assert!(air.h2o > 0.015 && air.h2o < 0.016);
        assert!(air.o2 < 0.2095);
        assert!((air.o2 + air.n2 + air.h2o - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_humidity_is_dry() {
        assert_eq!(
            AirComposition::humid(0.2095, 0.0, 25.0, 101_325.0),
            AirComposition::dry(0.2095)
        );
    }

    #[test]
    fn vapour_fraction_is_capped() {
        assert_eq!(water_vapour_fraction(100.0, 150.0, 100_000.0), 1.0);
    }
}
