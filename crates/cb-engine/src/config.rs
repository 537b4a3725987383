//! Engine constants.
//!
//! The empirical NOx correlation, the representative product heat capacity and
//! the weekly operating hours are placeholders carried over from the field
//! calculator this engine replaces. They are not derived from combustion
//! literature and need validation against measured emissions data before the
//! numbers are used for anything regulatory. Every one of them can be
//! overridden per case.

use crate::error::{EngineError, EngineResult};
use cb_core::numeric::{ensure_in_range, ensure_positive};
use cb_core::units::constants::{
    AIR_MOLAR_MASS_G_PER_MOL, O2_FRACTION_DRY_AIR, O2_PERCENT_REFERENCE_AIR, R_UNIVERSAL,
};
use cb_fuels::PERCENTAGE_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound for `EngineConfig::o2_fraction_in_air`.
const MAX_O2_FRACTION_IN_AIR: f64 = O2_PERCENT_REFERENCE_AIR / 100.0;

/// What to do with a mixture that combines gaseous and condensed fuels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhasePolicy {
    /// Accept; any liquid or solid fuel makes the mixture mass-metered.
    #[default]
    ClassifyByPresence,
    /// Refuse the mixture as invalid fuel data.
    Reject,
}

/// `NOx = scale · a · exp(b·(T_flame − t_ref)) · (EA% + 1)^c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoxCorrelation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// [K]
    pub t_ref_k: f64,
    /// Multiplier on the whole correlation.
    pub scale: f64,
}

impl Default for NoxCorrelation {
    fn default() -> Self {
        Self {
            a: 1e-5,
            b: 0.0006,
            c: 0.5,
            t_ref_k: 2000.0,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Allowed deviation of the percentage sum from 100.
    pub percentage_tolerance: f64,
    /// [J/(mol·K)]
    pub gas_constant: f64,
    /// O2 mole fraction of dry air.
    pub o2_fraction_in_air: f64,
    /// [g/mol]
    pub air_molar_mass: f64,
    /// Representative heat capacity of the product gas [J/(mol·K)].
    pub product_cp: f64,
    pub nox: NoxCorrelation,
    /// ppm → mg/Nm³ factor for NOx expressed as NO2.
    pub nox_mg_per_nm3_per_ppm: f64,
    /// Number of (O2, CO2) readings a cost analysis must supply.
    pub cost_points: usize,
    /// Operating hours per week used for the cost projection.
    pub hours_per_week: f64,
    pub phase_policy: PhasePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            percentage_tolerance: PERCENTAGE_TOLERANCE,
            gas_constant: R_UNIVERSAL,
            o2_fraction_in_air: O2_FRACTION_DRY_AIR,
            air_molar_mass: AIR_MOLAR_MASS_G_PER_MOL,
            product_cp: 37.0,
            nox: NoxCorrelation::default(),
            nox_mg_per_nm3_per_ppm: 2.0536,
            cost_points: 10,
            hours_per_week: 40.0,
            phase_policy: PhasePolicy::ClassifyByPresence,
        }
    }
}

impl EngineConfig {
    /// Check that overridden constants are usable.
    pub fn validate(&self) -> EngineResult<()> {
        let checks = [
            ensure_positive(self.percentage_tolerance, "engine.percentage_tolerance"),
            ensure_positive(self.gas_constant, "engine.gas_constant"),
            ensure_positive(self.o2_fraction_in_air, "engine.o2_fraction_in_air"),
            ensure_positive(self.air_molar_mass, "engine.air_molar_mass"),
            ensure_positive(self.product_cp, "engine.product_cp"),
            ensure_in_range(self.nox.a, 0.0, 1.0, "engine.nox.a", "[0, 1]"),
            ensure_in_range(self.nox.b, -1.0, 1.0, "engine.nox.b", "[-1, 1]"),
            ensure_in_range(self.nox.c, 0.0, 10.0, "engine.nox.c", "[0, 10]"),
            ensure_positive(self.nox.t_ref_k, "engine.nox.t_ref_k"),
            ensure_in_range(self.nox.scale, 0.0, 1e6, "engine.nox.scale", "[0, 1e6]"),
            ensure_positive(self.nox_mg_per_nm3_per_ppm, "engine.nox_mg_per_nm3_per_ppm"),
            ensure_in_range(self.hours_per_week, 0.0, 168.0, "engine.hours_per_week", "[0, 168]"),
        ];
        for check in checks {
            check.map_err(EngineError::from_input)?;
        }
        // Dry flue O2 must stay below the 21 % of the O2 reference correction.
        if self.o2_fraction_in_air >= MAX_O2_FRACTION_IN_AIR {
            return Err(EngineError::conditions(
                "engine.o2_fraction_in_air",
                format!("must be below {MAX_O2_FRACTION_IN_AIR}"),
            ));
        }
        if self.cost_points < 2 {
            return Err(EngineError::conditions(
                "engine.cost_points",
                "a cost sweep needs at least 2 points",
            ));
        }
        Ok(())
    }

    /// N2 (plus argon) mole fraction of dry air.
    pub fn n2_fraction_in_air(&self) -> f64 {
        1.0 - self.o2_fraction_in_air
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();
        assert_eq!(config.o2_fraction_in_air, 0.2095);
        assert_eq!(config.cost_points, 10);
        assert_eq!(config.hours_per_week, 40.0);
        assert!((config.n2_fraction_in_air() - 0.7905).abs() < 1e-12);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: EngineConfig =
            serde_yaml::from_str("hours_per_week: 80\nnox:\n  a: 2.0e-5\nphase_policy: reject\n")
                .unwrap();
        assert_eq!(config.hours_per_week, 80.0);
        assert_eq!(config.nox.a, 2.0e-5);
        assert_eq!(config.nox.b, 0.0006);
        assert_eq!(config.phase_policy, PhasePolicy::Reject);
        assert_eq!(config.product_cp, 37.0);
    }

    #[test]
    fn rejects_bad_overrides() {
        let config = EngineConfig {
            o2_fraction_in_air: 0.0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidProcessConditions {
                field: "engine.o2_fraction_in_air",
                ..
            })
        ));

        let config = EngineConfig {
            cost_points: 1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            hours_per_week: 200.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            nox: NoxCorrelation {
                scale: -1.0,
                ..NoxCorrelation::default()
            },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oxygen_enriched_air_is_rejected() {
        for o2 in [0.21, 0.3, 1.0] {
            let config = EngineConfig {
                o2_fraction_in_air: o2,
                ..EngineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(EngineError::InvalidProcessConditions {
                    field: "engine.o2_fraction_in_air",
                    ..
                })
            ));
        }
        let config = EngineConfig {
            o2_fraction_in_air: 0.2099,
            ..EngineConfig::default()
        };
        config.validate().unwrap();
    }
}
