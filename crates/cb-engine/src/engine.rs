//! The combustion calculation.

use crate::air::AirComposition;
use crate::config::{EngineConfig, PhasePolicy};
use crate::conditions::ProcessConditions;
use crate::cost;
use crate::emissions;
use crate::error::{EngineError, EngineResult};
use crate::result::{CombustionResult, Emissions, ProductFlows};
use cb_core::numeric::checked_ratio;
use cb_core::units::{bar_to_pa, seconds_per_hour};
use cb_fuels::{Elements, FlowMode, FuelError, Mixture};
use tracing::{debug, warn};

/// Mixture-level quantities shared by the main balance and the cost sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FuelBasis {
    pub flow_mode: FlowMode,
    /// [g/mol]
    pub molar_mass: f64,
    /// Mole-fraction-weighted elements per mole of fuel.
    pub elements: Elements,
    /// [mol air / mol fuel]
    pub air_per_mol_fuel: f64,
    pub air: AirComposition,
    /// [Pa]
    pub pressure_pa: f64,
    /// [K]
    pub fuel_temperature_k: f64,
    pub gas_constant: f64,
}

impl FuelBasis {
    /// Fuel molar flow [mol/s] for a flow rate in m³/h or kg/h.
    pub fn fuel_molar_flow(&self, flow_rate: f64) -> f64 {
        let per_second = flow_rate / seconds_per_hour();
        match self.flow_mode {
            FlowMode::Mass => per_second / (self.molar_mass / 1000.0),
            FlowMode::Volumetric => {
                self.pressure_pa * per_second / (self.gas_constant * self.fuel_temperature_k)
            }
        }
    }

    /// Dry CO2 [%] of stoichiometric flue gas for `n_fuel` mol/s of fuel.
    /// Zero when the dry flue gas would be empty.
    pub fn stoich_co2_dry_percent(&self, n_fuel: f64) -> f64 {
        let co2 = n_fuel * self.elements.c;
        let so2 = n_fuel * self.elements.s;
        let n2 = n_fuel * self.air_per_mol_fuel * self.air.n2 + n_fuel * self.elements.n;
        let dry = co2 + so2 + n2;
        if dry > 0.0 { co2 / dry * 100.0 } else { 0.0 }
    }
}

/// Runs combustion balances against one set of engine constants.
#[derive(Debug, Clone, Default)]
pub struct CombustionEngine {
    config: EngineConfig,
}

impl CombustionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the full mass/mole balance for `mixture` at `conditions`.
    ///
    /// All inputs are checked before any arithmetic. On error nothing is
    /// returned besides the error.
    pub fn compute(
        &self,
        mixture: &Mixture,
        conditions: &ProcessConditions,
    ) -> EngineResult<CombustionResult> {
        let config = &self.config;
        config.validate()?;
        self.check_mixture(mixture)?;
        conditions.validate(config)?;

        let flow_mode = mixture.flow_mode();
        let molar_mass = mixture.average_molar_mass();
        let lhv = mixture.weighted_lhv();
        let hhv = mixture.weighted_hhv();
        let mole_fractions = mixture.mole_fractions()?;
        let elements = mixture.mean_elements()?;

        let o2_demand = elements.stoich_o2();
        if !(o2_demand > 0.0) {
            return Err(EngineError::InvalidFuelComposition { o2_demand });
        }

        let pressure_pa = bar_to_pa(conditions.pressure_bar);
        let fuel_temperature_k = conditions.fuel_temperature_k();
        let air = match conditions.relative_humidity_percent {
            Some(rh) => AirComposition::humid(
                config.o2_fraction_in_air,
                rh,
                conditions.inlet_air_temperature_c,
                pressure_pa,
            ),
            None => AirComposition::dry(config.o2_fraction_in_air),
        };
        let air_per_mol_fuel = checked_ratio(o2_demand, air.o2, "stoichiometric air per mole of fuel")
            .map_err(EngineError::degenerate)?;

        let basis = FuelBasis {
            flow_mode,
            molar_mass,
            elements,
            air_per_mol_fuel,
            air,
            pressure_pa,
            fuel_temperature_k,
            gas_constant: config.gas_constant,
        };

        let excess_air = conditions.excess_air_percent;
        let n_fuel = basis.fuel_molar_flow(conditions.fuel_flow_rate);
        let n_air = n_fuel * air_per_mol_fuel * (1.0 + excess_air / 100.0);
        let air_flow_rate = match flow_mode {
            FlowMode::Volumetric => {
                n_air * config.gas_constant * conditions.inlet_air_temperature_k() / pressure_pa
                    * seconds_per_hour()
            }
            FlowMode::Mass => n_air * config.air_molar_mass / 1000.0 * seconds_per_hour(),
        };
        debug!(
            %flow_mode,
            molar_mass,
            o2_demand,
            n_fuel,
            n_air,
            "fuel and air flows"
        );

        let efficiency = if excess_air >= 0.0 {
            100.0
        } else {
            (100.0 + excess_air).max(0.0)
        };
        let n_combusted = n_fuel * efficiency / 100.0;
        let n_unburned = n_fuel - n_combusted;
        let burned = elements.scaled(n_combusted);

        let mut products = ProductFlows {
            co2: burned.c,
            h2o: burned.h / 2.0 + n_air * air.h2o,
            so2: burned.s,
            co: elements.c * n_unburned,
            h2: elements.h * n_unburned / 2.0,
            o2: (n_air * air.o2 - n_combusted * o2_demand).max(0.0),
            n2: n_air * air.n2 + burned.n,
            nox: 0.0,
            ash: n_fuel * mixture.ash_percent() / 100.0,
        };

        let heat_release = n_combusted * (lhv * molar_mass / 1000.0) * 1e6;
        let temperature_rise = checked_ratio(
            heat_release,
            products.total_wet() * config.product_cp,
            "product heat capacity flow",
        )
        .map_err(EngineError::degenerate)?;
        let flame_temperature_k = fuel_temperature_k + temperature_rise;

        let nox_ppm = emissions::nox_ppm(&config.nox, flame_temperature_k, excess_air);
        products.nox = products.n2 * nox_ppm / 1e6;
        products.n2 -= products.nox;
        debug!(
            efficiency,
            heat_release,
            flame_temperature_k,
            nox_ppm,
            "combustion products"
        );

        let wet_total = products.total_wet();
        let dry_total = products.total_dry();
        if !(wet_total > 0.0) {
            return Err(EngineError::ComputationDegenerate {
                what: "wet product total",
            });
        }
        if !(dry_total > 0.0) {
            return Err(EngineError::ComputationDegenerate {
                what: "dry product total",
            });
        }
        let wet_basis = products.percentages(wet_total, true);
        let dry_basis = products.percentages(dry_total, false);

        let sox_ppm = products.so2 / wet_total * 1e6;
        let co_ppm = if efficiency >= 100.0 {
            0.0
        } else {
            products.co / wet_total * 1e6
        };

        let nox_normalized = emissions::ppm_to_mg_per_nm3(nox_ppm, config.nox_mg_per_nm3_per_ppm);
        let nox_flue_gas_temp =
            emissions::at_flue_gas_temperature(nox_normalized, conditions.flue_gas_temperature_c)
                .map_err(EngineError::degenerate)?;
        let o2_factor =
            emissions::o2_correction_factor(conditions.reference_o2_percent, dry_basis.o2)
                .map_err(EngineError::degenerate)?;
        let emissions = Emissions {
            nox_ppm,
            nox_normalized,
            nox_flue_gas_temp,
            nox_corrected_o2_normalized: nox_normalized * o2_factor,
            nox_corrected_o2_actual: nox_flue_gas_temp * o2_factor,
            sox_ppm,
            co_ppm,
            measured_dry_o2_percent: dry_basis.o2,
            reference_o2_percent: conditions.reference_o2_percent,
        };

        let fuel_gas_density = pressure_pa * (molar_mass / 1000.0)
            / (config.gas_constant * fuel_temperature_k);

        let cost_analysis = conditions
            .cost_analysis
            .as_ref()
            .map(|input| cost::analyse(&basis, input, config))
            .transpose()?;

        let result = CombustionResult {
            flow_mode,
            average_molar_mass: molar_mass,
            lhv,
            hhv,
            mole_fractions,
            o2_demand,
            stoich_air: air_per_mol_fuel,
            air_composition: air,
            fuel_molar_flow: n_fuel,
            air_molar_flow: n_air,
            air_flow_rate,
            air_flow_unit: flow_mode.unit_label().to_string(),
            combustion_efficiency: efficiency,
            unburned_fuel_flow: n_unburned,
            heat_release,
            flame_temperature_k,
            fuel_gas_density,
            products,
            wet_basis,
            dry_basis,
            emissions,
            stoich_co2_dry_percent: basis.stoich_co2_dry_percent(n_fuel),
            cost_analysis,
        };

        if let Some(what) = result.first_non_finite() {
            return Err(EngineError::ComputationDegenerate { what });
        }
        Ok(result)
    }

    fn check_mixture(&self, mixture: &Mixture) -> EngineResult<()> {
        let mixed = mixture.has_mixed_phases();
        if mixed && self.config.phase_policy == PhasePolicy::Reject {
            return Err(FuelError::MixedPhases.into());
        }
        mixture.validate(self.config.percentage_tolerance)?;
        if mixed {
            warn!(
                components = mixture.len(),
                "gaseous and condensed fuels mixed; metering the whole mixture by mass"
            );
        }
        Ok(())
    }
}

/// Compute with the default engine constants.
pub fn compute(mixture: &Mixture, conditions: &ProcessConditions) -> EngineResult<CombustionResult> {
    CombustionEngine::default().compute(mixture, conditions)
}

pub fn compute_with_config(
    mixture: &Mixture,
    conditions: &ProcessConditions,
    config: &EngineConfig,
) -> EngineResult<CombustionResult> {
    CombustionEngine::new(config.clone()).compute(mixture, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::test_support::cost_input;
    use cb_core::numeric::{Tolerances, nearly_equal};
    use cb_fuels::FuelCatalog;

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-9,
            rel: 1e-9,
        }
    }

    fn fuel(id: &str) -> cb_fuels::Fuel {
        FuelCatalog::builtin().require(id).unwrap().clone()
    }

    #[test]
    fn methane_basis_numbers() {
        let result = compute(&Mixture::pure(fuel("methane")), &ProcessConditions::default()).unwrap();
        assert!(nearly_equal(result.o2_demand, 2.0, tol()));
        assert!(nearly_equal(result.stoich_air, 2.0 / 0.2095, tol()));

        let expected_n_fuel = 101_300.0 * (10.0 / 3600.0) / (8.314 * 298.15);
        assert!(nearly_equal(result.fuel_molar_flow, expected_n_fuel, tol()));
        assert!(nearly_equal(
            result.air_molar_flow,
            expected_n_fuel * 2.0 / 0.2095 * 1.1,
            tol()
        ));
        assert_eq!(result.air_flow_unit, "m³/h");
    }

    #[test]
    fn air_flow_volume_at_inlet_temperature() {
        let conditions = ProcessConditions {
            fuel_temperature_c: 25.0,
            inlet_air_temperature_c: 25.0,
            excess_air_percent: 0.0,
            ..ProcessConditions::default()
        };
        let result = compute(&Mixture::pure(fuel("methane")), &conditions).unwrap();
        // Same T and P for fuel and air: volumes scale with moles.
        assert!(nearly_equal(result.air_flow_rate, 10.0 * 2.0 / 0.2095, tol()));
    }

    #[test]
    fn mass_mode_air_flow_in_kg_per_hour() {
        let result = compute(&Mixture::pure(fuel("diesel")), &ProcessConditions::default()).unwrap();
        assert_eq!(result.flow_mode, FlowMode::Mass);
        assert_eq!(result.air_flow_unit, "kg/h");
        assert!(nearly_equal(
            result.air_flow_rate,
            result.air_molar_flow * 28.97e-3 * 3600.0,
            tol()
        ));
    }

    #[test]
    fn fuel_gas_density_ideal_gas() {
        let result = compute(&Mixture::pure(fuel("methane")), &ProcessConditions::default()).unwrap();
        let molar_mass = result.average_molar_mass;
        let expected = 101_300.0 * molar_mass / 1000.0 / (8.314 * 298.15);
        assert!(nearly_equal(result.fuel_gas_density, expected, tol()));
    }

    #[test]
    fn humid_air_adds_water_and_air() {
        let dry = compute(&Mixture::pure(fuel("methane")), &ProcessConditions::default()).unwrap();
        let humid = compute(
            &Mixture::pure(fuel("methane")),
            &ProcessConditions {
                relative_humidity_percent: Some(60.0),
                ..ProcessConditions::default()
            },
        )
        .unwrap();
        assert!(humid.air_composition.h2o > 0.0);
        assert!(humid.air_molar_flow > dry.air_molar_flow);
        assert!(humid.products.h2o > dry.products.h2o);
        // Same O2 delivered, so the same excess O2 leaves.
        assert!(nearly_equal(humid.products.o2, dry.products.o2, tol()));
        assert!(humid.flame_temperature_k < dry.flame_temperature_k);
    }

    #[test]
    fn zero_humidity_matches_dry_air() {
        let dry = compute(&Mixture::pure(fuel("methane")), &ProcessConditions::default()).unwrap();
        let zero = compute(
            &Mixture::pure(fuel("methane")),
            &ProcessConditions {
                relative_humidity_percent: Some(0.0),
                ..ProcessConditions::default()
            },
        )
        .unwrap();
        assert_eq!(dry, zero);
    }

    #[test]
    fn hydrogen_has_no_carbon_products() {
        let result = compute(&Mixture::pure(fuel("hydrogen")), &ProcessConditions::default()).unwrap();
        assert_eq!(result.products.co2, 0.0);
        assert_eq!(result.products.co, 0.0);
        assert_eq!(result.stoich_co2_dry_percent, 0.0);
    }

    #[test]
    fn hydrogen_cost_sweep_is_degenerate() {
        let conditions = ProcessConditions {
            cost_analysis: Some(cost_input(10)),
            ..ProcessConditions::default()
        };
        assert!(matches!(
            compute(&Mixture::pure(fuel("hydrogen")), &conditions),
            Err(EngineError::ComputationDegenerate { .. })
        ));
    }

    #[test]
    fn oxygen_only_fuel_has_no_demand() {
        let mut inert = fuel("carbon-monoxide");
        inert.c = 0.0;
        let err = compute(&Mixture::pure(inert), &ProcessConditions::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidFuelComposition { .. }));
    }

    #[test]
    fn negative_heating_value_is_invalid_fuel_data() {
        let mut methane = fuel("methane");
        methane.heating_value = -200.0;
        let err = compute(&Mixture::pure(methane), &ProcessConditions::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidFuelData { .. }));
    }

    #[test]
    fn mixed_phase_policy() {
        let mixture = Mixture::default()
            .with(fuel("natural-gas"), 50.0)
            .with(fuel("bituminous-coal"), 50.0);

        let result = compute(&mixture, &ProcessConditions::default()).unwrap();
        assert_eq!(result.flow_mode, FlowMode::Mass);

        let config = EngineConfig {
            phase_policy: PhasePolicy::Reject,
            ..EngineConfig::default()
        };
        assert!(matches!(
            compute_with_config(&mixture, &ProcessConditions::default(), &config),
            Err(EngineError::InvalidFuelData { .. })
        ));
    }

    #[test]
    fn invalid_config_is_reported_as_conditions() {
        let config = EngineConfig {
            product_cp: 0.0,
            ..EngineConfig::default()
        };
        let err = compute_with_config(
            &Mixture::pure(fuel("methane")),
            &ProcessConditions::default(),
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidProcessConditions {
                field: "engine.product_cp",
                ..
            }
        ));
    }

    #[test]
    fn fuel_errors_precede_condition_errors() {
        let mut broken = fuel("methane");
        broken.molar_mass = 0.0;
        let conditions = ProcessConditions {
            fuel_flow_rate: -1.0,
            ..ProcessConditions::default()
        };
        assert!(matches!(
            compute(&Mixture::pure(broken), &conditions),
            Err(EngineError::InvalidFuelData { .. })
        ));
    }

    #[test]
    fn fully_starved_burner_is_degenerate_free() {
        let conditions = ProcessConditions {
            excess_air_percent: -100.0,
            ..ProcessConditions::default()
        };
        let result = compute(&Mixture::pure(fuel("methane")), &conditions).unwrap();
        assert_eq!(result.combustion_efficiency, 0.0);
        assert_eq!(result.air_molar_flow, 0.0);
        assert_eq!(result.heat_release, 0.0);
        assert!(nearly_equal(result.unburned_fuel_flow, result.fuel_molar_flow, tol()));
        assert_eq!(result.emissions.nox_ppm, 0.0);
    }
}
