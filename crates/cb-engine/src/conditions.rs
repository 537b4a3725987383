//! Process conditions for a combustion calculation.

use crate::air::water_vapour_fraction;
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use cb_core::numeric::{ensure_finite, ensure_in_range, ensure_positive};
use cb_core::units::{bar_to_pa, celsius_to_kelvin};
use serde::{Deserialize, Serialize};

/// One flue-gas analyser reading taken during a cost sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombustionReading {
    /// Measured O2 [vol %, dry]
    pub o2_percent: f64,
    /// Measured CO2 [vol %, dry]
    pub co2_percent: f64,
}

/// Inputs for the optional fuel-cost sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisInput {
    /// Cost per unit of fuel flow (per m³ or per kg, following the mixture's flow mode).
    pub fuel_unit_cost: f64,
    pub min_flow_rate: f64,
    pub max_flow_rate: f64,
    /// One reading per sweep point, ordered from min to max flow.
    pub readings: Vec<CombustionReading>,
}

/// Operating point of the burner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConditions {
    /// Fuel (and ambient) temperature [°C]
    pub fuel_temperature_c: f64,
    /// Combustion-air temperature at the burner inlet [°C]
    pub inlet_air_temperature_c: f64,
    /// Absolute pressure [bar]
    pub pressure_bar: f64,
    /// Air supplied beyond stoichiometric [%]; negative means air-starved.
    pub excess_air_percent: f64,
    /// [°C]
    pub flue_gas_temperature_c: f64,
    /// Reference O2 for emission corrections [vol %]
    pub reference_o2_percent: f64,
    /// Fuel flow, m³/h for gas mixtures or kg/h when any fuel is liquid/solid.
    pub fuel_flow_rate: f64,
    /// Relative humidity of the combustion air [%]; dry air when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_analysis: Option<CostAnalysisInput>,
}

impl Default for ProcessConditions {
    fn default() -> Self {
        Self {
            fuel_temperature_c: 25.0,
            inlet_air_temperature_c: 25.0,
            pressure_bar: 1.013,
            excess_air_percent: 10.0,
            flue_gas_temperature_c: 180.0,
            reference_o2_percent: 3.0,
            fuel_flow_rate: 10.0,
            relative_humidity_percent: None,
            cost_analysis: None,
        }
    }
}

impl ProcessConditions {
    pub fn fuel_temperature_k(&self) -> f64 {
        celsius_to_kelvin(self.fuel_temperature_c)
    }

    pub fn inlet_air_temperature_k(&self) -> f64 {
        celsius_to_kelvin(self.inlet_air_temperature_c)
    }

    /// Validate every field; cost-sweep checks use `config.cost_points`.
    pub fn validate(&self, config: &EngineConfig) -> EngineResult<()> {
        self.validate_fields().map_err(EngineError::from_input)?;

        if self.fuel_temperature_k() <= 0.0 {
            return Err(EngineError::conditions(
                "fuel_temperature_c",
                "temperature is at or below absolute zero",
            ));
        }
        if self.inlet_air_temperature_k() <= 0.0 {
            return Err(EngineError::conditions(
                "inlet_air_temperature_c",
                "temperature is at or below absolute zero",
            ));
        }
        if self.flue_gas_temperature_c <= -273.0 {
            return Err(EngineError::conditions(
                "flue_gas_temperature_c",
                "temperature is at or below absolute zero",
            ));
        }

        if let Some(rh) = self.relative_humidity_percent {
            let x_w = water_vapour_fraction(
                rh,
                self.inlet_air_temperature_c,
                bar_to_pa(self.pressure_bar),
            );
            if x_w >= 1.0 {
                return Err(EngineError::conditions(
                    "relative_humidity_percent",
                    "water vapour pressure of the inlet air reaches the total pressure",
                ));
            }
        }

        if let Some(cost) = &self.cost_analysis {
            cost.validate(config.cost_points)?;
        }
        Ok(())
    }

    fn validate_fields(&self) -> Result<(), cb_core::CoreError> {
        ensure_finite(self.fuel_temperature_c, "fuel_temperature_c")?;
        ensure_finite(self.inlet_air_temperature_c, "inlet_air_temperature_c")?;
        ensure_positive(self.pressure_bar, "pressure_bar")?;
        // Below -100 % the air flow itself would turn negative.
        ensure_in_range(
            self.excess_air_percent,
            -100.0,
            f64::MAX,
            "excess_air_percent",
            ">= -100",
        )?;
        ensure_finite(self.flue_gas_temperature_c, "flue_gas_temperature_c")?;
        ensure_in_range(
            self.reference_o2_percent,
            0.0,
            20.9,
            "reference_o2_percent",
            "[0, 20.9]",
        )?;
        ensure_positive(self.fuel_flow_rate, "fuel_flow_rate")?;
        if let Some(rh) = self.relative_humidity_percent {
            ensure_in_range(rh, 0.0, 100.0, "relative_humidity_percent", "[0, 100]")?;
        }
        Ok(())
    }
}

impl CostAnalysisInput {
    pub fn validate(&self, expected_points: usize) -> EngineResult<()> {
        let fuel_unit_cost = ensure_finite(self.fuel_unit_cost, "cost_analysis.fuel_unit_cost")
            .map_err(EngineError::from_input)?;
        if fuel_unit_cost < 0.0 {
            return Err(EngineError::conditions(
                "cost_analysis.fuel_unit_cost",
                "fuel cost must be >= 0",
            ));
        }

        let min = ensure_positive(self.min_flow_rate, "cost_analysis.min_flow_rate")
            .map_err(EngineError::from_input)?;
        let max = ensure_positive(self.max_flow_rate, "cost_analysis.max_flow_rate")
            .map_err(EngineError::from_input)?;
        if min >= max {
            return Err(EngineError::conditions(
                "cost_analysis.max_flow_rate",
                format!("max flow rate {max} must exceed min flow rate {min}"),
            ));
        }

        if self.readings.len() != expected_points {
            return Err(EngineError::conditions(
                "cost_analysis.readings",
                format!(
                    "expected exactly {expected_points} readings, got {}",
                    self.readings.len()
                ),
            ));
        }
        for reading in &self.readings {
            ensure_in_range(
                reading.o2_percent,
                0.0,
                100.0,
                "cost_analysis.readings.o2_percent",
                "[0, 100]",
            )
            .map_err(EngineError::from_input)?;
            ensure_in_range(
                reading.co2_percent,
                0.0,
                100.0,
                "cost_analysis.readings.co2_percent",
                "[0, 100]",
            )
            .map_err(EngineError::from_input)?;
        }
        Ok(())
    }
}
