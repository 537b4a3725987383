//! Combustion calculation output.

use crate::air::AirComposition;
use cb_fuels::FlowMode;
use serde::{Deserialize, Serialize};

/// Molar flow of each product species [mol/s].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFlows {
    pub co2: f64,
    pub h2o: f64,
    pub so2: f64,
    pub co: f64,
    /// Unburned hydrogen
    pub h2: f64,
    /// Excess oxygen
    pub o2: f64,
    pub n2: f64,
    pub nox: f64,
    pub ash: f64,
}

impl ProductFlows {
    /// (label, value) pairs in reporting order.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("CO2", self.co2),
            ("H2O", self.h2o),
            ("SO2", self.so2),
            ("CO", self.co),
            ("H2", self.h2),
            ("O2", self.o2),
            ("N2", self.n2),
            ("NOx", self.nox),
            ("Ash", self.ash),
        ]
    }

    /// Wet-basis total including NOx.
    pub fn total_wet(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }

    /// Dry-basis total (wet total less water).
    pub fn total_dry(&self) -> f64 {
        self.total_wet() - self.h2o
    }

    /// Percentages of `total`; water is dropped when `include_water` is false.
    pub(crate) fn percentages(&self, total: f64, include_water: bool) -> VolumePercentages {
        let pct = |v: f64| v / total * 100.0;
        VolumePercentages {
            co2: pct(self.co2),
            h2o: if include_water { pct(self.h2o) } else { 0.0 },
            so2: pct(self.so2),
            co: pct(self.co),
            h2: pct(self.h2),
            o2: pct(self.o2),
            n2: pct(self.n2),
            nox: pct(self.nox),
            ash: pct(self.ash),
        }
    }
}

/// Volume (mole) percentages of the product gas. On a dry basis `h2o` is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumePercentages {
    pub co2: f64,
    pub h2o: f64,
    pub so2: f64,
    pub co: f64,
    pub h2: f64,
    pub o2: f64,
    pub n2: f64,
    pub nox: f64,
    pub ash: f64,
}

impl VolumePercentages {
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("CO2", self.co2),
            ("H2O", self.h2o),
            ("SO2", self.so2),
            ("CO", self.co),
            ("H2", self.h2),
            ("O2", self.o2),
            ("N2", self.n2),
            ("NOx", self.nox),
            ("Ash", self.ash),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Emissions {
    pub nox_ppm: f64,
    /// NOx as NO2 at normal conditions [mg/Nm³]
    pub nox_normalized: f64,
    /// NOx at the actual flue-gas temperature [mg/m³]
    pub nox_flue_gas_temp: f64,
    pub nox_corrected_o2_normalized: f64,
    pub nox_corrected_o2_actual: f64,
    pub sox_ppm: f64,
    pub co_ppm: f64,
    /// Dry-basis O2 the corrections were computed against [%]
    pub measured_dry_o2_percent: f64,
    pub reference_o2_percent: f64,
}

/// One row of the cost sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub flow_rate: f64,
    pub measured_o2_percent: f64,
    pub measured_co2_percent: f64,
    /// Excess air implied by the O2 reading; absent at or above ambient O2.
    pub estimated_excess_air_percent: Option<f64>,
    /// [mol/s]
    pub fuel_molar_flow: f64,
    /// Dry CO2 of stoichiometric combustion at this flow [%]
    pub stoich_co2_percent: f64,
    pub efficiency_percent: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisResult {
    pub points: Vec<CostPoint>,
    pub flow_unit: String,
    pub hours_per_week: f64,
    /// Σ point cost × weekly operating hours.
    pub projected_weekly_savings: f64,
    /// Index of the highest-efficiency point.
    pub best_point: usize,
}

/// Complete mass/mole balance of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombustionResult {
    pub flow_mode: FlowMode,
    /// [g/mol]
    pub average_molar_mass: f64,
    /// Moisture-discounted, weight-averaged LHV [MJ/kg]
    pub lhv: f64,
    /// [MJ/kg]
    pub hhv: f64,
    /// Mole fraction of combustible matter per mixture component.
    pub mole_fractions: Vec<f64>,
    /// [mol O2 / mol fuel]
    pub o2_demand: f64,
    /// [mol air / mol fuel]
    pub stoich_air: f64,
    pub air_composition: AirComposition,
    /// [mol/s]
    pub fuel_molar_flow: f64,
    /// [mol/s]
    pub air_molar_flow: f64,
    /// Air flow in `air_flow_unit` (m³/h or kg/h).
    pub air_flow_rate: f64,
    pub air_flow_unit: String,
    /// [%]
    pub combustion_efficiency: f64,
    /// [mol/s]
    pub unburned_fuel_flow: f64,
    /// [W]
    pub heat_release: f64,
    /// [K]
    pub flame_temperature_k: f64,
    /// [kg/m³]
    pub fuel_gas_density: f64,
    pub products: ProductFlows,
    pub wet_basis: VolumePercentages,
    pub dry_basis: VolumePercentages,
    pub emissions: Emissions,
    /// Dry CO2 of stoichiometric combustion [%]
    pub stoich_co2_dry_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_analysis: Option<CostAnalysisResult>,
}

impl CombustionResult {
    /// Name of the first non-finite scalar, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let scalars = [
            ("average_molar_mass", self.average_molar_mass),
            ("lhv", self.lhv),
            ("hhv", self.hhv),
            ("o2_demand", self.o2_demand),
            ("stoich_air", self.stoich_air),
            ("fuel_molar_flow", self.fuel_molar_flow),
            ("air_molar_flow", self.air_molar_flow),
            ("air_flow_rate", self.air_flow_rate),
            ("combustion_efficiency", self.combustion_efficiency),
            ("unburned_fuel_flow", self.unburned_fuel_flow),
            ("heat_release", self.heat_release),
            ("flame_temperature_k", self.flame_temperature_k),
            ("fuel_gas_density", self.fuel_gas_density),
            ("stoich_co2_dry_percent", self.stoich_co2_dry_percent),
            ("emissions.nox_ppm", self.emissions.nox_ppm),
            ("emissions.nox_normalized", self.emissions.nox_normalized),
            ("emissions.nox_flue_gas_temp", self.emissions.nox_flue_gas_temp),
            (
                "emissions.nox_corrected_o2_normalized",
                self.emissions.nox_corrected_o2_normalized,
            ),
            (
                "emissions.nox_corrected_o2_actual",
                self.emissions.nox_corrected_o2_actual,
            ),
            ("emissions.sox_ppm", self.emissions.sox_ppm),
            ("emissions.co_ppm", self.emissions.co_ppm),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Some(*name);
        }
        if self.mole_fractions.iter().any(|x| !x.is_finite()) {
            return Some("mole_fractions");
        }
        if self.products.entries().iter().any(|(_, v)| !v.is_finite()) {
            return Some("products");
        }
        if self.wet_basis.entries().iter().any(|(_, v)| !v.is_finite()) {
            return Some("wet_basis");
        }
        if self.dry_basis.entries().iter().any(|(_, v)| !v.is_finite()) {
            return Some("dry_basis");
        }
        if let Some(cost) = &self.cost_analysis {
            let bad_point = cost.points.iter().any(|p| {
                [
                    p.flow_rate,
                    p.fuel_molar_flow,
                    p.stoich_co2_percent,
                    p.efficiency_percent,
                    p.cost,
                ]
                .iter()
                .any(|v| !v.is_finite())
                    || p.estimated_excess_air_percent.is_some_and(|v| !v.is_finite())
            });
            if bad_point || !cost.projected_weekly_savings.is_finite() {
                return Some("cost_analysis");
            }
        }
        None
    }
}
