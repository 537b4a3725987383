//! Fuel mixtures defined by weight percentages.

use crate::error::{FuelError, FuelResult};
use crate::fuel::{Elements, Fuel, FuelPhase};
use cb_core::numeric::ensure_finite;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed deviation of the percentage sum from 100.
pub const PERCENTAGE_TOLERANCE: f64 = 0.01;

/// How the fuel flow rate of a mixture is metered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowMode {
    /// Volumetric flow [m³/h], converted with the ideal-gas law.
    Volumetric,
    /// Mass flow [kg/h].
    Mass,
}

impl FlowMode {
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::Volumetric => "m³/h",
            Self::Mass => "kg/h",
        }
    }
}

impl fmt::Display for FlowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volumetric => write!(f, "Volumetric ({})", self.unit_label()),
            Self::Mass => write!(f, "Mass ({})", self.unit_label()),
        }
    }
}

/// One fuel and its weight percentage in a mixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixtureComponent {
    pub fuel: Fuel,
    /// [wt %]
    pub percentage: f64,
}

impl MixtureComponent {
    pub fn new(fuel: Fuel, percentage: f64) -> Self {
        Self { fuel, percentage }
    }

    pub fn weight_fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Ordered list of fuels with weight percentages.
///
/// Construction does not validate: a mixture is plain request data and is
/// checked with [`Mixture::validate`] before any arithmetic is done on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mixture {
    components: Vec<MixtureComponent>,
}

impl Mixture {
    pub fn new(components: Vec<MixtureComponent>) -> Self {
        Self { components }
    }

    /// Single fuel at 100 %.
    pub fn pure(fuel: Fuel) -> Self {
        Self::new(vec![MixtureComponent::new(fuel, 100.0)])
    }

    /// Builder-style append.
    pub fn with(mut self, fuel: Fuel, percentage: f64) -> Self {
        self.components.push(MixtureComponent::new(fuel, percentage));
        self
    }

    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &MixtureComponent> + '_ {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn percentage_sum(&self) -> f64 {
        self.components.iter().map(|c| c.percentage).sum()
    }

    /// Validate fuel records, per-component percentages, and the total.
    ///
    /// Fuel data is checked before the percentage balance, so a mixture with
    /// both problems reports the bad fuel.
    pub fn validate(&self, tolerance: f64) -> FuelResult<()> {
        if self.components.is_empty() {
            return Err(FuelError::EmptyMixture);
        }

        for component in &self.components {
            component.fuel.validate()?;
            let pct = component.percentage;
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(FuelError::InvalidPercentage {
                    fuel: component.fuel.label().to_string(),
                    percentage: pct,
                });
            }
        }

        let sum = self.percentage_sum();
        if (sum - 100.0).abs() > tolerance {
            return Err(FuelError::Imbalance { sum, tolerance });
        }
        Ok(())
    }

    pub fn contains_phase(&self, phase: FuelPhase) -> bool {
        self.components.iter().any(|c| c.fuel.phase == phase)
    }

    /// True when gaseous and condensed-phase fuels are combined.
    pub fn has_mixed_phases(&self) -> bool {
        let gas = self.contains_phase(FuelPhase::Gas);
        let condensed = self.components.iter().any(|c| c.fuel.phase.is_condensed());
        gas && condensed
    }

    /// Any liquid or solid fuel makes the whole mixture mass-metered.
    pub fn flow_mode(&self) -> FlowMode {
        if self.components.iter().any(|c| c.fuel.phase.is_condensed()) {
            FlowMode::Mass
        } else {
            FlowMode::Volumetric
        }
    }

    /// Weight-averaged molar mass [g/mol].
    pub fn average_molar_mass(&self) -> f64 {
        self.weighted(|fuel| fuel.molar_mass)
    }

    /// Weight-averaged LHV after each fuel's moisture discount [MJ/kg].
    pub fn weighted_lhv(&self) -> f64 {
        self.weighted(Fuel::effective_lhv)
    }

    /// Weight-averaged HHV [MJ/kg].
    pub fn weighted_hhv(&self) -> f64 {
        self.weighted(|fuel| fuel.hhv)
    }

    /// Weight-averaged ash content [wt %].
    pub fn ash_percent(&self) -> f64 {
        self.weighted(|fuel| fuel.ash_content)
    }

    fn weighted(&self, property: impl Fn(&Fuel) -> f64) -> f64 {
        self.components
            .iter()
            .map(|c| c.weight_fraction() * property(&c.fuel))
            .sum()
    }

    /// Mole fractions of combustible matter, one per component.
    ///
    /// Weight fractions are first reduced by each fuel's ash and moisture,
    /// converted to moles per kg of mixture, then normalized to sum=1.
    pub fn mole_fractions(&self) -> FuelResult<Vec<f64>> {
        let moles_per_kg: Vec<f64> = self
            .components
            .iter()
            .map(|c| c.weight_fraction() * c.fuel.combustible_fraction() * 1000.0 / c.fuel.molar_mass)
            .collect();

        let total: f64 = moles_per_kg.iter().sum();
        let total = ensure_finite(total, "moles of combustible matter per kg")?;
        if total <= 0.0 {
            return Err(FuelError::NonPhysical {
                what: "moles of combustible matter per kg",
            });
        }

        Ok(moles_per_kg.into_iter().map(|m| m / total).collect())
    }

    /// Mole-fraction-weighted elemental composition per mole of mixture.
    pub fn mean_elements(&self) -> FuelResult<Elements> {
        let fractions = self.mole_fractions()?;
        Ok(self
            .components
            .iter()
            .zip(fractions)
            .fold(Elements::default(), |acc, (c, x)| {
                acc.add(&c.fuel.elements().scaled(x))
            }))
    }
}
