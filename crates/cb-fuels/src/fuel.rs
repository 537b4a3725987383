//! Fuel records.

use crate::error::{FuelError, FuelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical phase of a fuel as delivered to the burner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelPhase {
    Gas,
    Liquid,
    Solid,
}

impl FuelPhase {
    pub const ALL: [FuelPhase; 3] = [FuelPhase::Gas, FuelPhase::Liquid, FuelPhase::Solid];

    /// Liquids and solids are metered by mass rather than by volume.
    pub fn is_condensed(self) -> bool {
        matches!(self, Self::Liquid | Self::Solid)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gas => "Gas",
            Self::Liquid => "Liquid",
            Self::Solid => "Solid",
        }
    }
}

impl fmt::Display for FuelPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Elemental composition, in moles of each element per mole of substance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Elements {
    pub c: f64,
    pub h: f64,
    pub o: f64,
    pub n: f64,
    pub s: f64,
}

impl Elements {
    /// Moles of O2 needed to fully oxidise one mole (C→CO2, H→H2O, S→SO2),
    /// net of the oxygen already bound in the substance.
    pub fn stoich_o2(&self) -> f64 {
        self.c + self.h / 4.0 + self.s - self.o / 2.0
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            c: self.c * factor,
            h: self.h * factor,
            o: self.o * factor,
            n: self.n * factor,
            s: self.s * factor,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            c: self.c + other.c,
            h: self.h + other.h,
            o: self.o + other.o,
            n: self.n + other.n,
            s: self.s + other.s,
        }
    }

    fn iter(&self) -> [(&'static str, f64); 5] {
        [
            ("C", self.c),
            ("H", self.h),
            ("O", self.o),
            ("N", self.n),
            ("S", self.s),
        ]
    }
}

/// A named fuel with its elemental formula and heating values.
///
/// Field names on the wire follow the fuel data files the catalog is loaded
/// from (`Name`, `Type`, `MolarMass`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    /// Catalog key. Derived from the name when a record omits it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Formula", default)]
    pub formula: String,
    #[serde(rename = "Symbol", default)]
    pub symbol: String,
    #[serde(rename = "Type")]
    pub phase: FuelPhase,
    /// [g/mol]
    #[serde(rename = "MolarMass")]
    pub molar_mass: f64,
    #[serde(rename = "C", default)]
    pub c: f64,
    #[serde(rename = "H", default)]
    pub h: f64,
    #[serde(rename = "O", default)]
    pub o: f64,
    #[serde(rename = "N", default)]
    pub n: f64,
    #[serde(rename = "S", default)]
    pub s: f64,
    /// [wt %]
    #[serde(rename = "AshContent", default)]
    pub ash_content: f64,
    /// [wt %]
    #[serde(rename = "MoistureContent", default)]
    pub moisture_content: f64,
    /// Lower heating value [MJ/kg]
    #[serde(rename = "HeatingValue")]
    pub heating_value: f64,
    /// Higher heating value [MJ/kg]
    #[serde(rename = "HHV", default)]
    pub hhv: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Fuel {
    pub fn elements(&self) -> Elements {
        Elements {
            c: self.c,
            h: self.h,
            o: self.o,
            n: self.n,
            s: self.s,
        }
    }

    /// Mass fraction of the fuel that is neither ash nor moisture.
    pub fn combustible_fraction(&self) -> f64 {
        1.0 - (self.ash_content + self.moisture_content) / 100.0
    }

    /// LHV discounted by the fuel's own moisture content [MJ/kg].
    pub fn effective_lhv(&self) -> f64 {
        self.heating_value * (1.0 - self.moisture_content / 100.0)
    }

    /// Label used in error messages: the id when known, else the name.
    pub fn label(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    /// Check that the record carries usable numeric data.
    pub fn validate(&self) -> FuelResult<()> {
        let invalid = |reason: &'static str| FuelError::InvalidFuel {
            fuel: self.label().to_string(),
            reason,
        };

        if !self.molar_mass.is_finite() || self.molar_mass <= 0.0 {
            return Err(invalid("molar mass must be finite and > 0"));
        }
        for (_, coeff) in self.elements().iter() {
            if !coeff.is_finite() || coeff < 0.0 {
                return Err(invalid("elemental coefficients must be finite and >= 0"));
            }
        }
        for pct in [self.ash_content, self.moisture_content] {
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(invalid("ash and moisture content must lie in [0, 100] wt %"));
            }
        }
        if self.ash_content + self.moisture_content >= 100.0 {
            return Err(invalid("ash plus moisture leaves no combustible matter"));
        }
        for value in [self.heating_value, self.hhv] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid("heating values must be finite and >= 0"));
            }
        }
        Ok(())
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

/// Render a chemical formula with Unicode subscript digits (`C3H8` → `C₃H₈`).
pub fn subscript_symbol(formula: &str) -> String {
    formula
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => char::from_u32(0x2080 + d).unwrap_or(ch),
            None => ch,
        })
        .collect()
}

/// Derive a catalog key from a display name (`"Heavy Fuel Oil"` → `heavy-fuel-oil`).
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn methane() -> Fuel {
        Fuel {
            id: "methane".into(),
            name: "Methane".into(),
            formula: "CH4".into(),
            symbol: "CH₄".into(),
            phase: FuelPhase::Gas,
            molar_mass: 16.04,
            c: 1.0,
            h: 4.0,
            o: 0.0,
            n: 0.0,
            s: 0.0,
            ash_content: 0.0,
            moisture_content: 0.0,
            heating_value: 50.0,
            hhv: 55.5,
            aliases: vec![],
        }
    }

    pub fn hydrogen() -> Fuel {
        Fuel {
            id: "hydrogen".into(),
            name: "Hydrogen".into(),
            formula: "H2".into(),
            symbol: "H₂".into(),
            molar_mass: 2.016,
            c: 0.0,
            h: 2.0,
            heating_value: 120.0,
            hhv: 141.8,
            ..methane()
        }
    }

    pub fn coal() -> Fuel {
        Fuel {
            id: "coal".into(),
            name: "Coal".into(),
            formula: "CH0.8O0.08".into(),
            symbol: String::new(),
            phase: FuelPhase::Solid,
            molar_mass: 14.63,
            c: 1.0,
            h: 0.8,
            o: 0.08,
            n: 0.015,
            s: 0.01,
            ash_content: 8.0,
            moisture_content: 6.0,
            heating_value: 27.0,
            hhv: 28.5,
            aliases: vec![],
        }
    }
}
