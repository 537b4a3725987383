//! Fuel catalog: builtin reference fuels, JSON-loaded data files, and
//! user-authored custom fuels.

use crate::error::{FuelError, FuelResult};
use crate::fuel::{Fuel, FuelPhase, slugify, subscript_symbol};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static description of a builtin fuel.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BuiltinFuel {
    id: &'static str,
    name: &'static str,
    formula: &'static str,
    phase: FuelPhase,
    molar_mass: f64,
    c: f64,
    h: f64,
    o: f64,
    n: f64,
    s: f64,
    ash: f64,
    moisture: f64,
    lhv: f64,
    hhv: f64,
    aliases: &'static [&'static str],
}

impl BuiltinFuel {
    fn to_fuel(self) -> Fuel {
        Fuel {
            id: self.id.to_string(),
            name: self.name.to_string(),
            formula: self.formula.to_string(),
            symbol: subscript_symbol(self.formula),
            phase: self.phase,
            molar_mass: self.molar_mass,
            c: self.c,
            h: self.h,
            o: self.o,
            n: self.n,
            s: self.s,
            ash_content: self.ash,
            moisture_content: self.moisture,
            heating_value: self.lhv,
            hhv: self.hhv,
            aliases: self.aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

const GAS: BuiltinFuel = BuiltinFuel {
    id: "",
    name: "",
    formula: "",
    phase: FuelPhase::Gas,
    molar_mass: 0.0,
    c: 0.0,
    h: 0.0,
    o: 0.0,
    n: 0.0,
    s: 0.0,
    ash: 0.0,
    moisture: 0.0,
    lhv: 0.0,
    hhv: 0.0,
    aliases: &[],
};

// Solid fuels are described per "mole" of a carbon-normalized pseudo-molecule.
const BUILTIN_FUELS: [BuiltinFuel; 15] = [
    BuiltinFuel {
        id: "methane",
        name: "Methane",
        formula: "CH4",
        molar_mass: 16.04,
        c: 1.0,
        h: 4.0,
        lhv: 50.0,
        hhv: 55.5,
        aliases: &["ch4"],
        ..GAS
    },
    BuiltinFuel {
        id: "ethane",
        name: "Ethane",
        formula: "C2H6",
        molar_mass: 30.07,
        c: 2.0,
        h: 6.0,
        lhv: 47.5,
        hhv: 51.9,
        aliases: &["c2h6"],
        ..GAS
    },
    BuiltinFuel {
        id: "propane",
        name: "Propane",
        formula: "C3H8",
        molar_mass: 44.10,
        c: 3.0,
        h: 8.0,
        lhv: 46.35,
        hhv: 50.35,
        aliases: &["lpg", "c3h8"],
        ..GAS
    },
    BuiltinFuel {
        id: "n-butane",
        name: "n-Butane",
        formula: "C4H10",
        molar_mass: 58.12,
        c: 4.0,
        h: 10.0,
        lhv: 45.75,
        hhv: 49.5,
        aliases: &["butane"],
        ..GAS
    },
    BuiltinFuel {
        id: "hydrogen",
        name: "Hydrogen",
        formula: "H2",
        molar_mass: 2.016,
        h: 2.0,
        lhv: 120.0,
        hhv: 141.8,
        aliases: &["h2"],
        ..GAS
    },
    BuiltinFuel {
        id: "carbon-monoxide",
        name: "Carbon Monoxide",
        formula: "CO",
        molar_mass: 28.01,
        c: 1.0,
        o: 1.0,
        lhv: 10.1,
        hhv: 10.1,
        aliases: &["co", "syngas"],
        ..GAS
    },
    BuiltinFuel {
        id: "natural-gas",
        name: "Natural Gas",
        formula: "C1.06H4.12N0.02",
        molar_mass: 17.4,
        c: 1.06,
        h: 4.12,
        n: 0.02,
        lhv: 47.1,
        hhv: 52.2,
        aliases: &["ng", "pipeline gas"],
        ..GAS
    },
    BuiltinFuel {
        id: "diesel",
        name: "Diesel",
        formula: "C12H23",
        phase: FuelPhase::Liquid,
        molar_mass: 167.31,
        c: 12.0,
        h: 23.0,
        s: 0.001,
        lhv: 42.8,
        hhv: 45.6,
        aliases: &["gas oil", "fuel oil no. 2"],
        ..GAS
    },
    BuiltinFuel {
        id: "heavy-fuel-oil",
        name: "Heavy Fuel Oil",
        formula: "C20H36S0.2",
        phase: FuelPhase::Liquid,
        molar_mass: 276.5,
        c: 20.0,
        h: 36.0,
        s: 0.2,
        ash: 0.05,
        moisture: 0.5,
        lhv: 40.2,
        hhv: 42.5,
        aliases: &["hfo", "bunker", "fuel oil no. 6"],
        ..GAS
    },
    BuiltinFuel {
        id: "gasoline",
        name: "Gasoline",
        formula: "C8H18",
        phase: FuelPhase::Liquid,
        molar_mass: 114.23,
        c: 8.0,
        h: 18.0,
        lhv: 44.4,
        hhv: 47.3,
        aliases: &["petrol", "octane"],
        ..GAS
    },
    BuiltinFuel {
        id: "methanol",
        name: "Methanol",
        formula: "CH3OH",
        phase: FuelPhase::Liquid,
        molar_mass: 32.04,
        c: 1.0,
        h: 4.0,
        o: 1.0,
        lhv: 19.9,
        hhv: 22.7,
        aliases: &["meoh"],
        ..GAS
    },
    BuiltinFuel {
        id: "ethanol",
        name: "Ethanol",
        formula: "C2H5OH",
        phase: FuelPhase::Liquid,
        molar_mass: 46.07,
        c: 2.0,
        h: 6.0,
        o: 1.0,
        lhv: 26.8,
        hhv: 29.7,
        aliases: &["etoh"],
        ..GAS
    },
    BuiltinFuel {
        id: "bituminous-coal",
        name: "Bituminous Coal",
        formula: "CH0.8O0.08N0.015S0.01",
        phase: FuelPhase::Solid,
        molar_mass: 14.63,
        c: 1.0,
        h: 0.8,
        o: 0.08,
        n: 0.015,
        s: 0.01,
        ash: 8.0,
        moisture: 6.0,
        lhv: 27.0,
        hhv: 28.5,
        aliases: &["coal"],
        ..GAS
    },
    BuiltinFuel {
        id: "wood-pellets",
        name: "Wood Pellets",
        formula: "CH1.44O0.66",
        phase: FuelPhase::Solid,
        molar_mass: 24.02,
        c: 1.0,
        h: 1.44,
        o: 0.66,
        n: 0.002,
        ash: 0.7,
        moisture: 8.0,
        lhv: 17.0,
        hhv: 19.8,
        aliases: &["biomass", "wood"],
        ..GAS
    },
    BuiltinFuel {
        id: "petroleum-coke",
        name: "Petroleum Coke",
        formula: "CH0.35S0.02N0.01",
        phase: FuelPhase::Solid,
        molar_mass: 13.15,
        c: 1.0,
        h: 0.35,
        n: 0.01,
        s: 0.02,
        ash: 0.5,
        moisture: 1.0,
        lhv: 32.5,
        hhv: 34.0,
        aliases: &["petcoke"],
        ..GAS
    },
];

/// A user-authored fuel, validated before it joins a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFuelSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub phase: FuelPhase,
    /// [g/mol]
    pub molar_mass: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub h: f64,
    #[serde(default)]
    pub o: f64,
    #[serde(default)]
    pub n: f64,
    #[serde(default)]
    pub s: f64,
    /// [wt %]
    #[serde(default)]
    pub ash_content: f64,
    /// [wt %]
    #[serde(default)]
    pub moisture_content: f64,
    /// LHV [MJ/kg]
    pub heating_value: f64,
    /// HHV [MJ/kg]
    pub hhv: f64,
}

impl CustomFuelSpec {
    /// Key this fuel will be stored under.
    pub fn resolved_id(&self) -> String {
        match &self.id {
            Some(id) if !id.trim().is_empty() => id.trim().to_ascii_lowercase(),
            _ => slugify(&self.name),
        }
    }

    pub fn into_fuel(self) -> FuelResult<Fuel> {
        let id = self.resolved_id();
        let name = self.name.trim().to_string();
        let formula = self.formula.trim().to_string();
        if name.is_empty() || id.is_empty() {
            return Err(FuelError::InvalidFuel {
                fuel: self.name,
                reason: "custom fuel needs a name",
            });
        }
        if formula.is_empty() {
            return Err(FuelError::InvalidFuel {
                fuel: name,
                reason: "custom fuel needs a formula",
            });
        }

        let symbol = match self.symbol {
            Some(symbol) if !symbol.trim().is_empty() => symbol,
            _ => subscript_symbol(&formula),
        };

        let fuel = Fuel {
            id,
            name,
            formula,
            symbol,
            phase: self.phase,
            molar_mass: self.molar_mass,
            c: self.c,
            h: self.h,
            o: self.o,
            n: self.n,
            s: self.s,
            ash_content: self.ash_content,
            moisture_content: self.moisture_content,
            heating_value: self.heating_value,
            hhv: self.hhv,
            aliases: Vec::new(),
        };
        fuel.validate()?;
        Ok(fuel)
    }
}

/// Read-only collection of fuels keyed by id.
///
/// Ids are compared case-insensitively and are unique within a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuelCatalog {
    fuels: Vec<Fuel>,
}

impl FuelCatalog {
    /// Catalog of the reference fuels shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            fuels: BUILTIN_FUELS.iter().map(|b| b.to_fuel()).collect(),
        }
    }

    /// Build a catalog from fuel records, deriving missing ids from names.
    pub fn from_fuels(fuels: impl IntoIterator<Item = Fuel>) -> FuelResult<Self> {
        let mut catalog = Self::default();
        for mut fuel in fuels {
            if fuel.id.trim().is_empty() {
                fuel.id = slugify(&fuel.name);
            } else {
                fuel.id = fuel.id.trim().to_ascii_lowercase();
            }
            if fuel.symbol.is_empty() {
                fuel.symbol = subscript_symbol(&fuel.formula);
            }
            fuel.validate()?;
            catalog.insert(fuel)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of fuel records.
    pub fn from_json_str(json: &str) -> FuelResult<Self> {
        let fuels: Vec<Fuel> = serde_json::from_str(json)?;
        Self::from_fuels(fuels)
    }

    pub fn from_json_path(path: &Path) -> FuelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FuelError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> FuelResult<String> {
        Ok(serde_json::to_string_pretty(&self.fuels)?)
    }

    /// Validate and add a user-authored fuel; returns the stored record.
    pub fn add_custom(&mut self, spec: CustomFuelSpec) -> FuelResult<&Fuel> {
        let fuel = spec.into_fuel()?;
        self.insert(fuel)?;
        Ok(&self.fuels[self.fuels.len() - 1])
    }

    /// Add every fuel of `other` that is not already present.
    pub fn extend_from(&mut self, other: &FuelCatalog) {
        for fuel in &other.fuels {
            if self.get(&fuel.id).is_none() {
                self.fuels.push(fuel.clone());
            }
        }
    }

    fn insert(&mut self, fuel: Fuel) -> FuelResult<()> {
        if self.get(&fuel.id).is_some() {
            return Err(FuelError::DuplicateId { id: fuel.id });
        }
        self.fuels.push(fuel);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Fuel> {
        let id = id.trim();
        self.fuels.iter().find(|f| f.id.eq_ignore_ascii_case(id))
    }

    /// Like [`FuelCatalog::get`], but a missing id is an error.
    pub fn require(&self, id: &str) -> FuelResult<&Fuel> {
        self.get(id).ok_or_else(|| FuelError::UnknownFuel { id: id.to_string() })
    }

    pub fn search(&self, query: &str) -> Vec<&Fuel> {
        self.fuels.iter().filter(|f| f.matches_query(query)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fuel> + '_ {
        self.fuels.iter()
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn propane_spec() -> CustomFuelSpec {
        CustomFuelSpec {
            id: None,
            name: "Refinery Gas".into(),
            formula: "C2H6".into(),
            symbol: None,
            phase: FuelPhase::Gas,
            molar_mass: 30.07,
            c: 2.0,
            h: 6.0,
            o: 0.0,
            n: 0.0,
            s: 0.0,
            ash_content: 0.0,
            moisture_content: 0.0,
            heating_value: 47.0,
            hhv: 51.0,
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let mut seen = HashSet::new();
        for fuel in FuelCatalog::builtin().iter() {
            assert!(seen.insert(fuel.id.clone()), "duplicate id: {}", fuel.id);
        }
    }

    #[test]
    fn builtin_fuels_validate() {
        for fuel in FuelCatalog::builtin().iter() {
            fuel.validate().unwrap_or_else(|e| panic!("{}: {e}", fuel.id));
            assert!(fuel.elements().stoich_o2() > 0.0, "{}", fuel.id);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = FuelCatalog::builtin();
        assert_eq!(catalog.get("METHANE").unwrap().formula, "CH4");
        assert!(catalog.get("unobtainium").is_none());
        assert!(matches!(
            catalog.require("unobtainium"),
            Err(FuelError::UnknownFuel { .. })
        ));
    }

    #[test]
    fn builtin_symbols_use_subscripts() {
        let catalog = FuelCatalog::builtin();
        assert_eq!(catalog.get("propane").unwrap().symbol, "C₃H₈");
    }

    #[test]
    fn search_finds_aliases() {
        let catalog = FuelCatalog::builtin();
        let hits = catalog.search("petcoke");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "petroleum-coke");
        assert_eq!(catalog.search("").len(), catalog.len());
    }

    #[test]
    fn custom_fuel_gets_slug_and_symbol() {
        let mut catalog = FuelCatalog::builtin();
        let before = catalog.len();
        let fuel = catalog.add_custom(propane_spec()).unwrap();
        assert_eq!(fuel.id, "refinery-gas");
        assert_eq!(fuel.symbol, "C₂H₆");
        assert_eq!(catalog.len(), before + 1);
    }

    #[test]
    fn custom_fuel_duplicate_rejected() {
        let mut catalog = FuelCatalog::builtin();
        let mut spec = propane_spec();
        spec.id = Some("Methane".into());
        assert!(matches!(
            catalog.add_custom(spec),
            Err(FuelError::DuplicateId { .. })
        ));
    }

    #[test]
    fn custom_fuel_requires_positive_molar_mass() {
        let mut catalog = FuelCatalog::default();
        let mut spec = propane_spec();
        spec.molar_mass = 0.0;
        assert!(catalog.add_custom(spec).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn custom_fuel_requires_formula() {
        let mut spec = propane_spec();
        spec.formula = "  ".into();
        assert!(spec.into_fuel().is_err());
    }

    #[test]
    fn json_roundtrip_keeps_fuels() {
        let catalog = FuelCatalog::builtin();
        let json = catalog.to_json_string().unwrap();
        let loaded = FuelCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog, loaded);
    }

    #[test]
    fn json_duplicate_names_rejected() {
        let json = r#"[
            {"Name": "Methane", "Type": "Gas", "MolarMass": 16.04, "C": 1, "H": 4, "HeatingValue": 50},
            {"Name": "methane", "Type": "Gas", "MolarMass": 16.04, "C": 1, "H": 4, "HeatingValue": 50}
        ]"#;
        assert!(matches!(
            FuelCatalog::from_json_str(json),
            Err(FuelError::DuplicateId { .. })
        ));
    }

    #[test]
    fn json_parse_error_reported() {
        assert!(matches!(
            FuelCatalog::from_json_str("{not json"),
            Err(FuelError::Parse { .. })
        ));
    }

    #[test]
    fn extend_skips_existing_ids() {
        let mut catalog = FuelCatalog::builtin();
        let before = catalog.len();
        catalog.extend_from(&FuelCatalog::builtin());
        assert_eq!(catalog.len(), before);
    }
}
