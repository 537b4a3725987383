//! Case file schema definitions.

use cb_engine::{EngineConfig, ProcessConditions};
use cb_fuels::CustomFuelSpec;
use serde::{Deserialize, Serialize};

/// Newest case file version this crate reads and writes.
pub const CASE_VERSION: u32 = 1;

/// One calculation: a mixture by catalog reference, the operating point, and
/// optionally case-local fuels and engine constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub mixture: Vec<MixtureEntryDef>,
    pub conditions: ProcessConditions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fuels: Vec<CustomFuelSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixtureEntryDef {
    /// Catalog id (builtin, catalog file, or a custom fuel of this case).
    pub fuel: String,
    /// [wt %]
    pub percentage: f64,
}

impl MixtureEntryDef {
    pub fn new(fuel: impl Into<String>, percentage: f64) -> Self {
        Self {
            fuel: fuel.into(),
            percentage,
        }
    }
}

impl CaseFile {
    /// Starter case: natural gas with a little propane at default conditions.
    pub fn template() -> Self {
        Self {
            version: CASE_VERSION,
            name: "Natural gas boiler".to_string(),
            description: Some("Edit the mixture and conditions, then `cb-cli run`".to_string()),
            mixture: vec![
                MixtureEntryDef::new("natural-gas", 95.0),
                MixtureEntryDef::new("propane", 5.0),
            ],
            conditions: ProcessConditions::default(),
            custom_fuels: Vec::new(),
            engine: None,
        }
    }
}
