//! Turning a case file into engine inputs.

use crate::schema::CaseFile;
use crate::validate::ValidationError;
use crate::{ProjectError, ProjectResult};
use cb_engine::{EngineConfig, ProcessConditions};
use cb_fuels::{FuelCatalog, Mixture};

/// Engine inputs assembled from a case file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCase {
    pub mixture: Mixture,
    pub conditions: ProcessConditions,
    pub config: EngineConfig,
}

/// Look up every mixture reference in `catalog` extended with the case's
/// custom fuels.
pub fn resolve(case: &CaseFile, catalog: &FuelCatalog) -> ProjectResult<ResolvedCase> {
    let mut catalog = catalog.clone();
    for spec in &case.custom_fuels {
        catalog.add_custom(spec.clone())?;
    }

    let mut mixture = Mixture::default();
    for entry in &case.mixture {
        let fuel = catalog
            .get(&entry.fuel)
            .ok_or_else(|| ValidationError::MissingReference {
                id: entry.fuel.clone(),
                context: "mixture".to_string(),
            })?;
        mixture = mixture.with(fuel.clone(), entry.percentage);
    }

    Ok(ResolvedCase {
        mixture,
        conditions: case.conditions.clone(),
        config: case.engine.clone().unwrap_or_default(),
    })
}

impl From<ResolvedCase> for (Mixture, ProcessConditions, EngineConfig) {
    fn from(resolved: ResolvedCase) -> Self {
        (resolved.mixture, resolved.conditions, resolved.config)
    }
}
