//! Case file validation logic.
//!
//! Structural checks only. Physical checks (percentage balance, process
//! condition ranges) are made by the engine at run time.

use crate::schema::{CASE_VERSION, CaseFile};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > CASE_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }

    if case.mixture.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "mixture".to_string(),
            value: "[]".to_string(),
            reason: "needs at least one fuel".to_string(),
        });
    }

    let mut fuel_refs = HashSet::new();
    for entry in &case.mixture {
        let key = entry.fuel.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "mixture fuel".to_string(),
                value: entry.fuel.clone(),
                reason: "must name a catalog fuel".to_string(),
            });
        }
        if !fuel_refs.insert(key) {
            return Err(ValidationError::DuplicateId {
                id: entry.fuel.clone(),
                context: "mixture".to_string(),
            });
        }
        if !entry.percentage.is_finite() || !(0.0..=100.0).contains(&entry.percentage) {
            return Err(ValidationError::InvalidValue {
                field: format!("mixture '{}' percentage", entry.fuel),
                value: entry.percentage.to_string(),
                reason: "must lie in [0, 100]".to_string(),
            });
        }
    }

    let mut custom_ids = HashSet::new();
    for spec in &case.custom_fuels {
        let id = spec.resolved_id();
        if !custom_ids.insert(id.clone()) {
            return Err(ValidationError::DuplicateId {
                id,
                context: "custom_fuels".to_string(),
            });
        }
    }

    Ok(())
}
