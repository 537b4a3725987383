//! Case and catalog loading, saving, and validation.

use cb_fuels::FuelCatalog;
use cb_project::CaseFile;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Serialization format for case files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFormat {
    #[default]
    Yaml,
    Json,
}

impl CaseFormat {
    pub fn from_path(path: &Path) -> Self {
        if cb_project::is_json_path(path) {
            Self::Json
        } else {
            Self::Yaml
        }
    }
}

/// Load and validate a case file; the extension picks YAML or JSON.
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let case: CaseFile = match CaseFormat::from_path(path) {
        CaseFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::Project(format!("Failed to parse case JSON: {}", e)))?,
        CaseFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Project(format!("Failed to parse case YAML: {}", e)))?,
    };

    validate_case(&case)?;
    Ok(case)
}

/// Validate and save a case file; the extension picks YAML or JSON.
pub fn save_case(path: &Path, case: &CaseFile) -> AppResult<()> {
    validate_case(case)?;
    let content = serialize_case(case, CaseFormat::from_path(path))?;
    std::fs::write(path, content).map_err(|e| AppError::CaseFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

pub fn validate_case(case: &CaseFile) -> AppResult<()> {
    cb_project::validate_case(case).map_err(|e| AppError::Validation(e.to_string()))
}

/// Builtin fuels, overlaid by the records of `path` when one is given.
///
/// Fuels from the file win over builtin fuels with the same id.
pub fn load_catalog(path: Option<&Path>) -> AppResult<FuelCatalog> {
    let Some(path) = path else {
        return Ok(FuelCatalog::builtin());
    };
    let mut catalog = FuelCatalog::from_json_path(path)?;
    catalog.extend_from(&FuelCatalog::builtin());
    tracing::debug!(path = %path.display(), fuels = catalog.len(), "loaded fuel catalog");
    Ok(catalog)
}

/// Starter case file text in the requested format.
pub fn render_template(format: CaseFormat) -> AppResult<String> {
    serialize_case(&CaseFile::template(), format)
}

fn serialize_case(case: &CaseFile, format: CaseFormat) -> AppResult<String> {
    match format {
        CaseFormat::Json => serde_json::to_string_pretty(case)
            .map_err(|e| AppError::Project(format!("Failed to serialize case: {}", e))),
        CaseFormat::Yaml => serde_yaml::to_string(case)
            .map_err(|e| AppError::Project(format!("Failed to serialize case: {}", e))),
    }
}
