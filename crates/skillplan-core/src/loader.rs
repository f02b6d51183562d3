//! Skill data loading.
//!
//! The data file is JSON in the calculator's shape. Some exports wrap the
//! payload in a top-level `STATIC_DATA` object; that wrapper is stripped
//! before deserializing.

use std::path::{Path, PathBuf};

use serde_json::Value;
use skillplan_types::error::CatalogError;
use skillplan_types::skill::SkillData;

use crate::catalog::Catalog;

/// Default data file name inside the data directory.
pub const DATA_FILE_NAME: &str = "skills.json";

const WRAPPER_KEY: &str = "STATIC_DATA";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid skill data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse skill data from JSON text, unwrapping a `STATIC_DATA` envelope.
pub fn parse_skill_data(text: &str) -> Result<SkillData, LoadError> {
    let value: Value = serde_json::from_str(text)?;

    let value = match value {
        Value::Object(mut map) if !map.contains_key("skills") && map.contains_key(WRAPPER_KEY) => {
            map.remove(WRAPPER_KEY).unwrap_or_default()
        }
        other => other,
    };

    Ok(serde_json::from_value(value)?)
}

/// Read, parse and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data = parse_skill_data(&text)?;
    let catalog = Catalog::build(&data)?;

    tracing::info!(
        path = %path.display(),
        professions = catalog.professions().count(),
        skills = catalog.len(),
        "skill catalog loaded"
    );
    Ok(catalog)
}
