//! Loading backend rows from JSON files.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::{CliError, Result};

/// Read a JSON array of rows from `path`.
pub fn load_rows<T: DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let rows: Vec<T> = serde_json::from_str(&content).map_err(|source| CliError::InvalidInput {
        path: path.to_string(),
        source,
    })?;

    tracing::info!(path, rows = rows.len(), "Loaded input rows");
    Ok(rows)
}
