//! Static data payloads embedded into the output document.
//!
//! The backend serves three collections — services, portfolio, industries —
//! each a JSON array of records. The packager reads them from the data
//! directory and serializes them verbatim into `window.__STATIC_DATA__`,
//! where the fetch shim answers API calls from them at runtime. Key order
//! is preserved so the embedded records are byte-for-byte faithful to the
//! source files.
//!
//! A missing or malformed file is fatal: the site cannot answer its own API
//! calls without all three payloads.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read {file}: {source}")]
    Read {
        file: String,
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}

/// The three collections, in the shape the shim expects.
#[derive(Debug, Serialize)]
pub struct StaticData {
    pub services: Value,
    pub portfolio: Value,
    pub industries: Value,
}

impl StaticData {
    /// Record counts for the progress line: (services, portfolio, industries).
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            array_len(&self.services),
            array_len(&self.portfolio),
            array_len(&self.industries),
        )
    }
}

fn array_len(value: &Value) -> usize {
    value.as_array().map(|a| a.len()).unwrap_or(0)
}

/// Load all three payloads from `data_dir`.
pub fn load(data_dir: &Path) -> Result<StaticData, DataError> {
    Ok(StaticData {
        services: load_json(data_dir, "services.json")?,
        portfolio: load_json(data_dir, "portfolio.json")?,
        industries: load_json(data_dir, "industries.json")?,
    })
}

fn load_json(dir: &Path, file: &str) -> Result<Value, DataError> {
    let content = fs::read_to_string(dir.join(file)).map_err(|source| DataError::Read {
        file: file.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        file: file.to_string(),
        source,
    })
}
