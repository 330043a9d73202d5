//! RON data file loading shared by tuning and arena definitions.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::DataLoadError;

/// Parse a RON document. `origin` is only used in error messages.
pub fn parse_ron<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, DataLoadError> {
    ron::from_str::<T>(contents).map_err(|e| DataLoadError::ParseError {
        path: origin.to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a RON file from disk.
pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;

    parse_ron(&contents, &display)
}
