//! Input file loading.
//!
//! The loader branches on file extension: `.json` files are parsed into
//! structured data, everything else is returned as raw text. A missing
//! input file is a distinct, fatal error carrying the path - callers turn
//! it into a diagnostic and a non-zero exit.

use std::fs;
use std::path::Path;

use crate::dataset::AnimalRecord;
use crate::error::{MenagerieError, Result};

/// A loaded input file.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceFile {
    /// Parsed content of a `.json` file.
    Json(serde_json::Value),
    /// Verbatim content of any other file.
    Text(String),
}

/// Load a file, parsing it when the path has a `.json` extension.
///
/// # Errors
///
/// Returns `DatasetNotFound` if the file doesn't exist.
/// Returns `DatasetParseError` if a `.json` file is not valid JSON.
pub fn load_file(path: &Path) -> Result<SourceFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MenagerieError::DatasetNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MenagerieError::Io(e)
        }
    })?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let value =
            serde_json::from_str(&content).map_err(|e| MenagerieError::DatasetParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(SourceFile::Json(value))
    } else {
        Ok(SourceFile::Text(content))
    }
}

/// Load the animal dataset from a JSON file.
///
/// # Errors
///
/// Returns `DatasetNotFound` if the file doesn't exist.
/// Returns `DatasetParseError` if the content is not a JSON array of records.
pub fn load_dataset(path: &Path) -> Result<Vec<AnimalRecord>> {
    match load_file(path)? {
        SourceFile::Json(value) => {
            serde_json::from_value(value).map_err(|e| MenagerieError::DatasetParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        SourceFile::Text(_) => Err(MenagerieError::DatasetParseError {
            path: path.to_path_buf(),
            message: "expected a .json file".to_string(),
        }),
    }
}

/// Load the HTML template as raw text.
///
/// # Errors
///
/// Returns `TemplateNotFound` if the file doesn't exist.
pub fn load_template(path: &Path) -> Result<String> {
    match load_file(path) {
        Ok(SourceFile::Text(content)) => Ok(content),
        // A template with a .json extension would be odd, but the raw text
        // is still what the caller wants.
        Ok(SourceFile::Json(value)) => Ok(value.to_string()),
        Err(MenagerieError::DatasetNotFound { path }) => {
            Err(MenagerieError::TemplateNotFound { path })
        }
        Err(e) => Err(e),
    }
}
