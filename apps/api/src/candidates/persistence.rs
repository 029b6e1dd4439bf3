//! JSON results file: saves and restores a sequence of analysis results.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::analysis::AnalysisResult;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed results file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Writes `results` as pretty-printed UTF-8 JSON, non-ASCII left unescaped.
///
/// The file is written to a temporary sibling first and renamed into place, so a
/// failed save never truncates an existing file.
pub fn save_results(path: &Path, results: &[AnalysisResult]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(results).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    info!("Saved {} results to {}", results.len(), path.display());
    Ok(())
}

/// Reads results back. A missing file is an empty result set, not an error.
pub fn load_results(path: &Path) -> Result<Vec<AnalysisResult>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let results: Vec<AnalysisResult> =
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} results from {}", results.len(), path.display());
    Ok(results)
}
