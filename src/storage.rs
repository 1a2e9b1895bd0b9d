//! Saved circuit records.
//!
//! A record is a small pretty-printed JSON file holding the netlist text, a
//! free-text description and the time it was saved. The netlist is stored
//! verbatim and only parsed again when drawn.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{NetsketchError, Result};

/// Format version written into new records.
pub const RECORD_VERSION: &str = "3.0";

const RECORD_PREFIX: &str = "circuit_";
const RECORD_EXTENSION: &str = "json";

/// A saved netlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitRecord {
    #[serde(default)]
    pub description: String,
    pub spice_code: String,
    /// ISO 8601 save time
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub version: String,
}

impl CircuitRecord {
    /// Create a record stamped with the current time.
    pub fn new(spice_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::at(spice_code, description, Local::now())
    }

    /// Create a record stamped with `date`.
    pub fn at(
        spice_code: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Local>,
    ) -> Self {
        Self {
            description: description.into(),
            spice_code: spice_code.into(),
            date: date.to_rfc3339(),
            version: RECORD_VERSION.to_string(),
        }
    }

    /// Date part of the timestamp, or the raw string if it is short.
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}

/// An entry found by [`list_saved_circuits`].
#[derive(Debug, Clone)]
pub struct SavedCircuit {
    pub path: PathBuf,
    /// `None` when the file could not be read as a record
    pub record: Option<CircuitRecord>,
}

/// File name used when the caller gives none: `circuit_YYYYmmdd_HHMMSS.json`.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        RECORD_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        RECORD_EXTENSION
    )
}

/// Write `record` into `dir`, returning the path written.
pub fn save_circuit(dir: &Path, record: &CircuitRecord, file_name: Option<&str>) -> Result<PathBuf> {
    let name = file_name
        .map(str::to_string)
        .unwrap_or_else(|| default_file_name(Local::now()));
    let path = dir.join(name);

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json).map_err(|e| NetsketchError::record_io(path.display().to_string(), e))?;

    info!(path = %path.display(), "circuit saved");
    Ok(path)
}

/// Read a record from `path`.
pub fn load_circuit(path: &Path) -> Result<CircuitRecord> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| NetsketchError::record_io(&shown, e))?;
    let record: CircuitRecord =
        serde_json::from_str(&content).map_err(|e| NetsketchError::record_format(&shown, e))?;

    debug!(path = %shown, version = %record.version, "circuit loaded");
    Ok(record)
}

/// Find every `circuit_*.json` in `dir`, sorted by file name.
pub fn list_saved_circuits(dir: &Path) -> Result<Vec<SavedCircuit>> {
    let entries =
        fs::read_dir(dir).map_err(|e| NetsketchError::record_io(dir.display().to_string(), e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_record_file(path))
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| {
            let record = match load_circuit(&path) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            };
            SavedCircuit { path, record }
        })
        .collect())
}

fn is_record_file(path: &Path) -> bool {
    let name_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(RECORD_PREFIX))
        .unwrap_or(false);
    let ext_ok = path
        .extension()
        .map(|ext| ext == RECORD_EXTENSION)
        .unwrap_or(false);
    name_ok && ext_ok && path.is_file()
}
