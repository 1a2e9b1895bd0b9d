//! Error types for netsketch.
//!
//! Netlist parsing never fails and validation findings are returned as text,
//! so [`NetsketchError`] only covers the hard preconditions of the drawing
//! pipeline plus file and record I/O.

use thiserror::Error;

/// Result type alias using [`NetsketchError`].
pub type Result<T> = std::result::Result<T, NetsketchError>;

/// Unified error type for all netsketch operations.
#[derive(Error, Debug)]
pub enum NetsketchError {
    // ============ Pipeline Preconditions ============
    /// The netlist produced no usable component records
    #[error("No components found to draw")]
    NoComponents,

    /// The netlist has no voltage source to anchor the traversal
    #[error("No voltage source found (add a V<name> <node+> <node-> <value> line)")]
    MissingVoltageSource,

    /// Validation reported at least one blocking error
    #[error("Circuit failed validation with {} error(s):\n{}", errors.len(), errors.join("\n"))]
    ValidationFailed { errors: Vec<String> },

    // ============ Library ============
    /// Unknown built-in example id
    #[error("Unknown example '{id}'")]
    UnknownExample { id: String },

    // ============ I/O Errors ============
    /// Error reading a netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading or writing a saved circuit record
    #[error("Circuit record '{path}': {source}")]
    RecordIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Saved circuit record is not valid JSON or misses fields
    #[error("Malformed circuit record '{path}': {source}")]
    RecordFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of a plan or report failed
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// SVG rendering failed
    #[error("Rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    /// Writing program output failed
    #[error("Failed to write '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NetsketchError {
    /// Create a file read error
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a record I/O error
    pub fn record_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::RecordIo {
            path: path.into(),
            source,
        }
    }

    /// Create a record format error
    pub fn record_format(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::RecordFormat {
            path: path.into(),
            source,
        }
    }
}
