#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record source for address audits.
//!
//! Reads an OpenStreetMap PBF extract and yields the address field
//! values (`addr:street`, `addr:city`, `addr:postcode`) found on nodes,
//! dense nodes, ways, and relations. Also provides the extract
//! statistics glue: element counts, file size, and map bounds. The
//! audit core never parses the dataset format itself; it only consumes
//! the `(kind, value)` records produced here.

pub mod pbf;

use std::path::Path;

pub use pbf::{element_counts, map_bounds, read_fields};

/// Errors from reading a dataset extract.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Extract file not found.
    #[error("extract file not found: {0}")]
    FileNotFound(String),

    /// PBF parsing error.
    #[error("PBF parse error in {path}: {message}")]
    Parse {
        /// Path to the extract file.
        path: String,
        /// Error description.
        message: String,
    },

    /// I/O error (file metadata or read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the extract's file size in KB, rounded to one decimal place.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file metadata cannot be read.
pub fn file_size_kb(path: &Path) -> Result<f64, SourceError> {
    let bytes = std::fs::metadata(path)?.len();
    Ok(kb_rounded(bytes))
}

#[allow(clippy::cast_precision_loss)]
fn kb_rounded(bytes: u64) -> f64 {
    (bytes as f64 / 1000.0 * 10.0).round() / 10.0
}
