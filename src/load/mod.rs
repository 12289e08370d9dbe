// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Article database loading.
//!
//! The editorial tool exports its archive as CSV; JSON arrays are accepted
//! too. Both end up as `Vec<Document>` in file order, with the `id`, `title`
//! and `content` columns typed and everything else in `Document::extra`.
//!
//! Header matching is exact (modulo BOM, surrounding whitespace and case).
//! A column called `body` is not treated as content.

mod csv_file;
mod json_file;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::Document;

pub use csv_file::read_csv;
pub use json_file::read_json;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported database format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("No articles found in {}", .0.display())]
    Empty(PathBuf),
}

/// Supported database file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseFormat {
    Csv,
    Json,
}

impl DatabaseFormat {
    /// Pick a format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(DatabaseFormat::Csv),
            "json" => Ok(DatabaseFormat::Json),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }
}

/// Load an article database from disk.
///
/// Fails if the file is unreadable, malformed, or has no article rows.
pub fn load_database(path: &Path) -> Result<Vec<Document>, LoadError> {
    let format = DatabaseFormat::from_path(path)?;
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let documents = match format {
        DatabaseFormat::Csv => read_csv(reader)?,
        DatabaseFormat::Json => read_json(reader)?,
    };

    if documents.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!(
        path = %path.display(),
        documents = documents.len(),
        ?format,
        "loaded article database"
    );
    Ok(documents)
}
