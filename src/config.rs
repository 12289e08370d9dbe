// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranker configuration.
//!
//! Three knobs, all with defaults matching how the editorial tool calls the
//! ranker. A JSON file can override any subset of them:
//!
//! ```json
//! { "top_k": 8, "max_context_chars": 300 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of context records the editorial tool asks for.
pub const DEFAULT_TOP_K: usize = 5;

/// Articles must have strictly more content characters than this to pass the gate.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 20;

/// Content cap on each returned record.
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Maximum number of records returned.
    pub top_k: usize,
    /// Content gate threshold in characters (exclusive).
    pub min_content_chars: usize,
    /// Truncation length for returned content, in characters.
    pub max_context_chars: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

impl RankerConfig {
    /// Default thresholds with a specific `top_k`.
    pub fn with_top_k(top_k: usize) -> Self {
        Self {
            top_k,
            ..Self::default()
        }
    }

    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject settings that can only produce empty output.
    ///
    /// The library itself accepts them and returns nothing; this is for
    /// front ends that would rather tell the operator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }
        if self.max_context_chars == 0 {
            return Err(ConfigError::Invalid(
                "max_context_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
