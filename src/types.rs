// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of retrieval: what goes in, what comes out.
//!
//! Documents are owned by the caller and only ever borrowed by the ranker.
//! Context records are the reduced, length-capped projection handed downstream.
//!
//! | Rust Type         | Role                                       |
//! |-------------------|--------------------------------------------|
//! | `Document`        | One row of the article database            |
//! | `ContextRecord`   | What `rank` returns for a selected article |
//! | `ScoredCandidate` | A borrowed document plus its bigram score  |
//!
//! # Invariants
//!
//! - **ContextRecord**: `content.chars().count() <= max_context_chars` (500 by default).
//!   Records never share state with the document they were projected from.
//!
//! - **ScoredCandidate**: lives only between scoring and truncation. It borrows,
//!   so it cannot outlive the database it points into.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::truncate_chars;

/// Placeholder id for records whose source document has no id.
pub const NO_ID: &str = "N/A";

/// Placeholder title for records whose source document has no title.
pub const NO_TITLE: &str = "no title";

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One historical article.
///
/// The three typed fields are the only ones the ranker reads. Any other column
/// from the source database lands in `extra`, which keeps arbitrary CSV headers
/// around without widening the ranker's contract.
///
/// Missing and empty are treated alike everywhere: `Some("")` behaves as `None`
/// for defaults and for the zero-score rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Columns the ranker ignores, keyed by their original header.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            content: Some(content.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Build a document from `(column, value)` pairs.
    ///
    /// Columns named `id`, `title` or `content` (after stripping a BOM,
    /// trimming and lowercasing) fill the typed fields; every other column is
    /// kept verbatim in `extra`. Values are trimmed, and an empty typed value
    /// stays `None`. When a typed column appears twice the first one wins and
    /// the later one is kept in `extra`.
    pub fn from_columns<K, V, I>(columns: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut doc = Document::default();

        for (key, value) in columns {
            let raw_key = key.as_ref().trim_start_matches('\u{FEFF}').trim();
            let value = value.as_ref().trim();

            let slot = match raw_key.to_lowercase().as_str() {
                "id" if doc.id.is_none() => Some(&mut doc.id),
                "title" if doc.title.is_none() => Some(&mut doc.title),
                "content" if doc.content.is_none() => Some(&mut doc.content),
                _ => None,
            };

            match slot {
                Some(field) => {
                    if !value.is_empty() {
                        *field = Some(value.to_string());
                    }
                }
                None => {
                    doc.extra.insert(raw_key.to_string(), value.to_string());
                }
            }
        }

        doc
    }

    /// The id, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    /// The title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// The retrieval text, if present and non-empty.
    pub fn content(&self) -> Option<&str> {
        non_empty(self.content.as_deref())
    }

    /// Content length in characters; 0 when missing.
    pub fn content_chars(&self) -> usize {
        self.content().map_or(0, |c| c.chars().count())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A selected article, reduced to what the generation step needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl ContextRecord {
    /// Project a document, filling placeholders and capping the content at
    /// `max_chars` characters.
    pub fn from_document(doc: &Document, max_chars: usize) -> Self {
        Self {
            id: doc.id().unwrap_or(NO_ID).to_string(),
            title: doc.title().unwrap_or(NO_TITLE).to_string(),
            content: truncate_chars(doc.content().unwrap_or(""), max_chars).to_string(),
        }
    }
}

/// A document paired with its relevance score. Transient: exists between
/// scoring and top-K selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub doc: &'a Document,
    pub score: u32,
}
