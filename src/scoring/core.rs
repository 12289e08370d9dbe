// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance: character-bigram overlap.
//!
//! CJK text has no whitespace word boundaries, so instead of tokenizing we
//! slide a two-character window over the normalized query and ask, for each
//! distinct window, "does this appear anywhere in the article?". The score is
//! the number of yes answers.
//!
//! # Key Invariant: Distinct-Hit Counting
//!
//! ```text
//! score(doc) = |{ b ∈ bigrams(normalize(query)) : b ⊆ lower(title ++ content) }|
//! ```
//!
//! A bigram that occurs fifty times in the article contributes exactly 1, and
//! a bigram repeated in the query is counted once. So the score is bounded by
//! `bigrams.len()` and independent of article length.
//!
//! # Asymmetry
//!
//! The query is stripped of punctuation and whitespace before windowing; the
//! article is only lowercased. A query bigram that straddles punctuation
//! ("a,b" → "ab") can therefore miss an article containing the same "a,b".
//! Downstream ranking depends on this, so it stays.

use std::collections::BTreeSet;

use crate::types::Document;
use crate::utils::normalize_query;

/// Distinct two-character windows of a normalized query.
///
/// Ordered so that `iter()` is deterministic; the order has no effect on scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBigrams {
    grams: BTreeSet<String>,
}

impl QueryBigrams {
    /// Normalize `query` and collect every overlapping bigram.
    ///
    /// Fewer than two characters after normalization gives an empty set.
    pub fn from_query(query: &str) -> Self {
        let chars: Vec<char> = normalize_query(query).chars().collect();
        let grams = chars
            .windows(2)
            .map(|pair| pair.iter().collect::<String>())
            .collect();
        Self { grams }
    }

    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.grams.iter().map(String::as_str)
    }

    /// How many of these bigrams occur at least once in `haystack`.
    pub fn count_hits(&self, haystack: &str) -> u32 {
        self.grams
            .iter()
            .filter(|gram| haystack.contains(gram.as_str()))
            .count() as u32
    }
}

/// Relevance of `doc` to the query the bigrams came from.
///
/// Zero when the query yielded no bigrams (including the empty query) or when
/// the document has no content. A title alone never earns points, but once
/// content exists the title is searched along with it.
pub fn relevance_score(bigrams: &QueryBigrams, doc: &Document) -> u32 {
    let Some(content) = doc.content() else {
        return 0;
    };
    if bigrams.is_empty() {
        return 0;
    }

    let mut haystack = String::with_capacity(content.len() + 64);
    haystack.push_str(doc.title().unwrap_or(""));
    haystack.push_str(content);
    bigrams.count_hits(&haystack.to_lowercase())
}

/// One-shot convenience: bigram the query and score a single document.
///
/// When scoring many documents, build `QueryBigrams` once instead.
pub fn bigram_overlap(query: &str, doc: &Document) -> u32 {
    relevance_score(&QueryBigrams::from_query(query), doc)
}
