// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance ranker: pick the top-K related articles for a query.
//!
//! ```text
//! documents ──▶ content gate ──▶ score ──▶ stable sort ──▶ take K ──▶ ContextRecord
//!                   │                ▲
//!                   └── all rejected ┘ (fall back to the unfiltered database)
//! ```
//!
//! Ranking never fails. An empty database, an empty query or a database of
//! stubs all produce a (possibly empty) result rather than an error; whether
//! "nothing found" is a problem is the caller's call.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::RankerConfig;
use crate::scoring::ranking::sort_candidates;
use crate::scoring::{relevance_score, QueryBigrams};
use crate::types::{ContextRecord, Document, ScoredCandidate};

/// The documents that actually get scored for a query.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    pub docs: Vec<&'a Document>,
    /// True when the content gate rejected everything and `docs` is the
    /// whole database.
    pub fallback: bool,
}

impl Candidates<'_> {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Apply the content gate: keep articles with more than `min_content_chars`
/// characters of content. If none survive, keep all of them.
///
/// Input order is preserved either way.
pub fn select_candidates(documents: &[Document], min_content_chars: usize) -> Candidates<'_> {
    let gated: Vec<&Document> = documents
        .iter()
        .filter(|doc| doc.content_chars() > min_content_chars)
        .collect();

    if !gated.is_empty() || documents.is_empty() {
        return Candidates {
            docs: gated,
            fallback: false,
        };
    }

    debug!(
        documents = documents.len(),
        min_content_chars, "content gate rejected every article; ranking unfiltered database"
    );
    Candidates {
        docs: documents.iter().collect(),
        fallback: true,
    }
}

/// Score every candidate against `query` and sort best first.
///
/// Equal scores keep candidate order. With the `parallel` feature scoring
/// runs on the rayon pool; collection preserves order, so the result is the
/// same as the sequential path.
pub fn score_candidates<'a>(query: &str, candidates: &[&'a Document]) -> Vec<ScoredCandidate<'a>> {
    let bigrams = QueryBigrams::from_query(query);

    #[cfg(feature = "parallel")]
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .par_iter()
        .map(|&doc| ScoredCandidate {
            doc,
            score: relevance_score(&bigrams, doc),
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|&doc| ScoredCandidate {
            doc,
            score: relevance_score(&bigrams, doc),
        })
        .collect();

    sort_candidates(&mut scored);

    trace!(
        candidates = scored.len(),
        bigrams = bigrams.len(),
        best = scored.first().map_or(0, |c| c.score),
        "scored candidates"
    );
    scored
}

/// Ranker with explicit thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// The best `top_k` scored candidates, best first.
    ///
    /// Same selection as [`Ranker::rank`] but keeps the borrowed document and
    /// its score, for callers that want to show why something was picked.
    pub fn top_candidates<'a>(
        &self,
        query: &str,
        documents: &'a [Document],
    ) -> Vec<ScoredCandidate<'a>> {
        if self.config.top_k == 0 {
            return Vec::new();
        }

        let candidates = select_candidates(documents, self.config.min_content_chars);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut scored = score_candidates(query, &candidates.docs);
        scored.truncate(self.config.top_k);
        scored
    }

    /// Up to `top_k` context records for the most relevant articles.
    pub fn rank(&self, query: &str, documents: &[Document]) -> Vec<ContextRecord> {
        self.top_candidates(query, documents)
            .into_iter()
            .map(|candidate| {
                ContextRecord::from_document(candidate.doc, self.config.max_context_chars)
            })
            .collect()
    }
}

/// Rank `documents` against `query` and return up to `top_k` context records.
///
/// Uses the default content gate (more than 20 characters) and content cap
/// (500 characters). See [`Ranker`] to change them.
///
/// ```
/// use ragrank::{rank, Document};
///
/// let db = vec![
///     Document::new("1", "秋天保養", "冬天穿搭技巧大公開，毛衣怎麼搭配才顯瘦"),
///     Document::new("2", "夏日防曬", "夏天防曬乳推薦清單"),
/// ];
/// let records = rank("冬天穿搭推薦", &db, 1);
/// assert_eq!(records[0].id, "1");
/// ```
pub fn rank(query: &str, documents: &[Document], top_k: usize) -> Vec<ContextRecord> {
    Ranker::new(RankerConfig::with_top_k(top_k)).rank(query, documents)
}
