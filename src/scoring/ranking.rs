// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Score descending, nothing else. Two articles with the same score keep the
//! order they had in the database, which is why callers must sort with a
//! stable sort (`slice::sort_by`, never `sort_unstable_by`).

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking.
///
/// Returns `Ordering::Less` when `a` should come first, i.e. when it has the
/// higher score. Equal scores compare `Equal` so a stable sort leaves them in
/// input order.
pub fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Stable in-place sort, best first.
pub fn sort_candidates(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(compare_candidates);
}
