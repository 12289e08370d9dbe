// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate articles get their numbers.
//!
//! A score is a raw count of distinct query bigrams found in the article.
//! No weighting, no length normalization. Ordering is by that count alone,
//! with input order breaking ties.

mod core;
pub mod ranking;

pub use core::*;
