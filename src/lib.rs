// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-bigram relevance ranking for related-article retrieval.
//!
//! Given a new article and a database of past ones, pick the few past articles
//! that share the most two-character fragments with it. Built for CJK text,
//! where there are no spaces to split words on, but works on any script.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   load/     │────▶│   rank.rs    │────▶│  types.rs   │
//! │ (CSV, JSON) │     │ (gate, sort, │     │(ContextRec.)│
//! └─────────────┘     │   top-K)     │     └─────────────┘
//!                     └──────┬───────┘
//!                            ▼
//!                     ┌──────────────┐
//!                     │  scoring/    │
//!                     │ (bigrams,    │
//!                     │  ordering)   │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ragrank::{rank, Document};
//!
//! let db = vec![
//!     Document::new("1", "秋天保養", "冬天穿搭技巧大公開，毛衣怎麼搭配才顯瘦"),
//!     Document::new("2", "夏日防曬", "夏天防曬乳推薦清單"),
//! ];
//!
//! let context = rank("冬天穿搭推薦", &db, 5);
//! assert_eq!(context[0].id, "1");
//! ```

// Module declarations
pub mod config;
pub mod load;
mod rank;
mod scoring;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{
    ConfigError, RankerConfig, DEFAULT_MAX_CONTEXT_CHARS, DEFAULT_MIN_CONTENT_CHARS,
    DEFAULT_TOP_K,
};
pub use load::{load_database, DatabaseFormat, LoadError};
pub use rank::{rank, score_candidates, select_candidates, Candidates, Ranker};
pub use scoring::ranking::{compare_candidates, sort_candidates};
pub use scoring::{bigram_overlap, relevance_score, QueryBigrams};
pub use types::{ContextRecord, Document, ScoredCandidate, NO_ID, NO_TITLE};
pub use utils::{normalize_query, truncate_chars};
