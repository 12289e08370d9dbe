// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with all three typed fields set.
pub fn make_doc(id: &str, title: &str, content: &str) -> Document {
    Document::new(id, title, content)
}

/// Create a document with content only; id and title are missing.
pub fn make_untitled_doc(content: &str) -> Document {
    Document {
        content: Some(content.to_string()),
        ..Document::default()
    }
}

/// Create `count` documents whose content is `len` copies of `fill`.
///
/// Ids are `"0"`, `"1"`, ... in order, titles are `"Doc N"`.
pub fn make_filler_docs(count: usize, fill: char, len: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            Document::new(
                i.to_string(),
                format!("Doc {}", i),
                fill.to_string().repeat(len),
            )
        })
        .collect()
}

/// Deterministic synthetic article database for benchmarks.
///
/// Articles are stitched together from a fixed pool of CJK phrases using a
/// simple LCG, so every run sees the same corpus.
pub fn synthetic_corpus(articles: usize, phrases_per_article: usize, seed: u64) -> Vec<Document> {
    const PHRASES: &[&str] = &[
        "冬天穿搭", "毛衣怎麼搭配", "顯瘦技巧", "夏天防曬", "防曬乳推薦", "保濕精華",
        "敏感肌保養", "秋冬色系", "通勤穿搭", "週末出遊", "平價好物", "開箱心得",
        "美妝新品", "香氛推薦", "髮型設計", "指甲彩繪", "健身飲食", "早午餐",
    ];

    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..articles)
        .map(|i| {
            let title = PHRASES[next() % PHRASES.len()].to_string();
            let content: Vec<&str> = (0..phrases_per_article)
                .map(|_| PHRASES[next() % PHRASES.len()])
                .collect();
            Document::new(i.to_string(), title, content.join("，"))
        })
        .collect()
}
