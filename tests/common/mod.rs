//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ragrank::{bigram_overlap, ContextRecord, Document};

// Re-export canonical test utilities from ragrank::testing
pub use ragrank::testing::{make_doc, make_filler_docs, make_untitled_doc};

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-article database from the winter-outfit scenario.
pub fn fashion_db() -> Vec<Document> {
    vec![
        make_doc("1", "秋天保養", "冬天穿搭技巧大公開，毛衣怎麼搭配才顯瘦"),
        make_doc("2", "夏日防曬", "夏天防曬乳推薦清單"),
    ]
}

/// A database where every article passes the content gate.
pub fn beauty_db() -> Vec<Document> {
    vec![
        make_doc(
            "101",
            "夏日防曬全攻略",
            "夏天防曬乳推薦清單，從清爽型到高係數一次整理給你，出門前記得補擦",
        ),
        make_doc(
            "102",
            "冬季穿搭指南",
            "冬天穿搭技巧大公開，毛衣怎麼搭配才顯瘦？大衣與圍巾的顏色選擇也很重要",
        ),
        make_doc(
            "103",
            "敏感肌保養",
            "換季時敏感肌容易泛紅，保濕精華與溫和潔面是冬天保養的兩大重點",
        ),
        make_doc(
            "104",
            "通勤穿搭",
            "上班族通勤穿搭，一件大衣就能撐起整體造型，冬天也能輕鬆有型",
        ),
    ]
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Ids of the returned records, in order.
pub fn ids(records: &[ContextRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Index of the document a record was projected from.
pub fn source_index(docs: &[Document], record: &ContextRecord) -> usize {
    docs.iter()
        .position(|d| d.id() == Some(record.id.as_str()))
        .unwrap_or_else(|| panic!("record {} has no source document", record.id))
}

/// Recompute scores of returned records from their source documents.
pub fn recomputed_scores(query: &str, docs: &[Document], records: &[ContextRecord]) -> Vec<u32> {
    records
        .iter()
        .map(|r| bigram_overlap(query, &docs[source_index(docs, r)]))
        .collect()
}
