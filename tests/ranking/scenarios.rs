//! End-to-end scenarios for `rank`.

use super::common::*;
use ragrank::{rank, Document, DEFAULT_TOP_K};

#[test]
fn test_winter_outfit_query_picks_matching_article() {
    let db = fashion_db();
    let records = rank("冬天穿搭推薦", &db, 1);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].title, "秋天保養");
    assert_eq!(records[0].content, "冬天穿搭技巧大公開，毛衣怎麼搭配才顯瘦");
}

#[test]
fn test_empty_database_returns_nothing() {
    let db: Vec<Document> = Vec::new();
    assert!(rank("冬天穿搭推薦", &db, DEFAULT_TOP_K).is_empty());
    assert!(rank("", &db, DEFAULT_TOP_K).is_empty());
}

#[test]
fn test_empty_query_returns_database_order() {
    let db = make_filler_docs(4, '字', 30);
    let records = rank("", &db, 3);
    assert_eq!(ids(&records), vec!["0", "1", "2"]);
}

#[test]
fn test_punctuation_only_query_behaves_like_empty() {
    let db = make_filler_docs(4, '字', 30);
    let records = rank("！？，。", &db, 2);
    assert_eq!(ids(&records), vec!["0", "1"]);
}

#[test]
fn test_full_ranking_over_gated_database() {
    let db = beauty_db();
    let records = rank("冬天穿搭推薦", &db, 4);

    // 102 hits 冬天/天穿/穿搭, 104 hits 冬天/穿搭, 101 and 103 one each
    assert_eq!(ids(&records), vec!["102", "104", "101", "103"]);
    assert_eq!(recomputed_scores("冬天穿搭推薦", &db, &records), vec![3, 2, 1, 1]);
}

#[test]
fn test_top_k_larger_than_database_returns_everything() {
    let db = beauty_db();
    let records = rank("保養", &db, 50);
    assert_eq!(records.len(), db.len());
}

#[test]
fn test_title_contributes_to_score() {
    let db = vec![
        make_doc("a", "無關標題", "這是一篇關於旅行與美食的長篇文章內容介紹"),
        make_doc("b", "冬天穿搭", "這是一篇關於旅行與美食的長篇文章內容介紹"),
    ];
    let records = rank("冬天穿搭", &db, 1);
    assert_eq!(records[0].id, "b");
}

#[test]
fn test_query_case_is_folded_and_document_case_too() {
    let db = vec![
        make_doc("lower", "", "nothing relevant lives in this paragraph"),
        make_doc("upper", "", "A GUIDE TO RUST PROGRAMMING FOR EDITORS"),
    ];
    let records = rank("Rust Guide", &db, 1);
    assert_eq!(records[0].id, "upper");
}

#[test]
fn test_document_punctuation_is_not_stripped() {
    // The query "ab,cd" normalizes to "abcd" and asks for "bc", which only the
    // second article contains verbatim; the first has "b,c".
    let db = vec![
        make_doc("comma", "", "ab,cd ab,cd ab,cd ab,cd ab,cd"),
        make_doc("plain", "", "abcd abcd abcd abcd abcd abcd"),
    ];
    let records = rank("ab,cd", &db, 2);
    assert_eq!(ids(&records), vec!["plain", "comma"]);
    assert_eq!(recomputed_scores("ab,cd", &db, &records), vec![3, 2]);
}
