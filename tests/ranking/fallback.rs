//! Content gate and fallback behavior.

use super::common::*;
use ragrank::{rank, select_candidates, Document, NO_ID, NO_TITLE};

#[test]
fn test_all_short_content_falls_back_in_order() {
    let db = vec![
        make_doc("a", "A", "abcde"),
        make_doc("b", "B", "fghij"),
        make_doc("c", "C", "klmno"),
    ];
    let records = rank("zzzz", &db, 2);
    assert_eq!(ids(&records), vec!["a", "b"]);
}

#[test]
fn test_fallback_still_scores() {
    let db = vec![
        make_doc("a", "A", "abcde"),
        make_doc("b", "B", "fghij"),
        make_doc("c", "C", "klmno"),
    ];
    let records = rank("lmno", &db, 2);
    assert_eq!(ids(&records), vec!["c", "a"]);
}

#[test]
fn test_short_articles_excluded_when_others_pass_gate() {
    let db = vec![
        make_doc("short", "冬天穿搭", "冬天穿搭推薦"),
        make_doc("long", "夏日", "這篇文章談的是夏天的海邊旅遊行程與美食推薦"),
    ];
    let candidates = select_candidates(&db, 20);
    assert!(!candidates.fallback);

    let records = rank("冬天穿搭推薦", &db, 5);
    assert_eq!(ids(&records), vec!["long"]);
}

#[test]
fn test_content_of_exactly_twenty_chars_is_gated() {
    let twenty = "一".repeat(20);
    let twenty_one = "一".repeat(21);
    let db = vec![make_doc("20", "", &twenty), make_doc("21", "", &twenty_one)];
    assert_eq!(ids(&rank("", &db, 5)), vec!["21"]);
}

#[test]
fn test_missing_content_is_still_eligible_in_fallback() {
    let db = vec![
        Document::default(),
        make_doc("match", "", "冬天穿搭"),
        make_untitled_doc(""),
    ];
    let records = rank("冬天穿搭", &db, 5);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "match");
    assert_eq!(records[1].id, NO_ID);
    assert_eq!(records[1].title, NO_TITLE);
    assert_eq!(records[1].content, "");
    assert_eq!(records[2].id, NO_ID);
}

#[test]
fn test_database_of_empty_documents_does_not_return_empty() {
    let db = vec![Document::default(), Document::default()];
    let records = rank("冬天", &db, 5);
    assert_eq!(records.len(), 2);
}
