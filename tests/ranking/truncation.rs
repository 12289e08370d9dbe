//! Context record projection: placeholders and the content cap.

use super::common::*;
use ragrank::{rank, Ranker, RankerConfig, DEFAULT_MAX_CONTEXT_CHARS, NO_ID, NO_TITLE};

#[test]
fn test_long_matching_content_is_cut_to_500_chars() {
    let content = "冬天穿搭".repeat(150);
    assert_eq!(content.chars().count(), 600);

    let db = vec![make_doc("1", "", &content)];
    let records = rank("冬天穿搭", &db, 1);
    assert_eq!(records[0].content.chars().count(), DEFAULT_MAX_CONTEXT_CHARS);
    assert!(content.starts_with(&records[0].content));
}

#[test]
fn test_content_at_limit_is_unchanged() {
    let exact = "a".repeat(500);
    let shorter = "b".repeat(499);
    let db = vec![make_doc("1", "", &exact), make_doc("2", "", &shorter)];

    let records = rank("", &db, 2);
    assert_eq!(records[0].content, exact);
    assert_eq!(records[1].content, shorter);
}

#[test]
fn test_truncation_cuts_on_char_boundary() {
    let content = format!("{}穿搭", "x".repeat(499));
    let db = vec![make_doc("1", "", &content)];
    let records = rank("", &db, 1);
    assert_eq!(records[0].content, format!("{}穿", "x".repeat(499)));
}

#[test]
fn test_missing_id_and_title_get_placeholders() {
    let db = vec![make_untitled_doc(&"內容".repeat(20))];
    let records = rank("內容", &db, 1);
    assert_eq!(records[0].id, NO_ID);
    assert_eq!(records[0].title, NO_TITLE);
}

#[test]
fn test_record_does_not_alias_document() {
    let mut db = vec![make_doc("1", "標題", &"內容".repeat(20))];
    let records = rank("內容", &db, 1);
    db[0].title = Some("changed".to_string());
    assert_eq!(records[0].title, "標題");
}

#[test]
fn test_custom_context_cap() {
    let db = vec![make_doc("1", "", &"字".repeat(100))];
    let ranker = Ranker::new(RankerConfig {
        max_context_chars: 10,
        ..RankerConfig::default()
    });
    let records = ranker.rank("", &db);
    assert_eq!(records[0].content.chars().count(), 10);
}
