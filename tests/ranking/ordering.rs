//! Score ordering and tie stability.

use super::common::*;
use ragrank::{rank, score_candidates, Ranker, RankerConfig};

#[test]
fn test_ties_keep_database_order() {
    let db = vec![
        make_doc("first", "", "冬天的故事，一段很長很長的文字敘述在這裡，多加幾個字"),
        make_doc("second", "", "另一個冬天的故事，也是很長很長的文字敘述，多加幾個字"),
        make_doc("third", "", "第三個冬天的故事，同樣是很長很長的文字敘述，多加幾個字"),
    ];
    let records = rank("冬天", &db, 3);
    assert_eq!(ids(&records), vec!["first", "second", "third"]);
}

#[test]
fn test_higher_score_moves_ahead_of_earlier_rows() {
    let db = vec![
        make_doc("zero", "", "完全無關的文字內容，只是為了湊滿二十個字而已"),
        make_doc("one", "", "冬天來了，這是一篇只和冬天有一點關係的長文章"),
        make_doc("two", "", "冬天穿什麼？這是一篇和冬天穿衣有關係的長文章"),
    ];
    let records = rank("冬天穿", &db, 3);
    assert_eq!(ids(&records), vec!["two", "one", "zero"]);
}

#[test]
fn test_repeated_hits_do_not_add_up() {
    let db = vec![
        make_doc("many", "", &"冬天".repeat(30)),
        make_doc("varied", "", "冬天穿搭推薦，今年流行的毛衣與大衣款式整理"),
    ];
    // "many" only ever hits 冬天 (and 天冬); "varied" hits more distinct bigrams
    let records = rank("冬天穿搭", &db, 2);
    assert_eq!(ids(&records), vec!["varied", "many"]);
}

#[test]
fn test_score_candidates_is_sorted_and_stable() {
    let db = beauty_db();
    let refs: Vec<_> = db.iter().collect();
    let scored = score_candidates("冬天穿搭推薦", &refs);

    let scores: Vec<u32> = scored.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![3, 2, 1, 1]);
    let ids: Vec<_> = scored.iter().filter_map(|c| c.doc.id()).collect();
    assert_eq!(ids, vec!["102", "104", "101", "103"]);
}

#[test]
fn test_top_candidates_matches_rank() {
    let db = beauty_db();
    let ranker = Ranker::new(RankerConfig::with_top_k(3));
    let top = ranker.top_candidates("冬天穿搭推薦", &db);
    let records = ranker.rank("冬天穿搭推薦", &db);

    assert_eq!(top.len(), records.len());
    for (candidate, record) in top.iter().zip(&records) {
        assert_eq!(candidate.doc.id(), Some(record.id.as_str()));
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let db = ragrank::testing::synthetic_corpus(200, 12, 7);
    let first = rank("冬天穿搭，毛衣怎麼搭配", &db, 10);
    let second = rank("冬天穿搭，毛衣怎麼搭配", &db, 10);
    assert_eq!(first, second);
}
