//! Utility functions for string processing.

/// Normalize a query for bigram extraction: keep ASCII word characters and
/// CJK ideographs, drop everything else, lowercase.
///
/// - "冬天穿搭推薦！" → "冬天穿搭推薦"
/// - "Top 10 Tips, 2024" → "top10tips2024"
/// - "snake_case" → "snake_case"
///
/// Only the query goes through this. Document text is lowercased but
/// otherwise left alone before substring matching.
pub fn normalize_query(value: &str) -> String {
    value
        .chars()
        .filter(|&c| is_query_char(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// ASCII word character (`[A-Za-z0-9_]`) or CJK Unified Ideograph in
/// U+4E00..=U+9FA5.
#[inline]
pub fn is_query_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// First `max_chars` characters of `value`, cut on a char boundary.
///
/// Counts Unicode scalar values, not bytes, so CJK text is not cut short.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}
