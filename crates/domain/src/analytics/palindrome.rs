// crates/domain/src/analytics/palindrome.rs
use std::collections::HashSet;

use crate::document::Document;

/// Character-wise palindrome check. Empty and single-character strings qualify.
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    (0..len / 2).all(|i| chars[i] == chars[len - 1 - i])
}

/// Distinct lowercased palindromic words in first-seen order.
pub fn find_palindromic_words(doc: &Document) -> Vec<String> {
    let mut seen = HashSet::new();
    doc.words()
        .map(str::to_lowercase)
        .filter(|w| is_palindrome(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
