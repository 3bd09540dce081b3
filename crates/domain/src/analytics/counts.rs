// crates/domain/src/analytics/counts.rs
use std::collections::HashSet;

use crate::document::Document;

/// Number of lines, empty ones included.
pub fn count_lines(doc: &Document) -> usize {
    doc.len()
}

/// Number of words when splitting on the space character only.
pub fn count_words(doc: &Document) -> usize {
    doc.space_separated_words().count()
}

/// Lines left non-empty after trimming spaces and control characters (`<= U+0020`) from both ends.
pub fn count_non_empty_lines(doc: &Document) -> usize {
    doc.lines().iter().filter(|line| !is_blank(line)).count()
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Distinct whitespace-split words after lowercasing.
pub fn count_unique_words(doc: &Document) -> usize {
    doc.words().map(str::to_lowercase).collect::<HashSet<_>>().len()
}

/// Case-insensitive count of whole words equal to `target`.
pub fn count_word_occurrences(doc: &Document, target: &str) -> usize {
    let target = target.to_lowercase();
    doc.words().filter(|w| w.to_lowercase() == target).count()
}
