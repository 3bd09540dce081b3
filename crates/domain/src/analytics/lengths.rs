// crates/domain/src/analytics/lengths.rs
use std::cmp::{Ordering, Reverse};

use crate::document::{Document, char_len};

/// Which end of the length ordering to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Shortest,
    Longest,
}

impl Extremum {
    /// Whether `candidate` should replace the current pick. Ties keep the earlier line.
    #[inline]
    fn prefers(self, candidate: usize, current: usize) -> bool {
        let ordering = candidate.cmp(&current);
        match self {
            Self::Shortest => ordering == Ordering::Less,
            Self::Longest => ordering == Ordering::Greater,
        }
    }

    fn select(self, doc: &Document) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for line in doc.lines() {
            let len = char_len(line);
            if best.is_none_or(|(_, current)| self.prefers(len, current)) {
                best = Some((line.as_str(), len));
            }
        }
        best.map(|(line, _)| line)
    }
}

fn mean(total: usize, count: usize) -> Option<f64> {
    (count > 0).then(|| total as f64 / count as f64)
}

/// Mean line length in characters; `None` for a document without lines.
pub fn average_line_length(doc: &Document) -> Option<f64> {
    let total = doc.lines().iter().map(|l| char_len(l)).sum();
    mean(total, doc.len())
}

/// Mean word length in characters; `None` when the document has no words.
pub fn average_word_length(doc: &Document) -> Option<f64> {
    let (total, count) = doc.words().fold((0usize, 0usize), |(total, count), w| (total + char_len(w), count + 1));
    mean(total, count)
}

pub fn find_shortest_line(doc: &Document) -> Option<&str> {
    Extremum::Shortest.select(doc)
}

pub fn find_longest_line(doc: &Document) -> Option<&str> {
    Extremum::Longest.select(doc)
}

/// Up to `n` words ordered by descending length; equal lengths keep document order.
pub fn find_top_n_longest_words(doc: &Document, n: usize) -> Vec<&str> {
    let mut words: Vec<&str> = doc.words().collect();
    // `sort_by_key` is stable, which provides the tie ordering.
    words.sort_by_key(|w| Reverse(char_len(w)));
    words.truncate(n);
    words
}

/// First word, in document order, longer than `n` characters.
pub fn first_word_longer_than(doc: &Document, n: usize) -> Option<&str> {
    doc.words().find(|w| char_len(w) > n)
}
