// crates/domain/src/analytics/vocabulary.rs
use std::collections::{BTreeMap, BTreeSet};

use crate::document::Document;

/// Lowercased word to number of occurrences.
pub type FrequencyTable = BTreeMap<String, usize>;

/// Distinct lowercased words.
pub type WordSet = BTreeSet<String>;

pub fn word_frequency(doc: &Document) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for word in doc.words() {
        *table.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    table
}

pub fn word_set(doc: &Document) -> WordSet {
    doc.words().map(str::to_lowercase).collect()
}

/// Lowercased words present in both documents.
pub fn common_words(a: &Document, b: &Document) -> WordSet {
    let left = word_set(a);
    b.words().map(str::to_lowercase).filter(|w| left.contains(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_is_case_insensitive() {
        let doc = Document::from_iter(["The cat", "the\tCAT the"]);
        let table = word_frequency(&doc);
        assert_eq!(table.get("the"), Some(&3));
        assert_eq!(table.get("cat"), Some(&2));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn common_words_intersect_vocabularies() {
        let a = Document::from_iter(["Apple banana cherry"]);
        let b = Document::from_iter(["banana APPLE", "date banana"]);
        let expected: WordSet = ["apple", "banana"].into_iter().map(String::from).collect();
        assert_eq!(common_words(&a, &b), expected);
        assert_eq!(common_words(&b, &a), expected);
    }

    #[test]
    fn nothing_in_common_with_empty_document() {
        let a = Document::from_iter(["words here"]);
        assert!(common_words(&a, &Document::default()).is_empty());
    }
}
