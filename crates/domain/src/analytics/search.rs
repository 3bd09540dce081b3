// crates/domain/src/analytics/search.rs
use regex::Regex;

use crate::document::Document;
use file_analyser_shared_kernel::{DomainError, DomainResult};

/// Compiled regular expression used to select lines.
///
/// Compilation is separate from scanning so that a malformed pattern is
/// reported before any input is read. Classes such as `\w` and `\b` are
/// Unicode-aware; prefix a pattern with `(?-u)` for ASCII-only classes.
#[derive(Debug, Clone)]
pub struct LinePattern {
    regex: Regex,
}

impl LinePattern {
    pub fn compile(pattern: &str) -> DomainResult<Self> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|err| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                details: err.to_string(),
                source: Some(Box::new(err)),
            })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Search semantics: the pattern may match anywhere in the line.
    #[inline]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Lines containing `target` as a case-insensitive substring.
pub fn find_lines_containing_word<'a>(doc: &'a Document, target: &str) -> Vec<&'a str> {
    let target = target.to_lowercase();
    doc.lines()
        .iter()
        .filter(|line| line.to_lowercase().contains(&target))
        .map(String::as_str)
        .collect()
}

/// Lines with at least one ASCII decimal digit.
pub fn find_lines_containing_numbers(doc: &Document) -> Vec<&str> {
    doc.lines()
        .iter()
        .filter(|line| line.chars().any(|c| c.is_ascii_digit()))
        .map(String::as_str)
        .collect()
}

pub fn find_lines_matching<'a>(doc: &'a Document, pattern: &LinePattern) -> Vec<&'a str> {
    doc.lines()
        .iter()
        .filter(|line| pattern.is_match(line))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_word_is_substring_match() {
        let doc = Document::from_iter(["A File here", "profile", "nothing"]);
        assert_eq!(find_lines_containing_word(&doc, "FILE"), vec!["A File here", "profile"]);
    }

    #[test]
    fn lines_with_digits() {
        let doc = Document::from_iter(["no digits", "room 101", "", "x9"]);
        assert_eq!(find_lines_containing_numbers(&doc), vec!["room 101", "x9"]);
    }

    #[test]
    fn regex_searches_anywhere_in_line() {
        let doc = Document::from_iter(["hello world", "hi", "a bb ccc"]);
        let pattern = LinePattern::compile(r"\b\w{5}\b").unwrap();
        assert_eq!(find_lines_matching(&doc, &pattern), vec!["hello world"]);

        let anchored = LinePattern::compile("^a").unwrap();
        assert_eq!(find_lines_matching(&doc, &anchored), vec!["a bb ccc"]);
    }

    #[test]
    fn word_classes_are_unicode_aware_unless_disabled() {
        let doc = Document::from_iter(["héllo", "plain"]);
        let unicode = LinePattern::compile(r"\b\w{5}\b").unwrap();
        assert_eq!(find_lines_matching(&doc, &unicode), vec!["héllo", "plain"]);

        let ascii = LinePattern::compile(r"(?-u)\b\w{5}\b").unwrap();
        assert_eq!(find_lines_matching(&doc, &ascii), vec!["plain"]);
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let err = LinePattern::compile("[unclosed").unwrap_err();
        let DomainError::InvalidPattern { pattern, .. } = err;
        assert_eq!(pattern, "[unclosed");
    }
}
