// crates/core/src/options.rs

/// Parameters for the operations of a [`FileReport`](crate::FileReport) that take an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Word counted by occurrence and searched for as a substring.
    pub word: String,
    /// How many of the longest words to list.
    pub top: usize,
    /// Length a word must exceed to be reported as the first long word.
    pub min_chars: usize,
    pub regex: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { word: "file".to_string(), top: 5, min_chars: 5, regex: r"\b\w{5}\b".to_string() }
    }
}
