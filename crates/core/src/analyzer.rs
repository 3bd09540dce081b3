// crates/core/src/analyzer.rs
use file_analyser_domain::{
    Document,
    analytics::{self, FrequencyTable, LinePattern, WordSet},
};
use file_analyser_ports::LineSource;
use file_analyser_shared_kernel::{ErrorContext, Result};

/// Read-only statistics over line sources.
///
/// Every method reads its source afresh, so repeated calls against an
/// unchanged file return the same value. Read failures are returned as-is.
pub struct Analyzer;

fn load<S: LineSource + ?Sized>(operation: &str, source: &S) -> Result<Document> {
    log::trace!("{operation}: {}", source.describe());
    source.read_document()
}

fn owned(lines: Vec<&str>) -> Vec<String> {
    lines.into_iter().map(str::to_owned).collect()
}

impl Analyzer {
    pub fn count_lines<S: LineSource + ?Sized>(source: &S) -> Result<usize> {
        let doc = load("count_lines", source)?;
        Ok(analytics::count_lines(&doc))
    }

    /// Words separated by the space character; tabs do not split.
    pub fn count_words<S: LineSource + ?Sized>(source: &S) -> Result<usize> {
        let doc = load("count_words", source)?;
        Ok(analytics::count_words(&doc))
    }

    pub fn count_non_empty_lines<S: LineSource + ?Sized>(source: &S) -> Result<usize> {
        let doc = load("count_non_empty_lines", source)?;
        Ok(analytics::count_non_empty_lines(&doc))
    }

    pub fn count_unique_words<S: LineSource + ?Sized>(source: &S) -> Result<usize> {
        let doc = load("count_unique_words", source)?;
        Ok(analytics::count_unique_words(&doc))
    }

    pub fn count_word_occurrences<S: LineSource + ?Sized>(source: &S, word: &str) -> Result<usize> {
        let doc = load("count_word_occurrences", source)?;
        Ok(analytics::count_word_occurrences(&doc, word))
    }

    pub fn find_lines_containing_word<S: LineSource + ?Sized>(source: &S, word: &str) -> Result<Vec<String>> {
        let doc = load("find_lines_containing_word", source)?;
        Ok(owned(analytics::find_lines_containing_word(&doc, word)))
    }

    /// `None` when there are no lines.
    pub fn average_line_length<S: LineSource + ?Sized>(source: &S) -> Result<Option<f64>> {
        let doc = load("average_line_length", source)?;
        Ok(analytics::average_line_length(&doc))
    }

    /// `None` when there are no words.
    pub fn average_word_length<S: LineSource + ?Sized>(source: &S) -> Result<Option<f64>> {
        let doc = load("average_word_length", source)?;
        Ok(analytics::average_word_length(&doc))
    }

    pub fn find_shortest_line<S: LineSource + ?Sized>(source: &S) -> Result<Option<String>> {
        let doc = load("find_shortest_line", source)?;
        Ok(analytics::find_shortest_line(&doc).map(str::to_owned))
    }

    pub fn find_longest_line<S: LineSource + ?Sized>(source: &S) -> Result<Option<String>> {
        let doc = load("find_longest_line", source)?;
        Ok(analytics::find_longest_line(&doc).map(str::to_owned))
    }

    pub fn find_top_n_longest_words<S: LineSource + ?Sized>(source: &S, n: usize) -> Result<Vec<String>> {
        let doc = load("find_top_n_longest_words", source)?;
        Ok(owned(analytics::find_top_n_longest_words(&doc, n)))
    }

    pub fn first_word_longer_than<S: LineSource + ?Sized>(source: &S, n: usize) -> Result<Option<String>> {
        let doc = load("first_word_longer_than", source)?;
        Ok(analytics::first_word_longer_than(&doc, n).map(str::to_owned))
    }

    pub fn find_common_words<A, B>(first: &A, second: &B) -> Result<WordSet>
    where
        A: LineSource + ?Sized,
        B: LineSource + ?Sized,
    {
        let a = load("find_common_words", first).context("reading first document")?;
        let b = load("find_common_words", second).context("reading second document")?;
        Ok(analytics::common_words(&a, &b))
    }

    pub fn word_frequency<S: LineSource + ?Sized>(source: &S) -> Result<FrequencyTable> {
        let doc = load("word_frequency", source)?;
        Ok(analytics::word_frequency(&doc))
    }

    pub fn find_lines_containing_numbers<S: LineSource + ?Sized>(source: &S) -> Result<Vec<String>> {
        let doc = load("find_lines_containing_numbers", source)?;
        Ok(owned(analytics::find_lines_containing_numbers(&doc)))
    }

    /// The pattern is compiled before the source is touched.
    pub fn find_lines_matching_regex<S: LineSource + ?Sized>(source: &S, pattern: &str) -> Result<Vec<String>> {
        let pattern = LinePattern::compile(pattern)?;
        let doc = load("find_lines_matching_regex", source)?;
        Ok(owned(analytics::find_lines_matching(&doc, &pattern)))
    }

    pub fn find_palindromic_words<S: LineSource + ?Sized>(source: &S) -> Result<Vec<String>> {
        let doc = load("find_palindromic_words", source)?;
        Ok(analytics::find_palindromic_words(&doc))
    }
}
