// crates/core/src/report.rs
use serde::Serialize;

use crate::{analyzer::Analyzer, options::ReportOptions};
use file_analyser_domain::{
    Document,
    analytics::{self, FrequencyTable, LinePattern, WordSet},
};
use file_analyser_ports::LineSource;
use file_analyser_shared_kernel::{ErrorContext, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordSearch {
    pub word: String,
    pub occurrences: usize,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongestWords {
    pub top: usize,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirstLongWord {
    pub min_chars: usize,
    pub word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegexMatches {
    pub pattern: String,
    pub lines: Vec<String>,
}

/// Every single-document statistic, in the order they are presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub source: String,
    pub lines: usize,
    pub words: usize,
    pub non_empty_lines: usize,
    pub unique_words: usize,
    pub word_search: WordSearch,
    pub average_line_length: Option<f64>,
    pub average_word_length: Option<f64>,
    pub shortest_line: Option<String>,
    pub longest_line: Option<String>,
    pub longest_words: LongestWords,
    pub first_long_word: FirstLongWord,
    pub word_frequency: FrequencyTable,
    pub lines_with_numbers: Vec<String>,
    pub regex_matches: RegexMatches,
    pub palindromes: Vec<String>,
}

fn owned(lines: Vec<&str>) -> Vec<String> {
    lines.into_iter().map(str::to_owned).collect()
}

impl FileReport {
    pub fn from_document(source: impl Into<String>, doc: &Document, options: &ReportOptions, pattern: &LinePattern) -> Self {
        Self {
            source: source.into(),
            lines: analytics::count_lines(doc),
            words: analytics::count_words(doc),
            non_empty_lines: analytics::count_non_empty_lines(doc),
            unique_words: analytics::count_unique_words(doc),
            word_search: WordSearch {
                word: options.word.clone(),
                occurrences: analytics::count_word_occurrences(doc, &options.word),
                lines: owned(analytics::find_lines_containing_word(doc, &options.word)),
            },
            average_line_length: analytics::average_line_length(doc),
            average_word_length: analytics::average_word_length(doc),
            shortest_line: analytics::find_shortest_line(doc).map(str::to_owned),
            longest_line: analytics::find_longest_line(doc).map(str::to_owned),
            longest_words: LongestWords {
                top: options.top,
                words: owned(analytics::find_top_n_longest_words(doc, options.top)),
            },
            first_long_word: FirstLongWord {
                min_chars: options.min_chars,
                word: analytics::first_word_longer_than(doc, options.min_chars).map(str::to_owned),
            },
            word_frequency: analytics::word_frequency(doc),
            lines_with_numbers: owned(analytics::find_lines_containing_numbers(doc)),
            regex_matches: RegexMatches {
                pattern: pattern.as_str().to_string(),
                lines: owned(analytics::find_lines_matching(doc, pattern)),
            },
            palindromes: analytics::find_palindromic_words(doc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub first: String,
    pub second: String,
    pub common_words: WordSet,
}

/// All reports of one run, as emitted in machine readable form.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary<'a> {
    pub version: &'a str,
    pub files: &'a [FileReport],
    pub comparison: Option<&'a ComparisonReport>,
}

impl AnalysisSummary<'_> {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Analyzer {
    /// Builds a [`FileReport`] from a single read of `source`.
    ///
    /// The regex is compiled first; a malformed pattern fails without reading.
    pub fn report<S: LineSource + ?Sized>(source: &S, options: &ReportOptions) -> Result<FileReport> {
        let pattern = LinePattern::compile(&options.regex)?;
        let label = source.describe();
        let doc = source.read_document().with_context(|| format!("analysing {label}"))?;
        log::debug!("building report for {label} ({} line(s))", doc.len());
        Ok(FileReport::from_document(label, &doc, options, &pattern))
    }

    pub fn compare<A, B>(first: &A, second: &B) -> Result<ComparisonReport>
    where
        A: LineSource + ?Sized,
        B: LineSource + ?Sized,
    {
        Ok(ComparisonReport {
            first: first.describe(),
            second: second.describe(),
            common_words: Analyzer::find_common_words(first, second)?,
        })
    }
}
