//! # Core
//!
//! The [`Analyzer`] reads a [`LineSource`] and computes one statistic per
//! call. [`Analyzer::report`] and [`Analyzer::compare`] bundle the full set
//! of statistics into serializable reports.

// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analyzer;
pub mod options;
pub mod report;

pub use analyzer::Analyzer;
pub use file_analyser_domain::{
    Document,
    analytics::{FrequencyTable, WordSet},
};
pub use file_analyser_infra::{FileSource, InMemorySource};
pub use file_analyser_ports::LineSource;
pub use file_analyser_shared_kernel::{AnalyserError, Result};
pub use options::ReportOptions;
pub use report::{AnalysisSummary, ComparisonReport, FileReport};
