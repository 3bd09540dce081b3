// src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
use file_analyser_core::ReportOptions;
use std::path::{Path, PathBuf};

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub first: PathBuf,
    pub second: Option<PathBuf>,
    pub report: ReportOptions,
    pub format: OutputFormat,
    pub verbosity: u8,
}

fn resolve(base: Option<&Path>, path: PathBuf) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let base = args.base_dir.as_deref();
        let report = ReportOptions {
            word: args.analysis.word,
            top: args.analysis.top,
            min_chars: args.analysis.min_chars,
            regex: args.analysis.regex,
        };

        Self {
            first: resolve(base, args.first),
            second: args.second.map(|p| resolve(base, p)),
            report,
            format: args.output.format,
            verbosity: args.output.verbose,
        }
    }
}
