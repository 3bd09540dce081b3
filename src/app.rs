// src/app.rs
use crate::{config::Config, presentation};
use anyhow::{Context, Result};
use file_analyser_core::{Analyzer, FileSource};

/// Analyse the configured files, compare them when there are two, and print the result.
pub fn run(config: &Config) -> Result<()> {
    let first = FileSource::new(&config.first);
    let second = config.second.as_ref().map(FileSource::new);

    let mut reports = Vec::with_capacity(2);
    for source in std::iter::once(&first).chain(second.as_ref()) {
        log::debug!("analysing {}", source.path().display());
        let report = Analyzer::report(source, &config.report)
            .with_context(|| format!("failed to analyse {}", source.path().display()))?;
        reports.push(report);
    }

    let comparison = second
        .as_ref()
        .map(|second| Analyzer::compare(&first, second))
        .transpose()
        .context("failed to compare files")?;

    let rendered = presentation::render(config.format, &reports, comparison.as_ref())?;
    print!("{rendered}");
    Ok(())
}
