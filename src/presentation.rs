// src/presentation.rs
use crate::options::OutputFormat;
use anyhow::Result;
use file_analyser_core::{AnalysisSummary, ComparisonReport, FileReport};
use std::fmt::{self, Display, Write};

pub fn render(format: OutputFormat, reports: &[FileReport], comparison: Option<&ComparisonReport>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports, comparison)?),
        OutputFormat::Json => {
            let summary = AnalysisSummary { version: crate::VERSION, files: reports, comparison };
            let mut json = summary.to_json_pretty()?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn render_text(reports: &[FileReport], comparison: Option<&ComparisonReport>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for report in reports {
        write_report(&mut out, report)?;
    }
    if let Some(cmp) = comparison {
        banner(&mut out, &format!("Comparison between files: {} and {}", cmp.first, cmp.second))?;
        section(&mut out, "Find common words between the two files", format!("Common words: {}", list(&cmp.common_words)))?;
    }
    Ok(out)
}

fn write_report(out: &mut impl Write, r: &FileReport) -> fmt::Result {
    banner(out, &format!("Analysis of file: {}", r.source))?;
    section(out, "Count how many lines are in the file", r.lines)?;
    section(out, "Count how many words are in the file", r.words)?;
    section(out, "Count how many non-empty lines are in the file", r.non_empty_lines)?;
    section(out, "Count how many unique words are in the file", r.unique_words)?;

    let ws = &r.word_search;
    section(
        out,
        "Count how many times a specific word is mentioned in the file",
        format!("The word '{}' is mentioned {} times", ws.word, ws.occurrences),
    )?;
    section(
        out,
        "Find lines which contain a specific word in the file",
        format!("The word '{}' is mentioned in the following lines:\n{}", ws.word, list(&ws.lines)),
    )?;

    section(out, "Find average line length of the file", format!("Average line length: {}", average(r.average_line_length)))?;
    section(out, "Find average word length of the file", format!("Average word length: {}", average(r.average_word_length)))?;
    section(
        out,
        "Find the shortest line in the file",
        format!("Shortest line: {}", r.shortest_line.as_deref().unwrap_or("No lines found")),
    )?;
    section(
        out,
        "Find the longest line in the file",
        format!("Longest line: {}", r.longest_line.as_deref().unwrap_or("No lines found")),
    )?;

    let lw = &r.longest_words;
    section(out, &format!("Find the top {} longest words in the file", lw.top), format!("Longest words: {}", list(&lw.words)))?;

    let fw = &r.first_long_word;
    section(
        out,
        &format!("Find the first word with more than {} characters in the file", fw.min_chars),
        format!(
            "First word with more than {} characters: {}",
            fw.min_chars,
            fw.word.as_deref().unwrap_or("No word found")
        ),
    )?;

    let freq = r.word_frequency.iter().map(|(word, count)| format!("{word}={count}"));
    section(out, "Find the frequency of every word in the file", format!("Word frequency: {{{}}}", join(freq)))?;
    section(out, "Find lines that contain numbers in the file", format!("Lines containing numbers: {}", list(&r.lines_with_numbers)))?;
    section(
        out,
        "Find lines that match the regex pattern in the file",
        format!("Lines matching regex pattern '{}': {}", r.regex_matches.pattern, list(&r.regex_matches.lines)),
    )?;
    section(out, "Find palindromic words in the file", format!("Palindromic words: {}", list(&r.palindromes)))?;
    Ok(())
}

fn banner(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "-------- {title} --------")
}

fn section(out: &mut impl Write, title: &str, body: impl Display) -> fmt::Result {
    writeln!(out, "-------- {title} --------")?;
    writeln!(out, "{body}")?;
    writeln!(out, "--------")
}

fn join<I: IntoIterator<Item = S>, S: Display>(items: I) -> String {
    items.into_iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
}

fn list<'a, I: IntoIterator<Item = &'a String>>(items: I) -> String {
    format!("[{}]", join(items))
}

fn average(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
