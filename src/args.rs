// src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "file_analyser",
    version,
    about = "Line, word and vocabulary statistics for plain-text files"
)]
pub struct Args {
    /// File to analyse
    #[arg(value_hint = ValueHint::FilePath)]
    pub first: PathBuf,

    /// Second file: analysed too, then compared with the first
    #[arg(value_hint = ValueHint::FilePath)]
    pub second: Option<PathBuf>,

    /// Directory that relative file paths are resolved against
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub base_dir: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalysisOptions {
    /// Word to count and to search lines for
    #[arg(long, default_value = "file")]
    pub word: String,

    /// Number of longest words to list
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Report the first word longer than this many characters
    #[arg(long, default_value_t = 5)]
    pub min_chars: usize,

    /// Regular expression searched for in every line
    #[arg(long, default_value = r"\b\w{5}\b")]
    pub regex: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
