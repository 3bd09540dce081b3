// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned, human readable report
    #[default]
    Text,
    /// One JSON document with every report
    Json,
}
