//! Integration test suite for the `file_analyser` binary.

mod common;

#[path = "integration/end_to_end.rs"]
mod end_to_end;
#[path = "integration/output_formats.rs"]
mod output_formats;
