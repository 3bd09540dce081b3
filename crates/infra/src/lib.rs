// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod source;
pub mod text;

pub use source::{FileSource, InMemorySource, read_document};
