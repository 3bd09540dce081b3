//! # Domain
//!
//! Pure, side-effect free statistics over a [`Document`].
//!
//! - [`document`]: the line sequence and the two word tokenizers
//! - [`analytics`]: counts, lengths, searches, vocabulary and palindromes
//!
//! Nothing in this crate performs I/O; reading a document is the job of
//! the `ports` / `infra` crates.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod document;

pub use document::Document;
