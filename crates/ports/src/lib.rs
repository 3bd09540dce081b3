//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: obtaining a [`Document`](file_analyser_domain::Document) from somewhere
//!
//! The analyzer only ever talks to these traits, so it stays independent of
//! where the text actually lives.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::LineSource;
