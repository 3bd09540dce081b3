// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    AnalyserError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, Result,
};

pub mod error;
