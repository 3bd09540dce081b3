// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AnalyserError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AnalyserError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl AnalyserError {
    /// Strips any `Context` layers and returns the underlying error.
    pub fn root(&self) -> &AnalyserError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the source could not be opened, read or decoded.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(
                InfrastructureError::FileRead { .. }
                    | InfrastructureError::Decode { .. }
                    | InfrastructureError::Io { .. }
            )
        )
    }

    /// True when a regular expression failed to compile.
    pub fn is_pattern_error(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InvalidPattern { .. }))
    }
}

pub type Result<T> = std::result::Result<T, AnalyserError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode '{origin}' as UTF-8 text: {details}")]
    Decode { origin: String, details: String },

    #[error("Failed to read from '{origin}': {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyserError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AnalyserError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AnalyserError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AnalyserError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
