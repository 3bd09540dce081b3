// crates/infra/src/source.rs
use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::{persistence::FileReader, text::decode_document};
use file_analyser_domain::Document;
use file_analyser_ports::LineSource;
use file_analyser_shared_kernel::{InfraResult, InfrastructureError, Result};

/// A text file on the local filesystem, re-read on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_document(&self) -> Result<Document> {
        let bytes = FileReader::read_to_end(&self.path)?;
        let doc = decode_document(bytes, &self.describe())?;
        log::debug!("read {} line(s) from {}", doc.len(), self.path.display());
        Ok(doc)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A document held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    label: String,
    document: Document,
}

impl InMemorySource {
    pub fn new(document: impl Into<Document>) -> Self {
        Self { label: "<memory>".to_string(), document: document.into() }
    }

    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(lines.into_iter().collect::<Document>())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl LineSource for InMemorySource {
    fn read_document(&self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Reads an already-open reader to its end and splits it into lines.
pub fn read_document<R: Read>(mut reader: R, origin: &str) -> InfraResult<Document> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| InfrastructureError::Io { origin: origin.to_string(), source })?;
    decode_document(buf, origin)
}
