// crates/ports/src/source.rs
use file_analyser_domain::Document;
use file_analyser_shared_kernel::Result;

/// Port for reading a document.
///
/// Every call performs a fresh, complete read. Implementations must release
/// whatever they acquired before returning, on success and on error.
pub trait LineSource {
    fn read_document(&self) -> Result<Document>;

    /// Human readable origin, used in logs and error context.
    fn describe(&self) -> String;
}
