// crates/infra/src/text.rs
use file_analyser_domain::Document;
use file_analyser_shared_kernel::{InfraResult, InfrastructureError};

const UTF8_BOM: char = '\u{FEFF}';

/// Strict UTF-8 decoding; a leading byte order mark is dropped.
pub fn decode(bytes: Vec<u8>, origin: &str) -> InfraResult<String> {
    let text = String::from_utf8(bytes).map_err(|err| InfrastructureError::Decode {
        origin: origin.to_string(),
        details: err.utf8_error().to_string(),
    })?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Split on `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not open another line, so `"a\n"` is
/// one line and `""` is none.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match memchr::memchr2(b'\n', b'\r', rest.as_bytes()) {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

pub fn decode_document(bytes: Vec<u8>, origin: &str) -> InfraResult<Document> {
    let text = decode(bytes, origin)?;
    Ok(Document::new(split_lines(&text)))
}
