//! jslot file reading

use super::document::JslotDocument;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a jslot file from disk
///
/// Returns `Ok(None)` when the file does not exist. A leading UTF-8 BOM is skipped.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not a valid jslot document.
pub fn read_jslot<P: AsRef<Path>>(path: P) -> Result<Option<JslotDocument>> {
    let bytes = match fs::read(path.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let doc: JslotDocument = serde_json::from_slice(content)?;
    Ok(Some(doc))
}

/// Parse a jslot document from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed or missing required fields.
pub fn parse_jslot(content: &str) -> Result<JslotDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let doc: JslotDocument = serde_json::from_str(content)?;
    Ok(doc)
}
