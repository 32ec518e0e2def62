pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::core::Archive;
use crate::errors::ArchiveError;
use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read and parse an archive export from disk.
pub fn load_archive(path: &Path) -> Result<Archive, ArchiveError> {
    let raw = fs::read_to_string(path).map_err(|source| ArchiveError::io(path, source))?;
    parse_archive(&raw)
}

/// Parse an archive document from raw JSON text.
///
/// Distinguishes the two structural failure modes: content that is not
/// JSON at all, and JSON whose top-level shape is not the export's.
pub fn parse_archive(raw: &str) -> Result<Archive, ArchiveError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(ArchiveError::Json)?;
    if !value.is_object() {
        return Err(ArchiveError::Shape(
            "top-level value is not an object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| ArchiveError::Shape(err.to_string()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
